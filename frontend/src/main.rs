mod components;
mod pages;
mod services;

use yew::prelude::*;

use crate::pages::meetings::Meetings;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Meetings />
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    // The page provides the render target; without it there is nothing to
    // do and the document is left as-is.
    let Some(container) = gloo::utils::document().get_element_by_id("meetings-container") else {
        tracing::warn!("meetings-container element not found, not mounting");
        return;
    };

    yew::Renderer::<App>::with_root(container).render();
}

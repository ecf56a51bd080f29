use chrono::NaiveDateTime;
use gloo::timers::callback::Interval;
use shared::api::MeetingsResponse;
use shared::refresh::{Clock, RefreshPlanner, MIDNIGHT_CHECK_INTERVAL_MS, REFRESH_INTERVAL_MS};
use yew::prelude::*;

use crate::components::meeting_list::MeetingList;
use crate::services::api::ApiService;

struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// `user_id` from the page query string. An empty value counts as absent,
/// matching how the backend links are generated.
fn user_id_from_search(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "user_id" && !value.is_empty()).then(|| value.to_string())
    })
}

fn user_id_from_location() -> Option<String> {
    let search = gloo::utils::window().location().search().ok()?;
    user_id_from_search(&search)
}

/// The meeting list refresher: fetches the grouped meeting list on mount,
/// every 5 minutes, and once more at local midnight, replacing the rendered
/// list wholesale on each successful fetch.
#[function_component(Meetings)]
pub fn meetings() -> Html {
    let response = use_state(|| None::<MeetingsResponse>);
    let loading = use_state(|| true);
    let planner = use_mut_ref(|| RefreshPlanner::new(LocalClock));
    let user_id = use_memo((), |_| user_id_from_location());

    let refresh = {
        let response = response.clone();
        let loading = loading.clone();
        let planner = planner.clone();
        let user_id = user_id.clone();

        Callback::from(move |_: ()| {
            let Some(id) = (*user_id).clone() else {
                return;
            };
            let ticket = planner.borrow_mut().begin();

            let response = response.clone();
            let loading = loading.clone();
            let planner = planner.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::fetch_meetings(&id).await {
                    Ok(data) => {
                        if planner.borrow().is_current(ticket) {
                            response.set(Some(data));
                        } else {
                            tracing::debug!("Discarding stale meetings response");
                        }
                        loading.set(false);
                    }
                    Err(e) => {
                        // keep whatever is on screen; the next cycle retries
                        tracing::error!("Failed to fetch meetings: {}", e);
                        loading.set(false);
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        let planner = planner.clone();

        use_effect_with((), move |_| {
            refresh.emit(());

            let poll = {
                let refresh = refresh.clone();
                Interval::new(REFRESH_INTERVAL_MS, move || refresh.emit(()))
            };
            let midnight = Interval::new(MIDNIGHT_CHECK_INTERVAL_MS, move || {
                if planner.borrow_mut().midnight_due() {
                    refresh.emit(());
                }
            });

            move || {
                drop(poll);
                drop(midnight);
            }
        });
    }

    if user_id.is_none() {
        return html! {};
    }

    if *loading && response.is_none() {
        return html! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        };
    }

    match response.as_ref() {
        Some(data) => html! { <MeetingList response={data.clone()} /> },
        None => html! {},
    }
}

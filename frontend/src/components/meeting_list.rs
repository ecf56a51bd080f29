use shared::api::MeetingsResponse;
use yew::prelude::*;

use crate::components::day_section::DaySectionView;

#[derive(Properties, PartialEq)]
pub struct MeetingListProps {
    pub response: MeetingsResponse,
}

#[function_component(MeetingList)]
pub fn meeting_list(props: &MeetingListProps) -> Html {
    if props.response.meetings.is_empty() {
        return html! {
            <div class="no-meetings-global">
                <i class="bi bi-calendar-x"></i>
                <p>{ "Нет предстоящих встреч на ближайшие дни" }</p>
            </div>
        };
    }

    html! {
        <>
            { for props.response.meetings.iter().map(|section| html! {
                <DaySectionView section={section.clone()} />
            })}
        </>
    }
}

use shared::models::DaySection;
use yew::prelude::*;

use crate::components::meeting_card::MeetingCard;

#[derive(Properties, PartialEq)]
pub struct DaySectionProps {
    pub section: DaySection,
}

#[function_component(DaySectionView)]
pub fn day_section(props: &DaySectionProps) -> Html {
    let section = &props.section;

    html! {
        <div class="day-section">
            <h3>
                <span class="day-name">{ &section.day_name }</span>
                <span class="day-date">{ &section.date }</span>
            </h3>
            if section.meetings.is_empty() {
                <div class="no-meetings-card">
                    <i class="bi bi-calendar-x"></i>
                    <p>{ "Нет встреч на этот день" }</p>
                </div>
            } else {
                { for section.meetings.iter().map(|meeting| html! {
                    <MeetingCard meeting={meeting.clone()} />
                })}
            }
        </div>
    }
}

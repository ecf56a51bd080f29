use shared::models::Meeting;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MeetingCardProps {
    pub meeting: Meeting,
}

#[function_component(MeetingCard)]
pub fn meeting_card(props: &MeetingCardProps) -> Html {
    let meeting = &props.meeting;

    html! {
        <div class="meeting-card">
            <h4>{ &meeting.title }</h4>
            <div class="time-info">
                <div>
                    <i class="bi bi-globe"></i>
                    <span class="location-label">{ "Украина:" }</span>
                    { format!(" {} - {}", meeting.start_ua, meeting.end_ua) }
                </div>
                <div>
                    <i class="bi bi-globe-asia-australia"></i>
                    <span class="location-label">{ "Таиланд:" }</span>
                    { format!(" {} - {}", meeting.start_th, meeting.end_th) }
                </div>
            </div>
            if let Some(attendants) = meeting.attendants() {
                <div class="meeting-detail">
                    <i class="bi bi-people"></i>
                    { attendants }
                </div>
            }
            if let Some(location) = meeting.location() {
                <div class="meeting-detail">
                    <i class="bi bi-geo-alt"></i>
                    { location }
                </div>
            }
            if let Some(link) = meeting.hangout_link() {
                <div class="meeting-detail">
                    <a href={link.to_string()} target="_blank" class="meeting-link">
                        <i class="bi bi-camera-video"></i>
                        { "Присоединиться к встрече" }
                    </a>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting() -> Meeting {
        Meeting {
            title: "Sync".into(),
            start_ua: "10:00".into(),
            end_ua: "10:30".into(),
            start_th: "14:00".into(),
            end_th: "14:30".into(),
            attendants: None,
            location: None,
            hangout_link: None,
        }
    }

    async fn render(meeting: Meeting) -> String {
        yew::LocalServerRenderer::<MeetingCard>::with_props(MeetingCardProps { meeting })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_both_time_ranges() {
        let html = render(meeting()).await;
        assert!(html.contains("Украина:"));
        assert!(html.contains("10:00 - 10:30"));
        assert!(html.contains("Таиланд:"));
        assert!(html.contains("14:00 - 14:30"));
    }

    #[tokio::test]
    async fn omits_absent_optional_blocks() {
        let html = render(meeting()).await;
        assert!(!html.contains("bi-people"));
        assert!(!html.contains("bi-geo-alt"));
        assert!(!html.contains("<a"));
    }

    #[tokio::test]
    async fn blank_location_renders_no_location_block() {
        let mut m = meeting();
        m.location = Some("   ".into());
        let html = render(m).await;
        assert!(!html.contains("bi-geo-alt"));
    }

    #[tokio::test]
    async fn join_link_renders_exactly_once_in_new_context() {
        let mut m = meeting();
        m.hangout_link = Some("https://meet.google.com/abc-defg-hij".into());
        let html = render(m).await;
        assert_eq!(html.matches("href=\"https://meet.google.com/abc-defg-hij\"").count(), 1);
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("Присоединиться к встрече"));
    }
}

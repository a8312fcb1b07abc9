use chrono::Local;
use yew::prelude::*;

use shared::format::{attendee_label, format_time_range};
use shared::models::Meeting;

#[derive(Properties, PartialEq)]
pub struct MeetingCardProps {
    pub meeting: Meeting,
}

/// One meeting as a card. Pure mapping from the record to markup; times are
/// shown in the viewer's timezone.
#[function_component(MeetingCard)]
pub fn meeting_card(props: &MeetingCardProps) -> Html {
    let meeting = &props.meeting;
    let start = meeting.start_time.with_timezone(&Local);
    let end = meeting.end_time.with_timezone(&Local);

    html! {
        <div class="meeting-card">
            <div class="meeting-title">{ &meeting.title }</div>
            <div class="meeting-time">{ format_time_range(&start, &end) }</div>
            if let Some(description) = &meeting.description {
                <div class="meeting-description">{ description }</div>
            }
            <div class="meeting-meta">
                <span class="meeting-attendees">{ attendee_label(meeting.attendees.len()) }</span>
                if let Some(link) = &meeting.link {
                    <a class="meeting-link" href={link.clone()} target="_blank">{ "Join call" }</a>
                }
            </div>
        </div>
    }
}

use yew::prelude::*;

use shared::models::Meeting;

use crate::components::meeting_card::MeetingCard;

#[derive(Properties, PartialEq)]
pub struct MeetingListProps {
    pub title: String,
    pub meetings: Vec<Meeting>,
    pub empty_message: String,
}

#[function_component(MeetingList)]
pub fn meeting_list(props: &MeetingListProps) -> Html {
    html! {
        <section class="meeting-section">
            <h2>{ &props.title }</h2>
            if props.meetings.is_empty() {
                <div class="empty-state">
                    <p>{ &props.empty_message }</p>
                </div>
            } else {
                <div class="meeting-list">
                    { for props.meetings.iter().map(|meeting| html! {
                        <MeetingCard key={meeting.id.clone()} meeting={meeting.clone()} />
                    })}
                </div>
            }
        </section>
    }
}

use yew::prelude::*;

use shared::models::{MeetingCollection, User};

use crate::components::header::Header;
use crate::components::meeting_list::MeetingList;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
    pub meetings: MeetingCollection,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    html! {
        <>
            <Header user={props.user.clone()} on_logout={props.on_logout.clone()} />
            <main class="container">
                <MeetingList
                    title="Upcoming"
                    meetings={props.meetings.upcoming.clone()}
                    empty_message="No upcoming meetings."
                />
                <MeetingList
                    title="Past"
                    meetings={props.meetings.past.clone()}
                    empty_message="No past meetings yet."
                />
            </main>
        </>
    }
}

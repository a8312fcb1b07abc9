use std::rc::Rc;

use yew::prelude::*;

use shared::api::LoginOutcome;
use shared::session::{Session, SessionEvent};

use crate::services::api::MeetingsApi;

/// Reducer wrapper so the pure session machine can back a `use_reducer`
/// hook. Only the controller dispatches events; views read the state.
#[derive(Debug, Default, PartialEq)]
pub struct SessionStore(pub Session);

impl Reducible for SessionStore {
    type Action = SessionEvent;

    fn reduce(self: Rc<Self>, action: SessionEvent) -> Rc<Self> {
        Rc::new(SessionStore(self.0.apply(action)))
    }
}

/// The whole login flow: authenticate, then load meetings. Meetings are
/// fetched exactly once, and only after the backend produced a concrete
/// user. A redirect outcome dispatches nothing further; the browsing
/// context navigates away while the session stays `Authenticating`.
pub async fn run_login_flow(
    api: Rc<dyn MeetingsApi>,
    dispatch: UseReducerDispatcher<SessionStore>,
) {
    dispatch.dispatch(SessionEvent::LoginRequested);

    match api.login().await {
        Ok(LoginOutcome::Redirect(url)) => navigate_to(&url),
        Ok(LoginOutcome::User(user)) => match api.fetch_meetings().await {
            Ok(meetings) => dispatch.dispatch(SessionEvent::MeetingsLoaded { user, meetings }),
            Err(err) => {
                tracing::error!("failed to fetch meetings: {err}");
                dispatch.dispatch(SessionEvent::Failed);
            }
        },
        Err(err) => {
            tracing::error!("login failed: {err}");
            dispatch.dispatch(SessionEvent::Failed);
        }
    }
}

fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        tracing::error!(?err, "failed to navigate to auth provider");
    }
}

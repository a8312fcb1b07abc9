use crate::models::{MeetingCollection, User};

/// The one message shown to the user for any login or fetch failure.
pub const GENERIC_ERROR: &str =
    "Couldn't reach the meeting service. Check your connection and try again.";

/// Session lifecycle as an explicit tagged variant. A user exists iff the
/// state is `LoggedIn`, so combinations like "loading with a user set" are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn {
        user: User,
        meetings: MeetingCollection,
    },
    Error {
        message: String,
    },
}

/// Events that drive the session machine. A redirect outcome produces no
/// event at all: the browsing context navigates away while the state stays
/// `Authenticating`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LoginRequested,
    MeetingsLoaded {
        user: User,
        meetings: MeetingCollection,
    },
    Failed,
    LogoutRequested,
}

impl Session {
    /// Pure transition function. Events that are invalid for the current
    /// state (e.g. a load result arriving after logout) leave it unchanged.
    pub fn apply(&self, event: SessionEvent) -> Session {
        match (self, event) {
            (Session::LoggedOut | Session::Error { .. }, SessionEvent::LoginRequested) => {
                Session::Authenticating
            }
            (Session::Authenticating, SessionEvent::MeetingsLoaded { user, meetings }) => {
                Session::LoggedIn { user, meetings }
            }
            (Session::Authenticating, SessionEvent::Failed) => Session::Error {
                message: GENERIC_ERROR.to_string(),
            },
            (_, SessionEvent::LogoutRequested) => Session::LoggedOut,
            (state, _) => state.clone(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoggedIn { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, Session::Authenticating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendee, Meeting};
    use chrono::{TimeZone, Utc};

    fn demo_user() -> User {
        User {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            avatar_url: String::new(),
        }
    }

    fn one_meeting() -> MeetingCollection {
        MeetingCollection {
            upcoming: vec![Meeting {
                id: "evt-1".to_string(),
                title: "Standup".to_string(),
                start_time: Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2026, 9, 1, 9, 15, 0).unwrap(),
                attendees: vec![Attendee {
                    email: "a@example.com".to_string(),
                }],
                description: None,
                link: None,
            }],
            past: vec![],
        }
    }

    #[test]
    fn login_moves_logged_out_to_authenticating() {
        let next = Session::LoggedOut.apply(SessionEvent::LoginRequested);
        assert_eq!(next, Session::Authenticating);
    }

    #[test]
    fn error_state_is_not_terminal() {
        let errored = Session::Authenticating.apply(SessionEvent::Failed);
        assert!(matches!(errored, Session::Error { .. }));

        let retried = errored.apply(SessionEvent::LoginRequested);
        assert_eq!(retried, Session::Authenticating);
    }

    #[test]
    fn successful_load_reaches_logged_in_with_meetings() {
        let next = Session::Authenticating.apply(SessionEvent::MeetingsLoaded {
            user: demo_user(),
            meetings: one_meeting(),
        });

        match next {
            Session::LoggedIn { user, meetings } => {
                assert_eq!(user.email, "demo@example.com");
                assert_eq!(meetings.upcoming.len(), 1);
                assert!(meetings.past.is_empty());
            }
            other => panic!("expected LoggedIn, got {:?}", other),
        }
    }

    #[test]
    fn failure_carries_the_generic_message_and_no_meetings() {
        let next = Session::Authenticating.apply(SessionEvent::Failed);
        assert_eq!(
            next,
            Session::Error {
                message: GENERIC_ERROR.to_string(),
            }
        );
        assert!(next.user().is_none());
    }

    #[test]
    fn logout_clears_user_and_meetings_from_any_state() {
        let logged_in = Session::LoggedIn {
            user: demo_user(),
            meetings: one_meeting(),
        };

        let next = logged_in.apply(SessionEvent::LogoutRequested);
        assert_eq!(next, Session::LoggedOut);
        assert!(next.user().is_none());

        assert_eq!(
            Session::Authenticating.apply(SessionEvent::LogoutRequested),
            Session::LoggedOut
        );
    }

    #[test]
    fn invalid_events_leave_the_state_unchanged() {
        // A load result that arrives after the user already logged out.
        let stale = Session::LoggedOut.apply(SessionEvent::MeetingsLoaded {
            user: demo_user(),
            meetings: one_meeting(),
        });
        assert_eq!(stale, Session::LoggedOut);

        // A second login click while already authenticating.
        assert_eq!(
            Session::Authenticating.apply(SessionEvent::LoginRequested),
            Session::Authenticating
        );

        // A failure report when nothing was in flight.
        assert_eq!(Session::LoggedOut.apply(SessionEvent::Failed), Session::LoggedOut);
    }
}

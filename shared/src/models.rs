use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in account, held in memory for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// A meeting participant as reported by the calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub email: String,
}

/// A calendar meeting. Immutable once fetched; `id` is the provider-issued
/// identifier, unique per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Meetings partitioned by the backend. The partition is never re-derived
/// locally from timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingCollection {
    #[serde(default)]
    pub upcoming: Vec<Meeting>,
    #[serde(default)]
    pub past: Vec<Meeting>,
}

/// Which data source the client talks to.
///
/// Defaults to `Real`: the OAuth redirect returns through a full page
/// reload, which cannot carry in-memory state, so the fresh page must come
/// up in the mode that can complete the continuation. Demo mode is an
/// explicit opt-in per page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendMode {
    #[default]
    Real,
    Stub,
}

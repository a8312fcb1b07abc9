use thiserror::Error;

/// Client-side failures from the backend adapter. All variants are collapsed
/// into a single user-visible message at the session boundary; the detail is
/// only for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("login response carried neither a user nor a redirect target")]
    AuthProtocol,

    #[error("meeting fetch failed: {0}")]
    Fetch(String),

    #[error("could not reach the server: {0}")]
    Connectivity(String),
}

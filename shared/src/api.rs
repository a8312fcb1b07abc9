use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::User;

/// Body of `POST /auth/login`. The backend answers with an existing user
/// session, a provider URL to redirect the browser to, or (out of contract)
/// neither.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub auth_url: Option<String>,
}

/// What a login call resolved to. A redirect is a signal, not a value: the
/// browsing context navigates away and no user is established locally.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    User(User),
    Redirect(String),
}

impl LoginResponse {
    /// Classify the response shape. An established user wins over a redirect
    /// target; an empty body is a protocol violation.
    pub fn into_outcome(self) -> Result<LoginOutcome, ApiError> {
        match (self.user, self.auth_url) {
            (Some(user), _) => Ok(LoginOutcome::User(user)),
            (None, Some(url)) => Ok(LoginOutcome::Redirect(url)),
            (None, None) => Err(ApiError::AuthProtocol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LoginResponse {
        serde_json::from_str(json).expect("should deserialize")
    }

    #[test]
    fn user_body_yields_user() {
        let response = parse(
            r#"{ "user": { "name": "Demo", "email": "demo@example.com", "avatarUrl": "" } }"#,
        );

        match response.into_outcome() {
            Ok(LoginOutcome::User(user)) => assert_eq!(user.email, "demo@example.com"),
            other => panic!("expected user outcome, got {:?}", other),
        }
    }

    #[test]
    fn auth_url_body_yields_redirect() {
        let response = parse(r#"{ "authUrl": "https://accounts.google.com/o/oauth2/v2/auth" }"#);

        assert_eq!(
            response.into_outcome(),
            Ok(LoginOutcome::Redirect(
                "https://accounts.google.com/o/oauth2/v2/auth".to_string()
            ))
        );
    }

    #[test]
    fn empty_body_is_a_protocol_error() {
        let response = parse("{}");
        assert_eq!(response.into_outcome(), Err(ApiError::AuthProtocol));
    }

    #[test]
    fn user_wins_when_both_fields_present() {
        let response = parse(
            r#"{
                "user": { "name": "Demo", "email": "demo@example.com", "avatarUrl": "" },
                "authUrl": "https://accounts.google.com/o/oauth2/v2/auth"
            }"#,
        );

        assert!(matches!(response.into_outcome(), Ok(LoginOutcome::User(_))));
    }
}

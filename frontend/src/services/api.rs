use std::rc::Rc;

use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use gloo_net::http::Request;

use shared::api::{LoginOutcome, LoginResponse};
use shared::error::ApiError;
use shared::models::{BackendMode, MeetingCollection, User};

const API_BASE_URL: &str = "http://localhost:8080";

/// How long the demo backend pretends to talk to a provider.
const STUB_LOGIN_DELAY_MS: u32 = 600;

/// Backend adapter behind the two calls the app makes. Stub and real mode
/// are separate implementations picked once per flow, not conditionals
/// inside each operation.
#[async_trait(?Send)]
pub trait MeetingsApi {
    async fn login(&self) -> Result<LoginOutcome, ApiError>;
    async fn fetch_meetings(&self) -> Result<MeetingCollection, ApiError>;
}

pub fn backend_for(mode: BackendMode) -> Rc<dyn MeetingsApi> {
    match mode {
        BackendMode::Real => Rc::new(HttpApi::new(API_BASE_URL)),
        BackendMode::Stub => Rc::new(StubApi),
    }
}

/// Talks to the remote meeting service.
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl MeetingsApi for HttpApi {
    async fn login(&self) -> Result<LoginOutcome, ApiError> {
        let url = format!("{}/auth/login", self.base_url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        // Any body that isn't the login contract counts as a protocol
        // violation, including error pages from intermediaries.
        let body: LoginResponse = response.json().await.map_err(|_| ApiError::AuthProtocol)?;
        body.into_outcome()
    }

    async fn fetch_meetings(&self) -> Result<MeetingCollection, ApiError> {
        let url = format!("{}/api/meetings", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Fetch(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))
    }
}

/// Fabricates a session locally for UI development. Never fails.
pub struct StubApi;

#[async_trait(?Send)]
impl MeetingsApi for StubApi {
    async fn login(&self) -> Result<LoginOutcome, ApiError> {
        TimeoutFuture::new(STUB_LOGIN_DELAY_MS).await;

        Ok(LoginOutcome::User(User {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            avatar_url: "https://www.gravatar.com/avatar?d=mp".to_string(),
        }))
    }

    async fn fetch_meetings(&self) -> Result<MeetingCollection, ApiError> {
        Ok(MeetingCollection::default())
    }
}

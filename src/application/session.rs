//! Session endpoints: identity check, login and logout.

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::application::admin::response::ensure_success;
use crate::application::error::AdminError;
use crate::infra::http::{ApiClient, RequestOptions};
use photowall_api_types::LoginRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    /// The backend rejected the session with this status.
    Anonymous(StatusCode),
}

impl AuthStatus {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

#[derive(Clone, Debug)]
pub struct SessionService {
    client: ApiClient,
}

impl SessionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /me`. Only transport failures are errors.
    pub async fn me(&self) -> Result<AuthStatus, AdminError> {
        let response = self.client.fetch("/me", RequestOptions::get()).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "identity check");
        if status.is_success() {
            Ok(AuthStatus::Authenticated)
        } else {
            Ok(AuthStatus::Anonymous(status))
        }
    }

    /// On success the backend's session cookie is kept in the client's jar.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AdminError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let options = RequestOptions::post().json(&request)?;
        let response = self.client.fetch("/login", options).await?;
        ensure_success(response, "log in").await?;
        info!(username, "logged in");
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), AdminError> {
        let response = self.client.fetch("/logout", RequestOptions::post()).await?;
        ensure_success(response, "log out").await?;
        info!("logged out");
        Ok(())
    }

    pub fn session_cookie(&self) -> Option<String> {
        self.client.session_cookie()
    }
}

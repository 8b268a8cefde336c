//! Authentication endpoints.

use log::info;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{AuthResponse, LoginRequest, User};
use crate::utils::logging;

impl ApiClient {
    /// `POST /auth/login`. On success the session token is installed on the
    /// client so every later request carries it.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;
        logging::log_auth_event("login attempt", &request.email);

        let response: AuthResponse = self
            .send(self.post("auth/login")?.json(&request))
            .await?;

        self.set_token(Some(response.token.clone()));
        info!(
            "Signed in as {} ({})",
            response.user.name,
            response.user.role.as_str()
        );
        Ok(response)
    }

    /// `GET /auth/me` - the signed-in user, per the current token.
    pub async fn current_user(&self) -> AppResult<User> {
        self.send(self.get("auth/me")?).await
    }

    /// Drop the session token. Purely client-side; the backend token is
    /// short-lived and expires on its own.
    pub fn logout(&self) {
        self.set_token(None);
        info!("Signed out");
    }
}

//! Identity-service operations: verify, sign-up, sign-in, sign-out.
//!
//! The verify operation takes no caller-supplied arguments; the session
//! cookie carried by [`ApiClient`] is the whole request context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use async_trait::async_trait;
use gate::User;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

/// Credentials for creating an account.
#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Credentials for signing in to an existing account.
#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in/sign-up response: the user plus a fresh session token.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Identity-service operations, behind a trait so the probe and the
/// shell can be exercised without a live service.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// "Who, if anyone, is currently authenticated?"
    ///
    /// `Ok(None)` means the service confirmed there is no session;
    /// `Err` means it could not be asked.
    async fn verify(&self) -> Result<Option<User>, ApiError>;

    async fn sign_up(&self, req: &SignUpRequest) -> Result<Session, ApiError>;

    async fn sign_in(&self, req: &SignInRequest) -> Result<Session, ApiError>;

    /// Invalidate the current session server-side.
    async fn sign_out(&self) -> Result<(), ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn verify(&self) -> Result<Option<User>, ApiError> {
        let resp = self.request(Method::GET, "/api/auth/me").send().await?;
        let status = resp.status();
        // An expired or absent session is a confirmed answer, not an error.
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::error_for_status("verify", resp).await);
        }
        Ok(Some(Self::decode("verify", resp).await?))
    }

    async fn sign_up(&self, req: &SignUpRequest) -> Result<Session, ApiError> {
        let resp = self
            .request(Method::POST, "/api/auth/sign-up")
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("sign-up", resp).await);
        }
        Self::decode("sign-up", resp).await
    }

    async fn sign_in(&self, req: &SignInRequest) -> Result<Session, ApiError> {
        let resp = self
            .request(Method::POST, "/api/auth/sign-in")
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("sign-in", resp).await);
        }
        Self::decode("sign-in", resp).await
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        let resp = self.request(Method::POST, "/api/auth/sign-out").send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for_status("sign-out", resp).await);
        }
        Ok(())
    }
}

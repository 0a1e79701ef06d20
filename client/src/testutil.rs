//! Shared test doubles for the SDK.
//!
//! The identity service is scripted per test: no network, observable
//! call counts, optional artificial latency for cancellation tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use gate::User;
use reqwest::StatusCode;

use crate::api::ApiError;
use crate::api::auth::{AuthApi, Session, SignInRequest, SignUpRequest};

pub(crate) fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

/// What the scripted verify call should answer.
pub(crate) enum VerifyScript {
    User(User),
    NoSession,
    Fail,
}

/// Scripted identity service.
pub(crate) struct StubAuth {
    verify: VerifyScript,
    delay: Option<Duration>,
    /// Verify calls started.
    pub verify_calls: AtomicUsize,
    /// Verify calls that ran to completion (not aborted mid-delay).
    pub verify_completions: AtomicUsize,
}

impl StubAuth {
    pub fn new(verify: VerifyScript) -> Arc<Self> {
        Arc::new(Self {
            verify,
            delay: None,
            verify_calls: AtomicUsize::new(0),
            verify_completions: AtomicUsize::new(0),
        })
    }

    /// An identity service that answers only after `delay`.
    pub fn slow(verify: VerifyScript, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            verify,
            delay: Some(delay),
            verify_calls: AtomicUsize::new(0),
            verify_completions: AtomicUsize::new(0),
        })
    }

    fn unreachable_error() -> ApiError {
        ApiError::Status {
            operation: "verify",
            status: StatusCode::BAD_GATEWAY,
            body: "upstream identity service down".to_owned(),
        }
    }
}

#[async_trait]
impl AuthApi for StubAuth {
    async fn verify(&self) -> Result<Option<User>, ApiError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let result = match &self.verify {
            VerifyScript::User(user) => Ok(Some(user.clone())),
            VerifyScript::NoSession => Ok(None),
            VerifyScript::Fail => Err(Self::unreachable_error()),
        };
        self.verify_completions.fetch_add(1, Ordering::SeqCst);
        result
    }

    async fn sign_up(&self, req: &SignUpRequest) -> Result<Session, ApiError> {
        Ok(Session {
            user: User {
                id: "u-new".to_owned(),
                username: req.username.clone(),
                email: req.email.clone(),
            },
            token: "token-sign-up".to_owned(),
        })
    }

    async fn sign_in(&self, req: &SignInRequest) -> Result<Session, ApiError> {
        Ok(Session {
            user: User {
                id: "u1".to_owned(),
                username: "ada".to_owned(),
                email: req.email.clone(),
            },
            token: "token-sign-in".to_owned(),
        })
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

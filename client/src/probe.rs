//! Session probe: resolve the current identity once per application mount.
//!
//! ERROR HANDLING
//! ==============
//! The verify call can fail outright (identity service unreachable). Per the
//! application's behavior that collapses to `Anonymous`, but the failure is
//! logged rather than silently swallowed, and [`AuthApi::verify`] keeps the
//! raw result available to callers that need the distinction.

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;

use std::sync::Arc;

use gate::Identity;
use tracing::warn;

use crate::api::auth::AuthApi;

/// One-shot identity resolution against the identity service.
#[derive(Clone)]
pub struct SessionProbe {
    auth: Arc<dyn AuthApi>,
}

impl SessionProbe {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    /// Resolve the current identity.
    ///
    /// An empty or unauthorized response is `Anonymous`; a transport failure
    /// is logged and also resolves `Anonymous`.
    pub async fn resolve(&self) -> Identity {
        match self.auth.verify().await {
            Ok(Some(user)) => Identity::Authenticated(user),
            Ok(None) => Identity::Anonymous,
            Err(error) => {
                warn!(%error, "session verify failed; treating as anonymous");
                Identity::Anonymous
            }
        }
    }
}

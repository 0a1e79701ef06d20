//! Session-token carriage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser carries the session implicitly in a cookie jar. Here the
//! carrier is an explicit value injected into the API client and the shell,
//! which keeps the gating flow testable without a network or a real
//! credential layer.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::RwLock;

/// Cookie name the identity service reads the session token from.
pub const SESSION_COOKIE: &str = "session_token";

/// Holds the session token for the lifetime of the application.
///
/// The lock is only held for reads and swaps, never across an await.
#[derive(Debug, Default)]
pub struct SessionContext {
    token: RwLock<Option<String>>,
}

impl SessionContext {
    /// Empty context: no session cookie is sent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with an existing token (e.g. from the environment).
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RwLock::new(Some(token.to_owned())) }
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Replace the token wholesale (sign-in / sign-up).
    pub fn replace(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_owned());
        }
    }

    /// Drop the token (sign-out).
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    /// `Cookie` header value for the current token, if any.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        self.token().map(|token| format!("{SESSION_COOKIE}={token}"))
    }
}

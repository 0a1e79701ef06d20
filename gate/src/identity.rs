//! Identity of the current user, or its explicit absence.
//!
//! DESIGN
//! ======
//! One tagged value replaces the nullable-user-plus-loading-flag pair:
//! `Pending` is distinct from `Anonymous`, so decisions made before the
//! session probe settles can hold instead of redirecting on a value that
//! is about to be replaced.

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Authenticated-user payload returned by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier minted by the identity service.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Contact email used for sign-in.
    pub email: String,
}

/// The current identity value.
///
/// Exactly one of these exists per application instance. It is replaced
/// wholesale on probe completion and on sign-in/sign-out; it is never
/// mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Identity {
    /// The session probe has not completed yet.
    #[default]
    Pending,
    /// A session exists and resolved to this user.
    Authenticated(User),
    /// The identity service confirmed there is no session, or resolution
    /// failed and was collapsed to absence after logging.
    Anonymous,
}

impl Identity {
    /// The user payload, if authenticated.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Pending | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether resolution is still in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

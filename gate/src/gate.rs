//! Render-vs-redirect decisions.
//!
//! The gate holds no state of its own: transitions are driven externally by
//! identity replacement, and every navigation is evaluated independently
//! against whatever value is current at that instant.

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;

use crate::identity::Identity;
use crate::route::{Access, Route, match_path};

/// Decision for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Render the view with the identity attached (possibly absent) so the
    /// view can adapt its own display.
    Render { route: Route, identity: Identity },
    /// The path requires an identity and none is present; go to the path's
    /// own fallback.
    Redirect { to: &'static str },
    /// Identity resolution is still in flight on a protected path; hold
    /// (show a loader) instead of redirecting on a value about to flip.
    Pending,
    /// No table entry for this path; rendering a 404 is the caller's
    /// concern.
    NotFound,
}

/// Evaluate one navigation against the latest identity value.
#[must_use]
pub fn evaluate(identity: &Identity, path: &str) -> Outcome {
    let Some((route, access)) = match_path(path) else {
        return Outcome::NotFound;
    };

    match access {
        Access::Public => Outcome::Render { route, identity: identity.clone() },
        Access::Protected { fallback } => match identity {
            Identity::Authenticated(_) => Outcome::Render { route, identity: identity.clone() },
            Identity::Pending => Outcome::Pending,
            Identity::Anonymous => Outcome::Redirect { to: fallback },
        },
    }
}

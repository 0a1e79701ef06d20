//! Native SDK for the storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted application is a single-page storefront whose create/edit
//! screens are reserved for signed-in users. This crate is the headless
//! counterpart. The HTTP client talks to the identity and catalog
//! services; the shell owns the identity value, runs the session probe
//! once per mount, and gates every navigation on whatever identity is
//! current.

pub mod api;
pub mod config;
pub mod probe;
pub mod session;
pub mod shell;

#[cfg(test)]
pub(crate) mod testutil;

pub use gate::{Identity, Outcome, Route, User};

//! Session-gated routing core: identity model, route table, gate decisions.
//!
//! This crate owns the pure decision logic shared by the SDK and the CLI.
//! It performs no I/O: identity values are produced elsewhere (the session
//! probe, the sign-in/sign-out actions) and handed in read-only for every
//! evaluation.

pub mod gate;
pub mod identity;
pub mod route;

pub use gate::{Outcome, evaluate};
pub use identity::{Identity, User};
pub use route::{Access, Route, match_path};

//! Application shell: owns the identity value, mounts the probe, and gates
//! navigation.
//!
//! DESIGN
//! ======
//! The identity lives in a watch channel: exactly one value at any instant,
//! replaced wholesale, observed read-only by views and the gate. The probe
//! task is scoped to the shell's lifetime; dropping the shell aborts an
//! in-flight resolution so a late completion cannot publish into a dead
//! application.

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;

use std::sync::Arc;

use gate::{Identity, Outcome, User};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::ApiError;
use crate::api::auth::{AuthApi, Session, SignInRequest, SignUpRequest};
use crate::probe::SessionProbe;
use crate::session::SessionContext;

/// Top-level application state holder and action surface.
pub struct AppShell {
    auth: Arc<dyn AuthApi>,
    session: Arc<SessionContext>,
    identity_tx: watch::Sender<Identity>,
    identity_rx: watch::Receiver<Identity>,
    probe_task: Option<JoinHandle<()>>,
}

impl AppShell {
    /// New shell with a `Pending` identity. Call [`mount`](Self::mount) to
    /// start resolution.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, session: Arc<SessionContext>) -> Self {
        let (identity_tx, identity_rx) = watch::channel(Identity::Pending);
        Self { auth, session, identity_tx, identity_rx, probe_task: None }
    }

    /// Start the session probe.
    ///
    /// Runs at most once per shell; further calls are no-ops, so re-renders
    /// and repeated navigations never trigger another verify call.
    pub fn mount(&mut self) {
        if self.probe_task.is_some() {
            return;
        }
        let probe = SessionProbe::new(Arc::clone(&self.auth));
        let tx = self.identity_tx.clone();
        self.probe_task = Some(tokio::spawn(async move {
            let resolved = probe.resolve().await;
            let _ = tx.send(resolved);
        }));
    }

    /// Latest identity value.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity_rx.borrow().clone()
    }

    /// Receiver for identity replacement notifications.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Identity> {
        self.identity_rx.clone()
    }

    /// Wait until the identity has left `Pending`.
    ///
    /// Returns immediately when resolution already happened. Calling this on
    /// a shell that was never mounted waits forever; mount first.
    pub async fn wait_ready(&self) {
        let mut rx = self.identity_rx.clone();
        let _ = rx.wait_for(|identity| !identity.is_pending()).await;
    }

    /// Evaluate one navigation against the latest identity.
    #[must_use]
    pub fn navigate(&self, path: &str) -> Outcome {
        gate::evaluate(&self.identity(), path)
    }

    /// Create an account and start its session: store the token, publish
    /// the authenticated identity.
    pub async fn sign_up(&self, req: &SignUpRequest) -> Result<User, ApiError> {
        let session = self.auth.sign_up(req).await?;
        Ok(self.install_session(session))
    }

    /// Sign in: store the token, publish the authenticated identity.
    pub async fn sign_in(&self, req: &SignInRequest) -> Result<User, ApiError> {
        let session = self.auth.sign_in(req).await?;
        Ok(self.install_session(session))
    }

    /// Sign out: invalidate the session server-side, then clear the token
    /// and publish `Anonymous`.
    ///
    /// Local state is cleared even when the sign-out request fails, so the
    /// application never keeps rendering as a user it can no longer act as.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let result = self.auth.sign_out().await;
        self.session.clear();
        let _ = self.identity_tx.send(Identity::Anonymous);
        result
    }

    fn install_session(&self, session: Session) -> User {
        self.session.replace(&session.token);
        info!(user = %session.user.username, "session established");
        let _ = self.identity_tx.send(Identity::Authenticated(session.user.clone()));
        session.user
    }
}

impl Drop for AppShell {
    fn drop(&mut self) {
        if let Some(task) = self.probe_task.take() {
            task.abort();
        }
    }
}

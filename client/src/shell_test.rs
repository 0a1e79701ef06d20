use std::sync::atomic::Ordering;
use std::time::Duration;

use super::*;
use crate::testutil::{StubAuth, VerifyScript, sample_user};
use gate::Route;

fn shell_with(auth: Arc<StubAuth>) -> AppShell {
    AppShell::new(auth, Arc::new(SessionContext::new()))
}

// =============================================================================
// Mount and probe-once semantics
// =============================================================================

#[tokio::test]
async fn mount_publishes_the_probed_identity() {
    let mut shell = shell_with(StubAuth::new(VerifyScript::User(sample_user())));
    shell.mount();
    shell.wait_ready().await;
    assert_eq!(shell.identity(), Identity::Authenticated(sample_user()));
}

#[tokio::test]
async fn identity_starts_pending_before_resolution() {
    let shell = shell_with(StubAuth::slow(
        VerifyScript::NoSession,
        Duration::from_secs(5),
    ));
    assert!(shell.identity().is_pending());
}

#[tokio::test]
async fn mount_probes_exactly_once() {
    let auth = StubAuth::new(VerifyScript::NoSession);
    let mut shell = shell_with(Arc::clone(&auth));
    shell.mount();
    shell.wait_ready().await;

    // Re-renders: repeated mounts and navigations must not re-probe.
    shell.mount();
    shell.mount();
    let _ = shell.navigate("/");
    let _ = shell.navigate("/add-product");
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(auth.verify_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn verify_failure_settles_anonymous() {
    let mut shell = shell_with(StubAuth::new(VerifyScript::Fail));
    shell.mount();
    shell.wait_ready().await;
    assert_eq!(shell.identity(), Identity::Anonymous);
}

// =============================================================================
// Gated navigation
// =============================================================================

#[tokio::test]
async fn protected_path_holds_while_pending() {
    let mut shell = shell_with(StubAuth::slow(
        VerifyScript::NoSession,
        Duration::from_secs(5),
    ));
    shell.mount();
    assert_eq!(shell.navigate("/add-product"), Outcome::Pending);
    // Public paths render even while the probe is in flight.
    assert!(matches!(shell.navigate("/products"), Outcome::Render { .. }));
}

#[tokio::test]
async fn sign_in_flips_a_redirecting_path_without_remount() {
    let auth = StubAuth::new(VerifyScript::NoSession);
    let mut shell = shell_with(Arc::clone(&auth));
    shell.mount();
    shell.wait_ready().await;

    assert_eq!(shell.navigate("/add-product"), Outcome::Redirect { to: "/sign-up" });

    let req = SignInRequest {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let user = shell.sign_in(&req).await.expect("sign in");
    assert_eq!(user.id, "u1");

    let outcome = shell.navigate("/add-product");
    assert!(matches!(outcome, Outcome::Render { route: Route::ProductCreate, .. }));
    // The identity was replaced; no second probe happened.
    assert_eq!(auth.verify_calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Session actions
// =============================================================================

#[tokio::test]
async fn sign_in_stores_the_returned_token() {
    let session = Arc::new(SessionContext::new());
    let mut shell = AppShell::new(StubAuth::new(VerifyScript::NoSession), Arc::clone(&session));
    shell.mount();
    shell.wait_ready().await;

    let req = SignInRequest {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    shell.sign_in(&req).await.expect("sign in");
    assert_eq!(session.token().as_deref(), Some("token-sign-in"));
}

#[tokio::test]
async fn sign_up_authenticates_as_the_new_user() {
    let mut shell = shell_with(StubAuth::new(VerifyScript::NoSession));
    shell.mount();
    shell.wait_ready().await;

    let req = SignUpRequest {
        username: "grace".to_owned(),
        email: "grace@example.com".to_owned(),
        password: "hopper".to_owned(),
    };
    let user = shell.sign_up(&req).await.expect("sign up");
    assert_eq!(user.username, "grace");
    assert_eq!(
        shell.identity().user().map(|u| u.username.as_str()),
        Some("grace")
    );
}

#[tokio::test]
async fn sign_out_clears_token_and_publishes_anonymous() {
    let session = Arc::new(SessionContext::with_token("stale-token"));
    let mut shell = AppShell::new(
        StubAuth::new(VerifyScript::User(sample_user())),
        Arc::clone(&session),
    );
    shell.mount();
    shell.wait_ready().await;
    assert!(shell.identity().is_authenticated());

    shell.sign_out().await.expect("sign out");
    assert_eq!(shell.identity(), Identity::Anonymous);
    assert_eq!(session.token(), None);
}

// =============================================================================
// Lifecycle-scoped cancellation
// =============================================================================

#[tokio::test]
async fn dropping_the_shell_aborts_an_in_flight_probe() {
    let auth = StubAuth::slow(VerifyScript::User(sample_user()), Duration::from_millis(100));
    let mut shell = shell_with(Arc::clone(&auth));
    shell.mount();
    tokio::time::sleep(Duration::from_millis(10)).await;
    drop(shell);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(auth.verify_calls.load(Ordering::SeqCst), 1);
    assert_eq!(auth.verify_completions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn watchers_observe_identity_replacement() {
    let mut shell = shell_with(StubAuth::new(VerifyScript::User(sample_user())));
    let mut rx = shell.watch();
    assert!(rx.borrow().is_pending());

    shell.mount();
    rx.changed().await.expect("identity replaced");
    assert!(rx.borrow().is_authenticated());
}

use std::sync::Arc;

use api::{InMemoryApi, VitaApi};
use services::{AuthError, AuthService, InMemorySessionStore, UserService};
use vita_core::time::fixed_clock;

fn setup() -> (Arc<InMemoryApi>, AuthService) {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let store = Arc::new(InMemorySessionStore::new());
    let auth = AuthService::new(Arc::clone(&api) as Arc<dyn VitaApi>, store);
    (api, auth)
}

#[tokio::test]
async fn mismatched_passwords_fail_without_any_request() {
    let (api, auth) = setup();

    let err = auth
        .register("Jane", "jane@example.com", "abc123", "abc124")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::PasswordMismatch));
    assert_eq!(err.to_string(), "Passwords do not match");
    assert_eq!(api.register_calls(), 0);
}

#[tokio::test]
async fn register_login_logout_session_lifecycle() {
    let (_api, auth) = setup();

    auth.register("Jane", "jane@example.com", "abc123", "abc123")
        .await
        .unwrap();
    assert_eq!(auth.restore_session(), None);

    let outcome = auth.login("jane@example.com", "abc123").await.unwrap();
    assert_eq!(outcome.user.name, "Jane");
    assert_eq!(auth.restore_session(), Some(outcome.session));

    auth.logout().unwrap();
    assert_eq!(auth.restore_session(), None);
}

#[tokio::test]
async fn snapshot_carries_registration_bonus_and_leaderboard() {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let session = api.seed_account("Jane", "jane@example.com", "secret").await;

    let users = UserService::new(Arc::clone(&api) as Arc<dyn VitaApi>);
    let snapshot = users.snapshot(&session).await.unwrap();

    assert_eq!(snapshot.user.coins, 100);
    assert!(snapshot
        .transactions
        .iter()
        .any(|tx| tx.reason == "Registration Bonus"));
    assert_eq!(snapshot.leaderboard.len(), 1);
    assert_eq!(snapshot.leaderboard[0].name, "Jane");
}

use std::sync::Arc;

use api::{InMemoryApi, VitaApi};
use services::{CoinError, CoinService, UserService};
use vita_core::time::fixed_clock;

#[tokio::test]
async fn second_daily_claim_surfaces_already_claimed_and_leaves_balance_alone() {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let session = api.seed_account("Jane", "jane@example.com", "secret").await;

    let coins = CoinService::new(Arc::clone(&api) as Arc<dyn VitaApi>);
    let users = UserService::new(Arc::clone(&api) as Arc<dyn VitaApi>);

    let claim = coins.claim_daily(&session).await.unwrap();
    assert_eq!(claim.coins, 150);
    assert_eq!(claim.message.as_deref(), Some("Daily coins claimed!"));

    let err = coins.claim_daily(&session).await.unwrap_err();
    match err {
        CoinError::AlreadyClaimed(message) => {
            assert_eq!(message, "Already claimed today");
        }
        other => panic!("expected AlreadyClaimed, got {other:?}"),
    }

    let profile = users.profile(&session).await.unwrap();
    assert_eq!(profile.coins, 150);
}

use std::sync::Arc;

use api::{ApiError, DailyClaim, VitaApi};
use vita_core::model::AuthSession;

use crate::error::CoinError;

/// Daily Vitacoin bonus claims.
#[derive(Clone)]
pub struct CoinService {
    api: Arc<dyn VitaApi>,
}

impl CoinService {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>) -> Self {
        Self { api }
    }

    /// Claim today's bonus. There is exactly one request and no retry.
    ///
    /// # Errors
    ///
    /// Returns `CoinError::AlreadyClaimed` when the server reports the bonus
    /// was already taken today (the balance is unchanged), `CoinError::Api`
    /// for anything else.
    pub async fn claim_daily(&self, session: &AuthSession) -> Result<DailyClaim, CoinError> {
        match self.api.claim_daily(session).await {
            Ok(claim) => Ok(claim),
            Err(err) if is_already_claimed(&err) => {
                let message = err
                    .server_message()
                    .unwrap_or("Already claimed today")
                    .to_owned();
                Err(CoinError::AlreadyClaimed(message))
            }
            Err(err) => Err(CoinError::Api(err)),
        }
    }
}

fn is_already_claimed(err: &ApiError) -> bool {
    err.server_message()
        .is_some_and(|message| message.to_lowercase().contains("already claimed"))
}

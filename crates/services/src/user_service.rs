use std::sync::Arc;

use api::VitaApi;
use vita_core::model::{
    AuthSession, LeaderboardEntry, Transaction, User, with_registration_bonus,
};

use crate::error::UserServiceError;

/// Everything the dashboard and header need in one bundle.
#[derive(Debug, Clone)]
pub struct UserSnapshot {
    pub user: User,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub transactions: Vec<Transaction>,
}

/// Profile, leaderboard, and coin-ledger reads.
#[derive(Clone)]
pub struct UserService {
    api: Arc<dyn VitaApi>,
}

impl UserService {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `UserServiceError::Api` when the request fails.
    pub async fn profile(&self, session: &AuthSession) -> Result<User, UserServiceError> {
        let user = self.api.user_profile(session).await?;
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `UserServiceError::Api` when the request fails.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, UserServiceError> {
        let entries = self.api.leaderboard().await?;
        Ok(entries)
    }

    /// Fetch profile, leaderboard, and transaction history together.
    ///
    /// The transaction list gets a synthetic registration-bonus entry
    /// prepended when the server history lacks one.
    ///
    /// # Errors
    ///
    /// Returns `UserServiceError::Api` when any of the reads fail.
    pub async fn snapshot(&self, session: &AuthSession) -> Result<UserSnapshot, UserServiceError> {
        let user = self.api.user_profile(session).await?;
        let leaderboard = self.api.leaderboard().await?;
        let transactions = self.api.transactions(session).await?;
        let transactions = with_registration_bonus(transactions, user.created_at);
        Ok(UserSnapshot {
            user,
            leaderboard,
            transactions,
        })
    }
}

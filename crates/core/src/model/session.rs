use serde::{Deserialize, Serialize};

use crate::model::UserId;

/// An authenticated session: created at login, persisted across restarts,
/// destroyed at logout. The token rides as a bearer header on every
/// authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user_id: UserId,
}

impl AuthSession {
    #[must_use]
    pub fn new(token: impl Into<String>, user_id: UserId) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }
}

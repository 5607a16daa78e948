use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::TransactionId;

/// Coins credited on registration; used only to synthesize a missing ledger
/// entry, the balance itself always comes from the server.
pub const REGISTRATION_BONUS_COINS: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// One entry of the append-only coin ledger, mirrored from the server and
/// ordered by recency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    /// Debits whose reason mentions a penalty get a dedicated callout on the
    /// dashboard.
    #[must_use]
    pub fn is_penalty(&self) -> bool {
        self.kind == TransactionKind::Debit && self.reason.to_lowercase().contains("penalty")
    }

    fn mentions_registration(&self) -> bool {
        self.reason.to_lowercase().contains("registration")
    }
}

/// Prepend a synthetic registration-bonus credit when the server history
/// lacks one, dated at account creation.
#[must_use]
pub fn with_registration_bonus(
    mut transactions: Vec<Transaction>,
    account_created_at: DateTime<Utc>,
) -> Vec<Transaction> {
    if transactions.iter().any(Transaction::mentions_registration) {
        return transactions;
    }
    transactions.insert(
        0,
        Transaction {
            id: TransactionId::from("registration-bonus"),
            kind: TransactionKind::Credit,
            amount: REGISTRATION_BONUS_COINS,
            reason: "Registration Bonus".into(),
            created_at: account_created_at,
        },
    );
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn tx(kind: TransactionKind, reason: &str) -> Transaction {
        Transaction {
            id: TransactionId::from("t1"),
            kind,
            amount: 10,
            reason: reason.into(),
            created_at: fixed_now(),
        }
    }

    #[test]
    fn bonus_is_prepended_when_missing() {
        let txs = with_registration_bonus(vec![tx(TransactionKind::Credit, "Daily Login")], fixed_now());
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].reason, "Registration Bonus");
        assert_eq!(txs[0].amount, REGISTRATION_BONUS_COINS);
    }

    #[test]
    fn bonus_is_not_duplicated() {
        let existing = vec![tx(TransactionKind::Credit, "Registration Bonus")];
        let txs = with_registration_bonus(existing.clone(), fixed_now());
        assert_eq!(txs, existing);
    }

    #[test]
    fn penalty_detection_is_case_insensitive_debit_only() {
        assert!(tx(TransactionKind::Debit, "Late Assignment Penalty").is_penalty());
        assert!(!tx(TransactionKind::Credit, "Penalty refund").is_penalty());
        assert!(!tx(TransactionKind::Debit, "Shop purchase").is_penalty());
    }
}

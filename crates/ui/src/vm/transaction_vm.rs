use vita_core::model::Transaction;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRowVm {
    pub id: String,
    pub text: String,
    pub date: String,
    pub is_credit: bool,
}

#[must_use]
pub fn map_transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRowVm> {
    transactions
        .iter()
        .map(|tx| {
            let sign = if tx.is_credit() { "+" } else { "-" };
            TransactionRowVm {
                id: tx.id.as_str().to_owned(),
                text: format!("{}: {sign}{}", tx.reason, tx.amount),
                date: format_date(tx.created_at),
                is_credit: tx.is_credit(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use vita_core::model::{TransactionId, TransactionKind};

    use super::*;

    #[test]
    fn rows_carry_sign_and_date() {
        let rows = map_transaction_rows(&[
            Transaction {
                id: TransactionId::from("t1"),
                kind: TransactionKind::Credit,
                amount: 50,
                reason: "Daily bonus".into(),
                created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            },
            Transaction {
                id: TransactionId::from("t2"),
                kind: TransactionKind::Debit,
                amount: 10,
                reason: "Late submission penalty".into(),
                created_at: Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap(),
            },
        ]);

        assert_eq!(rows[0].text, "Daily bonus: +50");
        assert_eq!(rows[0].date, "2025-03-01");
        assert!(rows[0].is_credit);
        assert_eq!(rows[1].text, "Late submission penalty: -10");
        assert!(!rows[1].is_credit);
    }
}

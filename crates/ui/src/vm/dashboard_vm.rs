use services::UserSnapshot;
use vita_core::progress::leaderboard_rank;

use crate::vm::badge_vm::{BadgeVm, map_badges};
use crate::vm::transaction_vm::{TransactionRowVm, map_transaction_rows};

/// Balance at which the one-off celebration overlay fires.
pub const CELEBRATION_COIN_THRESHOLD: i64 = 1_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub place: usize,
    pub name: String,
    pub coins: i64,
    pub is_me: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub name: String,
    pub coins: i64,
    pub badge_count: usize,
    /// 1-based leaderboard position, or `-` when the user is not listed.
    pub rank_label: String,
    pub completed_courses: u32,
    pub celebrate: bool,
    pub penalty_note: Option<String>,
    pub badges: Vec<BadgeVm>,
    pub leaderboard: Vec<LeaderboardRowVm>,
    pub transactions: Vec<TransactionRowVm>,
}

#[must_use]
pub fn map_dashboard(snapshot: &UserSnapshot) -> DashboardVm {
    let user = &snapshot.user;
    let rank_label = leaderboard_rank(&snapshot.leaderboard, &user.name)
        .map_or_else(|| "-".to_owned(), |place| place.to_string());
    let penalty_note = snapshot
        .transactions
        .iter()
        .find(|tx| tx.is_penalty())
        .map(|tx| format!("{} coins deducted for {}. Stay on track!", tx.amount, tx.reason));

    DashboardVm {
        name: user.name.clone(),
        coins: user.coins,
        badge_count: user.badges.len(),
        rank_label,
        completed_courses: user.completed_courses,
        celebrate: user.coins >= CELEBRATION_COIN_THRESHOLD,
        penalty_note,
        badges: map_badges(&user.badges, user.coins),
        leaderboard: snapshot
            .leaderboard
            .iter()
            .enumerate()
            .map(|(idx, entry)| LeaderboardRowVm {
                place: idx + 1,
                name: entry.name.clone(),
                coins: entry.coins,
                is_me: entry.name == user.name,
            })
            .collect(),
        transactions: map_transaction_rows(&snapshot.transactions),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use vita_core::model::{
        LeaderboardEntry, Transaction, TransactionId, TransactionKind, User, UserId,
    };

    use super::*;

    fn user(name: &str, coins: i64) -> User {
        User {
            id: UserId::from("u1"),
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            coins,
            badges: Vec::new(),
            quiz_progress: 0,
            completed_courses: 0,
            course_progress: Default::default(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn snapshot(name: &str, coins: i64, leaderboard: Vec<LeaderboardEntry>) -> UserSnapshot {
        UserSnapshot {
            user: user(name, coins),
            leaderboard,
            transactions: Vec::new(),
        }
    }

    #[test]
    fn rank_is_one_based_and_marks_the_signed_in_row() {
        let vm = map_dashboard(&snapshot(
            "Jane",
            200,
            vec![
                LeaderboardEntry {
                    name: "Amir".into(),
                    coins: 900,
                },
                LeaderboardEntry {
                    name: "Jane".into(),
                    coins: 200,
                },
            ],
        ));
        assert_eq!(vm.rank_label, "2");
        assert!(!vm.leaderboard[0].is_me);
        assert!(vm.leaderboard[1].is_me);
        assert_eq!(vm.leaderboard[1].place, 2);
    }

    #[test]
    fn missing_from_the_leaderboard_shows_a_dash() {
        let vm = map_dashboard(&snapshot("Jane", 200, Vec::new()));
        assert_eq!(vm.rank_label, "-");
    }

    #[test]
    fn celebration_fires_at_the_threshold() {
        assert!(!map_dashboard(&snapshot("Jane", 999, Vec::new())).celebrate);
        assert!(map_dashboard(&snapshot("Jane", 1_000, Vec::new())).celebrate);
    }

    #[test]
    fn penalty_debit_surfaces_a_callout() {
        let mut snap = snapshot("Jane", 90, Vec::new());
        snap.transactions = vec![Transaction {
            id: TransactionId::from("t1"),
            kind: TransactionKind::Debit,
            amount: 10,
            reason: "Late submission penalty".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }];
        let vm = map_dashboard(&snap);
        assert_eq!(
            vm.penalty_note.as_deref(),
            Some("10 coins deducted for Late submission penalty. Stay on track!")
        );
    }

    #[test]
    fn ordinary_debits_do_not_trigger_the_callout() {
        let mut snap = snapshot("Jane", 90, Vec::new());
        snap.transactions = vec![Transaction {
            id: TransactionId::from("t1"),
            kind: TransactionKind::Debit,
            amount: 10,
            reason: "Shop purchase".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }];
        assert!(map_dashboard(&snap).penalty_note.is_none());
    }
}

//! Derived-progress math shared by the views.
//!
//! All of this is display-only: the server remains the source of truth for
//! completion state and reward issuance.

use crate::model::LeaderboardEntry;

/// Topic-completion progress for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicProgress {
    pub completed: usize,
    pub total: usize,
}

impl TopicProgress {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// round(100 * completed / total); 0 when the course has no topics.
    #[must_use]
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        {
            ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.total > 0 && self.completed >= self.total
    }

    /// Human label, e.g. `3/4 (75%)`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}/{} ({}%)", self.completed, self.total, self.percent())
    }
}

/// 1-based leaderboard rank of the named user, `None` when absent.
#[must_use]
pub fn leaderboard_rank(entries: &[LeaderboardEntry], name: &str) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.name == name)
        .map(|idx| idx + 1)
}

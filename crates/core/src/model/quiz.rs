use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::QuizId;

/// Server-owned pass threshold, reproduced only for result display.
pub const PASS_PERCENT: u32 = 80;

/// Sentinel submitted for a question the user left unanswered.
pub const UNANSWERED: i64 = -1;

/// Quiz difficulty, used as the `?level=` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizLevel {
    Easy,
    Medium,
    Hard,
}

impl QuizLevel {
    pub const ALL: [QuizLevel; 3] = [QuizLevel::Easy, QuizLevel::Medium, QuizLevel::Hard];

    /// Wire/query-string form of the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizLevel::Easy => "easy",
            QuizLevel::Medium => "medium",
            QuizLevel::Hard => "hard",
        }
    }
}

impl fmt::Display for QuizLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(QuizLevel::Easy),
            "medium" => Ok(QuizLevel::Medium),
            "hard" => Ok(QuizLevel::Hard),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// Index of the correct option. The server reveals it only after
    /// submission; while a quiz is in progress this is `None`.
    pub correct_answer: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub level: QuizLevel,
    pub questions: Vec<Question>,
}

/// Answers collected while a quiz is in progress.
///
/// Keyed by question index; a question the user never touched simply has no
/// entry and is submitted as [`UNANSWERED`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    choices: BTreeMap<usize, usize>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or change) the chosen option for a question.
    pub fn select(&mut self, question: usize, option: usize) {
        self.choices.insert(question, option);
    }

    #[must_use]
    pub fn choice(&self, question: usize) -> Option<usize> {
        self.choices.get(&question).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.choices.len()
    }

    /// Discard all collected answers (modal close / quiz switch).
    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Build the submission payload: one entry per question in order, with
    /// [`UNANSWERED`] for questions that have no recorded choice.
    #[must_use]
    pub fn to_payload(&self, question_count: usize) -> Vec<i64> {
        (0..question_count)
            .map(|idx| {
                self.choices
                    .get(&idx)
                    .map_or(UNANSWERED, |&option| option as i64)
            })
            .collect()
    }
}

/// The server's verdict on a submitted quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: u32,
    pub percent: u32,
    pub passed: bool,
    pub message: Option<String>,
}

/// Result percent as the server computes it: round(100 * correct / total).
#[must_use]
pub fn result_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    {
        ((correct as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fills_unanswered_with_sentinel() {
        let mut sheet = AnswerSheet::new();
        sheet.select(0, 2);
        sheet.select(2, 1);
        assert_eq!(sheet.to_payload(4), vec![2, UNANSWERED, 1, UNANSWERED]);
    }

    #[test]
    fn reselecting_overwrites_previous_choice() {
        let mut sheet = AnswerSheet::new();
        sheet.select(1, 0);
        sheet.select(1, 3);
        assert_eq!(sheet.choice(1), Some(3));
        assert_eq!(sheet.answered_count(), 1);
    }

    #[test]
    fn clear_discards_answers() {
        let mut sheet = AnswerSheet::new();
        sheet.select(0, 1);
        sheet.clear();
        assert_eq!(sheet.to_payload(2), vec![UNANSWERED, UNANSWERED]);
    }

    #[test]
    fn result_percent_rounds() {
        assert_eq!(result_percent(4, 5), 80);
        assert_eq!(result_percent(2, 3), 67);
        assert_eq!(result_percent(1, 3), 33);
        assert_eq!(result_percent(0, 0), 0);
    }

    #[test]
    fn pass_threshold_is_eighty() {
        assert!(result_percent(4, 5) >= PASS_PERCENT);
        assert!(result_percent(3, 5) < PASS_PERCENT);
    }

    #[test]
    fn level_round_trips_through_str() {
        for level in QuizLevel::ALL {
            assert_eq!(level.as_str().parse::<QuizLevel>(), Ok(level));
        }
        assert!("expert".parse::<QuizLevel>().is_err());
    }
}

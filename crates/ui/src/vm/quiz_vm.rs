use vita_core::model::{PASS_PERCENT, QuizOutcome};

/// Graded quizzes needed for the Quiz Master badge.
pub const QUIZ_BADGE_TARGET: u32 = 5;

#[must_use]
pub fn result_text(outcome: &QuizOutcome) -> String {
    if outcome.passed {
        format!("Passed ({}%)", outcome.percent)
    } else {
        format!("Not passed ({}%) - Need {PASS_PERCENT}%", outcome.percent)
    }
}

/// How a single answer option should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Neutral,
    Chosen,
    Correct,
    Wrong,
}

/// After grading, the correct option (when the server disclosed it) wins
/// over the user's pick; a wrong pick only shows as wrong when the correct
/// index is known.
#[must_use]
pub fn option_tone(
    chosen: bool,
    correct: Option<usize>,
    option_index: usize,
    graded: bool,
) -> OptionTone {
    if graded {
        if correct == Some(option_index) {
            return OptionTone::Correct;
        }
        if chosen {
            return if correct.is_some() {
                OptionTone::Wrong
            } else {
                OptionTone::Chosen
            };
        }
        return OptionTone::Neutral;
    }
    if chosen {
        OptionTone::Chosen
    } else {
        OptionTone::Neutral
    }
}

#[must_use]
pub fn option_class(tone: OptionTone) -> &'static str {
    match tone {
        OptionTone::Neutral => "option",
        OptionTone::Chosen => "option chosen",
        OptionTone::Correct => "option correct",
        OptionTone::Wrong => "option wrong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(percent: u32, passed: bool) -> QuizOutcome {
        QuizOutcome {
            score: 0,
            percent,
            passed,
            message: None,
        }
    }

    #[test]
    fn result_text_names_the_pass_bar() {
        assert_eq!(result_text(&outcome(85, true)), "Passed (85%)");
        assert_eq!(
            result_text(&outcome(60, false)),
            "Not passed (60%) - Need 80%"
        );
    }

    #[test]
    fn grading_reveals_correct_and_wrong_choices() {
        assert_eq!(option_tone(false, Some(1), 1, true), OptionTone::Correct);
        assert_eq!(option_tone(true, Some(1), 0, true), OptionTone::Wrong);
        assert_eq!(option_tone(false, Some(1), 2, true), OptionTone::Neutral);
    }

    #[test]
    fn undisclosed_answer_keeps_the_pick_highlighted() {
        assert_eq!(option_tone(true, None, 0, true), OptionTone::Chosen);
        assert_eq!(option_tone(true, None, 0, false), OptionTone::Chosen);
        assert_eq!(option_tone(false, None, 0, false), OptionTone::Neutral);
    }
}

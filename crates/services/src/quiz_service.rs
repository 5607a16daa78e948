use std::sync::Arc;

use api::VitaApi;
use vita_core::model::{AnswerSheet, AuthSession, Quiz, QuizLevel, QuizOutcome};

use crate::error::QuizServiceError;

/// Quiz listing and submission.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn VitaApi>,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>) -> Self {
        Self { api }
    }

    /// Quizzes available at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Api` when the request fails.
    pub async fn list(
        &self,
        session: &AuthSession,
        level: QuizLevel,
    ) -> Result<Vec<Quiz>, QuizServiceError> {
        let quizzes = self.api.quizzes(session, level).await?;
        Ok(quizzes)
    }

    /// Submit the collected answers for grading. Questions without a
    /// recorded choice go out as the unanswered sentinel; the server owns
    /// scoring and the pass/fail verdict.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Api` when the request fails.
    pub async fn submit(
        &self,
        session: &AuthSession,
        quiz: &Quiz,
        answers: &AnswerSheet,
    ) -> Result<QuizOutcome, QuizServiceError> {
        let payload = answers.to_payload(quiz.questions.len());
        let outcome = self.api.submit_quiz(session, &quiz.id, &payload).await?;
        Ok(outcome)
    }
}

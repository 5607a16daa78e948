use std::sync::Arc;

use api::VitaApi;
use vita_core::model::{AuthSession, Course, CourseId, User};
use vita_core::progress::TopicProgress;

use crate::error::CourseServiceError;

/// What happened after marking a topic complete.
#[derive(Debug, Clone)]
pub struct TopicCompletion {
    /// Profile refetched after the mark, so coins/badges are current.
    pub profile: User,
    pub progress: TopicProgress,
    /// Whether this mark finished the course (and the one-shot
    /// complete-course call was made).
    pub course_completed: bool,
    pub completion_message: Option<String>,
}

/// Course catalog reads and topic/course completion writes.
#[derive(Clone)]
pub struct CourseService {
    api: Arc<dyn VitaApi>,
}

impl CourseService {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` when the request fails.
    pub async fn list(&self, session: &AuthSession) -> Result<Vec<Course>, CourseServiceError> {
        let courses = self.api.courses(session).await?;
        Ok(courses)
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` when the request fails or the
    /// course does not exist.
    pub async fn get(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
    ) -> Result<Course, CourseServiceError> {
        let course = self.api.course(session, course_id).await?;
        Ok(course)
    }

    /// Mark a topic complete, refetch the profile, and finish the course
    /// when this was the last open topic.
    ///
    /// Topic completion is idempotent on the server, so duplicate marks are
    /// harmless. The follow-up complete-course call fires at most once per
    /// invocation — only when the refreshed profile shows every topic done —
    /// and its failure (typically "already completed") is swallowed: the
    /// server stays the authority on rewards.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` when the mark itself or the profile
    /// refetch fails.
    pub async fn complete_topic(
        &self,
        session: &AuthSession,
        course: &Course,
        topic_index: usize,
    ) -> Result<TopicCompletion, CourseServiceError> {
        self.api
            .complete_topic(session, &course.id, topic_index)
            .await?;

        let profile = self.api.user_profile(session).await?;
        let progress = TopicProgress::new(
            profile.completed_topic_count(&course.id),
            course.topic_count(),
        );

        let mut course_completed = false;
        let mut completion_message = None;
        if progress.is_complete() {
            match self.api.complete_course(session, &course.id).await {
                Ok(message) => {
                    course_completed = true;
                    completion_message = message;
                }
                Err(err) => {
                    tracing::debug!(course = %course.id, %err, "complete-course call swallowed");
                }
            }
        }

        Ok(TopicCompletion {
            profile,
            progress,
            course_completed,
            completion_message,
        })
    }
}

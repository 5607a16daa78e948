use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{CourseId, UserId};

/// A user profile as reported by the server.
///
/// The client never computes authoritative balances or completion state; this
/// is a transient copy refreshed from `GET /api/user/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub coins: i64,
    pub badges: Vec<String>,
    pub quiz_progress: u32,
    pub completed_courses: u32,
    /// Completed topic indices per course. A set, so marking the same topic
    /// twice can never duplicate an index.
    pub course_progress: HashMap<CourseId, BTreeSet<usize>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Number of topics the user has completed in the given course.
    #[must_use]
    pub fn completed_topic_count(&self, course_id: &CourseId) -> usize {
        self.course_progress
            .get(course_id)
            .map_or(0, BTreeSet::len)
    }

    /// Whether a specific topic index is complete for the given course.
    #[must_use]
    pub fn is_topic_complete(&self, course_id: &CourseId, topic_index: usize) -> bool {
        self.course_progress
            .get(course_id)
            .is_some_and(|topics| topics.contains(&topic_index))
    }

    #[must_use]
    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.iter().any(|badge| badge == name)
    }

    /// The most recently awarded badge, if any.
    #[must_use]
    pub fn latest_badge(&self) -> Option<&str> {
        self.badges.last().map(String::as_str)
    }
}

/// One row of the public leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub coins: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn sample_user() -> User {
        let mut course_progress = HashMap::new();
        course_progress.insert(CourseId::from("c1"), BTreeSet::from([0, 2]));
        User {
            id: UserId::from("u1"),
            name: "Jane".into(),
            email: "jane@example.com".into(),
            coins: 150,
            badges: vec!["Quiz Master".into(), "Course Champion".into()],
            quiz_progress: 3,
            completed_courses: 1,
            course_progress,
            created_at: fixed_now(),
        }
    }

    #[test]
    fn completed_topic_count_defaults_to_zero() {
        let user = sample_user();
        assert_eq!(user.completed_topic_count(&CourseId::from("c1")), 2);
        assert_eq!(user.completed_topic_count(&CourseId::from("missing")), 0);
    }

    #[test]
    fn topic_completion_lookup() {
        let user = sample_user();
        let course = CourseId::from("c1");
        assert!(user.is_topic_complete(&course, 0));
        assert!(!user.is_topic_complete(&course, 1));
    }

    #[test]
    fn latest_badge_is_last_awarded() {
        let user = sample_user();
        assert_eq!(user.latest_badge(), Some("Course Champion"));
        assert!(user.has_badge("Quiz Master"));
        assert!(!user.has_badge("Super Achiever"));
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::CourseId;

/// Course difficulty. Determines the fixed coin reward the platform pays on
/// completion; the reward shown client-side is a display hint only, the
/// server issues the actual credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Vitacoins awarded on completion for this level.
    #[must_use]
    pub fn reward_coins(self) -> u32 {
        match self {
            CourseLevel::Beginner => 30,
            CourseLevel::Intermediate => 50,
            CourseLevel::Advanced => 80,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of content a topic carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    Video,
    Text,
}

impl TopicKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TopicKind::Video => "video",
            TopicKind::Text => "text",
        }
    }
}

/// A supplementary link attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResource {
    pub label: Option<String>,
    pub url: String,
}

/// An atomic unit of course content with its own completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub kind: TopicKind,
    /// Inline text body (text topics).
    pub content: Option<String>,
    /// Media URL (video topics).
    pub content_url: Option<String>,
    pub summary: Option<String>,
    pub estimated_minutes: Option<u32>,
    pub image_url: Option<String>,
    pub code_snippet: Option<String>,
    pub objectives: Vec<String>,
    pub tips: Vec<String>,
    pub resources: Vec<TopicResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub level: CourseLevel,
    /// Some catalog entries group multiple courses into a "program".
    pub is_program: bool,
    pub topics: Vec<Topic>,
}

impl Course {
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn topic(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_coins_by_level() {
        assert_eq!(CourseLevel::Beginner.reward_coins(), 30);
        assert_eq!(CourseLevel::Intermediate.reward_coins(), 50);
        assert_eq!(CourseLevel::Advanced.reward_coins(), 80);
    }

    #[test]
    fn level_wire_names_are_lowercase() {
        let json = serde_json::to_string(&CourseLevel::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
    }
}

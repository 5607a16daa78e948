//! Wire payloads for the Vitaversity REST API.
//!
//! The server's JSON is loosely shaped (optional and missing fields are
//! common), so every field the server may omit is optional-typed or
//! defaulted here and normalized once, at the conversion into `vita-core`
//! domain types.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vita_core::model::{
    Course, CourseId, CourseLevel, ForumPost, ForumReply, LeaderboardEntry, PostId, Question,
    Quiz, QuizId, QuizLevel, QuizOutcome, ReplyId, Topic, TopicKind, TopicResource, Transaction,
    TransactionId, TransactionKind, User, UserId,
};

fn missing_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

// ─── Auth ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ─── User / leaderboard / transactions ──────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub quiz_progress: u32,
    #[serde(default)]
    pub completed_courses: u32,
    #[serde(default)]
    pub course_progress: HashMap<String, Vec<usize>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDto {
    #[must_use]
    pub fn into_user(self) -> User {
        let course_progress = self
            .course_progress
            .into_iter()
            .map(|(course, topics)| {
                // Collapse any duplicates the server might send.
                (CourseId::new(course), topics.into_iter().collect::<BTreeSet<_>>())
            })
            .collect();
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            coins: self.coins,
            badges: self.badges,
            quiz_progress: self.quiz_progress,
            completed_courses: self.completed_courses,
            course_progress,
            created_at: self.created_at.unwrap_or_else(missing_timestamp),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardEntryDto {
    pub name: String,
    #[serde(default)]
    pub coins: i64,
}

impl LeaderboardEntryDto {
    #[must_use]
    pub fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            name: self.name,
            coins: self.coins,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TransactionDto {
    #[must_use]
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(self.id),
            kind: self.kind,
            amount: self.amount,
            reason: self.reason,
            created_at: self.created_at.unwrap_or_else(missing_timestamp),
        }
    }
}

// ─── Quizzes ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionDto {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Revealed only after submission.
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct QuizDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub level: QuizLevel,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
}

impl QuizDto {
    #[must_use]
    pub fn into_quiz(self) -> Quiz {
        Quiz {
            id: QuizId::new(self.id),
            title: self.title,
            level: self.level,
            questions: self
                .questions
                .into_iter()
                .map(|q| Question {
                    text: q.text,
                    options: q.options,
                    correct_answer: q.correct_answer,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub user_id: String,
    pub quiz_id: String,
    pub answers: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizResponse {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub percent: u32,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitQuizResponse {
    #[must_use]
    pub fn into_outcome(self) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            percent: self.percent,
            passed: self.passed,
            message: self.message,
        }
    }
}

// ─── Courses ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResourceDto {
    #[serde(default)]
    pub label: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TopicKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub code_snippet: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub resources: Vec<TopicResourceDto>,
}

impl TopicDto {
    #[must_use]
    pub fn into_topic(self) -> Topic {
        Topic {
            title: self.title,
            kind: self.kind,
            content: self.content,
            content_url: self.content_url,
            summary: self.summary,
            estimated_minutes: self.estimated_minutes,
            image_url: self.image_url,
            code_snippet: self.code_snippet,
            objectives: self.objectives,
            tips: self.tips,
            resources: self
                .resources
                .into_iter()
                .map(|r| TopicResource {
                    label: r.label,
                    url: r.url,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub level: CourseLevel,
    #[serde(default)]
    pub is_program: bool,
    #[serde(default)]
    pub topics: Vec<TopicDto>,
}

impl CourseDto {
    #[must_use]
    pub fn into_course(self) -> Course {
        Course {
            id: CourseId::new(self.id),
            title: self.title,
            description: self.description,
            level: self.level,
            is_program: self.is_program,
            topics: self.topics.into_iter().map(TopicDto::into_topic).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTopicRequest {
    pub user_id: String,
    pub course_id: String,
    pub topic_index: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteCourseRequest {
    pub user_id: String,
    pub course_id: String,
}

// ─── Coins ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDailyRequest {
    pub user_id: String,
}

/// Result of a successful daily claim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DailyClaim {
    /// New authoritative balance.
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub message: Option<String>,
    /// Consecutive claimed days, when the server reports it.
    #[serde(default)]
    pub streak: Option<u32>,
}

// ─── Forum ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPostDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ForumPostDto {
    #[must_use]
    pub fn into_post(self) -> ForumPost {
        ForumPost {
            id: PostId::new(self.id),
            author: self.author,
            content: self.content,
            created_at: self.created_at.unwrap_or_else(missing_timestamp),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumReplyDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ForumReplyDto {
    #[must_use]
    pub fn into_reply(self) -> ForumReply {
        ForumReply {
            id: ReplyId::new(self.id),
            author: self.author,
            content: self.content,
            created_at: self.created_at.unwrap_or_else(missing_timestamp),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub post: ForumPostDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    pub user_id: String,
    pub content: String,
}

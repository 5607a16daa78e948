use std::env;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use vita_core::model::{
    AuthSession, Course, CourseId, ForumPost, ForumReply, LeaderboardEntry, PostId, Quiz,
    QuizId, QuizLevel, QuizOutcome, Transaction, User,
};

use crate::dto::{
    ClaimDailyRequest, CompleteCourseRequest, CompleteTopicRequest, CourseDto, CreatePostRequest,
    CreatePostResponse, CreateReplyRequest, DailyClaim, ForumPostDto, ForumReplyDto,
    LeaderboardEntryDto, LoginRequest, LoginResponse, MessageResponse, QuizDto, RegisterRequest,
    SubmitQuizRequest, SubmitQuizResponse, TransactionDto, UserDto,
};
use crate::error::ApiError;

/// Where the remote API lives.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `VITA_API_URL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_raw(env::var("VITA_API_URL").ok())
    }

    fn from_raw(raw: Option<String>) -> Option<Self> {
        let base_url = raw?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }
}

/// Successful login: the session to persist plus the profile that came with it.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: AuthSession,
    pub user: User,
}

/// The remote REST API, one method per endpoint.
///
/// Implemented by [`HttpApi`] for production and by
/// [`crate::memory::InMemoryApi`] for tests.
#[async_trait]
pub trait VitaApi: Send + Sync {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError>;

    async fn user_profile(&self, session: &AuthSession) -> Result<User, ApiError>;

    async fn transactions(&self, session: &AuthSession) -> Result<Vec<Transaction>, ApiError>;

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError>;

    async fn quizzes(
        &self,
        session: &AuthSession,
        level: QuizLevel,
    ) -> Result<Vec<Quiz>, ApiError>;

    async fn submit_quiz(
        &self,
        session: &AuthSession,
        quiz_id: &QuizId,
        answers: &[i64],
    ) -> Result<QuizOutcome, ApiError>;

    async fn courses(&self, session: &AuthSession) -> Result<Vec<Course>, ApiError>;

    async fn course(&self, session: &AuthSession, course_id: &CourseId)
    -> Result<Course, ApiError>;

    async fn complete_topic(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
        topic_index: usize,
    ) -> Result<Option<String>, ApiError>;

    async fn complete_course(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
    ) -> Result<Option<String>, ApiError>;

    async fn claim_daily(&self, session: &AuthSession) -> Result<DailyClaim, ApiError>;

    async fn forum_posts(&self, session: &AuthSession) -> Result<Vec<ForumPost>, ApiError>;

    async fn create_forum_post(
        &self,
        session: &AuthSession,
        content: &str,
    ) -> Result<ForumPost, ApiError>;

    async fn forum_replies(
        &self,
        session: &AuthSession,
        post_id: &PostId,
    ) -> Result<Vec<ForumReply>, ApiError>;

    async fn create_forum_reply(
        &self,
        session: &AuthSession,
        post_id: &PostId,
        content: &str,
    ) -> Result<ForumReply, ApiError>;
}

/// Thin HTTP client over the remote API.
///
/// No retry, no caching, no backpressure: every method is a single
/// request/response mapping with the session token as a bearer header.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn get(&self, path: &str, session: Option<&AuthSession>) -> RequestBuilder {
        let builder = self.client.get(self.url(path));
        match session {
            Some(session) => builder.bearer_auth(&session.token),
            None => builder,
        }
    }

    fn post(&self, path: &str, session: Option<&AuthSession>) -> RequestBuilder {
        let builder = self.client.post(self.url(path));
        match session {
            Some(session) => builder.bearer_auth(&session.token),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_message(&body)
                .unwrap_or_else(|| format!("request to {path} failed"));
            tracing::debug!(%status, path, "api request failed");
            return Err(ApiError::Status { status, message });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

/// Pull the `message` field out of a JSON error body, if there is one.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[async_trait]
impl VitaApi for HttpApi {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        let payload = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .post("/api/auth/register", None)
            .json(&payload)
            .send()
            .await?;
        let ack: MessageResponse = Self::decode("/api/auth/register", response).await?;
        Ok(ack.message)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let payload = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .post("/api/auth/login", None)
            .json(&payload)
            .send()
            .await?;
        let body: LoginResponse = Self::decode("/api/auth/login", response).await?;
        let user = body.user.into_user();
        Ok(LoginOutcome {
            session: AuthSession::new(body.token, user.id.clone()),
            user,
        })
    }

    async fn user_profile(&self, session: &AuthSession) -> Result<User, ApiError> {
        let path = format!("/api/user/{}", session.user_id);
        let response = self.get(&path, Some(session)).send().await?;
        let dto: UserDto = Self::decode(&path, response).await?;
        Ok(dto.into_user())
    }

    async fn transactions(&self, session: &AuthSession) -> Result<Vec<Transaction>, ApiError> {
        let path = format!("/api/user/{}/transactions", session.user_id);
        let response = self.get(&path, Some(session)).send().await?;
        let dtos: Vec<TransactionDto> = Self::decode(&path, response).await?;
        Ok(dtos.into_iter().map(TransactionDto::into_transaction).collect())
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let response = self.get("/api/leaderboard", None).send().await?;
        let dtos: Vec<LeaderboardEntryDto> = Self::decode("/api/leaderboard", response).await?;
        Ok(dtos.into_iter().map(LeaderboardEntryDto::into_entry).collect())
    }

    async fn quizzes(
        &self,
        session: &AuthSession,
        level: QuizLevel,
    ) -> Result<Vec<Quiz>, ApiError> {
        let path = format!("/api/quizzes?level={level}");
        let response = self.get(&path, Some(session)).send().await?;
        let dtos: Vec<QuizDto> = Self::decode(&path, response).await?;
        Ok(dtos.into_iter().map(QuizDto::into_quiz).collect())
    }

    async fn submit_quiz(
        &self,
        session: &AuthSession,
        quiz_id: &QuizId,
        answers: &[i64],
    ) -> Result<QuizOutcome, ApiError> {
        let payload = SubmitQuizRequest {
            user_id: session.user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            answers: answers.to_vec(),
        };
        let response = self
            .post("/api/quizzes/submit", Some(session))
            .json(&payload)
            .send()
            .await?;
        let body: SubmitQuizResponse = Self::decode("/api/quizzes/submit", response).await?;
        Ok(body.into_outcome())
    }

    async fn courses(&self, session: &AuthSession) -> Result<Vec<Course>, ApiError> {
        let response = self.get("/api/courses", Some(session)).send().await?;
        let dtos: Vec<CourseDto> = Self::decode("/api/courses", response).await?;
        Ok(dtos.into_iter().map(CourseDto::into_course).collect())
    }

    async fn course(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
    ) -> Result<Course, ApiError> {
        let path = format!("/api/courses/{course_id}");
        let response = self.get(&path, Some(session)).send().await?;
        let dto: CourseDto = Self::decode(&path, response).await?;
        Ok(dto.into_course())
    }

    async fn complete_topic(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
        topic_index: usize,
    ) -> Result<Option<String>, ApiError> {
        let payload = CompleteTopicRequest {
            user_id: session.user_id.to_string(),
            course_id: course_id.to_string(),
            topic_index,
        };
        let response = self
            .post("/api/courses/complete-topic", Some(session))
            .json(&payload)
            .send()
            .await?;
        let ack: MessageResponse = Self::decode("/api/courses/complete-topic", response).await?;
        Ok(ack.message)
    }

    async fn complete_course(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
    ) -> Result<Option<String>, ApiError> {
        let payload = CompleteCourseRequest {
            user_id: session.user_id.to_string(),
            course_id: course_id.to_string(),
        };
        let response = self
            .post("/api/courses/complete", Some(session))
            .json(&payload)
            .send()
            .await?;
        let ack: MessageResponse = Self::decode("/api/courses/complete", response).await?;
        Ok(ack.message)
    }

    async fn claim_daily(&self, session: &AuthSession) -> Result<DailyClaim, ApiError> {
        let payload = ClaimDailyRequest {
            user_id: session.user_id.to_string(),
        };
        let response = self
            .post("/api/coins/claim-daily", Some(session))
            .json(&payload)
            .send()
            .await?;
        Self::decode("/api/coins/claim-daily", response).await
    }

    async fn forum_posts(&self, session: &AuthSession) -> Result<Vec<ForumPost>, ApiError> {
        let response = self.get("/api/forum/posts", Some(session)).send().await?;
        let dtos: Vec<ForumPostDto> = Self::decode("/api/forum/posts", response).await?;
        Ok(dtos.into_iter().map(ForumPostDto::into_post).collect())
    }

    async fn create_forum_post(
        &self,
        session: &AuthSession,
        content: &str,
    ) -> Result<ForumPost, ApiError> {
        let payload = CreatePostRequest {
            user_id: session.user_id.to_string(),
            content: content.to_owned(),
        };
        let response = self
            .post("/api/forum/posts", Some(session))
            .json(&payload)
            .send()
            .await?;
        let body: CreatePostResponse = Self::decode("/api/forum/posts", response).await?;
        Ok(body.post.into_post())
    }

    async fn forum_replies(
        &self,
        session: &AuthSession,
        post_id: &PostId,
    ) -> Result<Vec<ForumReply>, ApiError> {
        let path = format!("/api/forum/posts/{post_id}/replies");
        let response = self.get(&path, Some(session)).send().await?;
        let dtos: Vec<ForumReplyDto> = Self::decode(&path, response).await?;
        Ok(dtos.into_iter().map(ForumReplyDto::into_reply).collect())
    }

    async fn create_forum_reply(
        &self,
        session: &AuthSession,
        post_id: &PostId,
        content: &str,
    ) -> Result<ForumReply, ApiError> {
        let payload = CreateReplyRequest {
            user_id: session.user_id.to_string(),
            content: content.to_owned(),
        };
        let path = format!("/api/forum/posts/{post_id}/replies");
        let response = self.post(&path, Some(session)).json(&payload).send().await?;
        let dto: ForumReplyDto = Self::decode(&path, response).await?;
        Ok(dto.into_reply())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpApi::new(ApiConfig::new("http://localhost:5000/"));
        assert_eq!(api.url("/api/leaderboard"), "http://localhost:5000/api/leaderboard");
    }

    #[test]
    fn env_config_requires_a_nonempty_url() {
        assert!(ApiConfig::from_raw(None).is_none());
        assert!(ApiConfig::from_raw(Some("  ".into())).is_none());
        let config = ApiConfig::from_raw(Some("http://localhost:5000/api".into()));
        assert_eq!(
            config.map(|c| c.base_url).as_deref(),
            Some("http://localhost:5000/api")
        );
    }

    #[test]
    fn extract_message_reads_json_bodies_only() {
        assert_eq!(
            extract_message(r#"{"message":"Already claimed today"}"#).as_deref(),
            Some("Already claimed today")
        );
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"error":"nope"}"#), None);
    }
}

//! In-memory stand-in for the remote API.
//!
//! Backs service and view tests with a small fake server that enforces the
//! same observable rules the real one does: bearer-token auth, the daily
//! claim-once rule, idempotent topic completion, and one-shot course
//! completion. Also counts calls so tests can assert on request traffic.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use vita_core::Clock;
use vita_core::model::{
    AuthSession, Course, CourseId, ForumPost, ForumReply, LeaderboardEntry, PASS_PERCENT,
    PostId, Quiz, QuizId, QuizLevel, QuizOutcome, REGISTRATION_BONUS_COINS, ReplyId,
    Transaction, TransactionId, TransactionKind, User, UserId, result_percent,
};

use crate::client::{LoginOutcome, VitaApi};
use crate::dto::DailyClaim;
use crate::error::ApiError;

const DAILY_BONUS_COINS: i64 = 50;
const QUIZ_REWARD_COINS: i64 = 50;
const QUIZ_MASTER_THRESHOLD: u32 = 5;

struct Account {
    user: User,
    password: String,
    token: String,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    quizzes: Vec<Quiz>,
    courses: Vec<Course>,
    posts: Vec<ForumPost>,
    replies: HashMap<PostId, Vec<ForumReply>>,
    ledgers: HashMap<UserId, Vec<Transaction>>,
    claimed_today: HashSet<UserId>,
    finished_courses: HashSet<(UserId, CourseId)>,
    register_calls: usize,
    complete_course_calls: usize,
    next_id: u64,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn account_index(&self, session: &AuthSession) -> Result<usize, ApiError> {
        self.accounts
            .iter()
            .position(|account| {
                account.user.id == session.user_id && account.token == session.token
            })
            .ok_or_else(|| ApiError::status(StatusCode::UNAUTHORIZED, "Invalid or expired token"))
    }

    fn credit(&mut self, clock: Clock, user_id: &UserId, amount: i64, reason: &str) {
        let id = TransactionId::new(self.next_id("t"));
        self.ledgers.entry(user_id.clone()).or_default().push(Transaction {
            id,
            kind: TransactionKind::Credit,
            amount,
            reason: reason.to_owned(),
            created_at: clock.now(),
        });
    }
}

pub struct InMemoryApi {
    clock: Clock,
    state: Mutex<State>,
}

impl InMemoryApi {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: Mutex::new(State::default()),
        }
    }

    pub fn seed_quiz(&self, quiz: Quiz) {
        self.state.lock().expect("state lock").quizzes.push(quiz);
    }

    pub fn seed_course(&self, course: Course) {
        self.state.lock().expect("state lock").courses.push(course);
    }

    /// Register + login shortcut for tests.
    ///
    /// # Panics
    ///
    /// Panics if the account cannot be created.
    pub async fn seed_account(&self, name: &str, email: &str, password: &str) -> AuthSession {
        self.register(name, email, password).await.expect("register");
        self.login(email, password).await.expect("login").session
    }

    /// How many registration requests actually reached the "server".
    #[must_use]
    pub fn register_calls(&self) -> usize {
        self.state.lock().expect("state lock").register_calls
    }

    /// How many complete-course requests actually reached the "server".
    #[must_use]
    pub fn complete_course_calls(&self) -> usize {
        self.state.lock().expect("state lock").complete_course_calls
    }
}

#[async_trait]
impl VitaApi for InMemoryApi {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        state.register_calls += 1;
        if state.accounts.iter().any(|a| a.user.email == email) {
            return Err(ApiError::status(
                StatusCode::CONFLICT,
                "Email already registered",
            ));
        }
        let id = UserId::new(state.next_id("u"));
        let token = format!("token-{id}");
        let user = User {
            id: id.clone(),
            name: name.to_owned(),
            email: email.to_owned(),
            coins: REGISTRATION_BONUS_COINS,
            badges: Vec::new(),
            quiz_progress: 0,
            completed_courses: 0,
            course_progress: HashMap::new(),
            created_at: self.clock.now(),
        };
        state.accounts.push(Account {
            user,
            password: password.to_owned(),
            token,
        });
        state.credit(self.clock, &id, REGISTRATION_BONUS_COINS, "Registration Bonus");
        Ok(Some("Registration successful".into()))
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let state = self.state.lock().expect("state lock");
        let account = state
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .ok_or_else(|| ApiError::status(StatusCode::UNAUTHORIZED, "Invalid credentials"))?;
        Ok(LoginOutcome {
            session: AuthSession::new(account.token.clone(), account.user.id.clone()),
            user: account.user.clone(),
        })
    }

    async fn user_profile(&self, session: &AuthSession) -> Result<User, ApiError> {
        let state = self.state.lock().expect("state lock");
        let idx = state.account_index(session)?;
        Ok(state.accounts[idx].user.clone())
    }

    async fn transactions(&self, session: &AuthSession) -> Result<Vec<Transaction>, ApiError> {
        let state = self.state.lock().expect("state lock");
        state.account_index(session)?;
        let mut ledger = state
            .ledgers
            .get(&session.user_id)
            .cloned()
            .unwrap_or_default();
        // Most recent first, like the real endpoint.
        ledger.reverse();
        Ok(ledger)
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let state = self.state.lock().expect("state lock");
        let mut entries: Vec<LeaderboardEntry> = state
            .accounts
            .iter()
            .map(|a| LeaderboardEntry {
                name: a.user.name.clone(),
                coins: a.user.coins,
            })
            .collect();
        entries.sort_by(|a, b| b.coins.cmp(&a.coins));
        Ok(entries)
    }

    async fn quizzes(
        &self,
        session: &AuthSession,
        level: QuizLevel,
    ) -> Result<Vec<Quiz>, ApiError> {
        let state = self.state.lock().expect("state lock");
        state.account_index(session)?;
        Ok(state
            .quizzes
            .iter()
            .filter(|quiz| quiz.level == level)
            .cloned()
            .collect())
    }

    async fn submit_quiz(
        &self,
        session: &AuthSession,
        quiz_id: &QuizId,
        answers: &[i64],
    ) -> Result<QuizOutcome, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        let account_idx = state.account_index(session)?;
        let quiz = state
            .quizzes
            .iter()
            .find(|quiz| &quiz.id == quiz_id)
            .cloned()
            .ok_or_else(|| ApiError::status(StatusCode::NOT_FOUND, "Quiz not found"))?;
        let correct = quiz
            .questions
            .iter()
            .zip(answers)
            .filter(|(question, &answer)| {
                question
                    .correct_answer
                    .is_some_and(|expected| answer == expected as i64)
            })
            .count();
        let percent = result_percent(correct, quiz.questions.len());
        let passed = percent >= PASS_PERCENT;
        if passed {
            let user_id = state.accounts[account_idx].user.id.clone();
            state.credit(self.clock, &user_id, QUIZ_REWARD_COINS, "Quiz Reward");
            let user = &mut state.accounts[account_idx].user;
            user.coins += QUIZ_REWARD_COINS;
            user.quiz_progress += 1;
            if user.quiz_progress >= QUIZ_MASTER_THRESHOLD && !user.has_badge("Quiz Master") {
                user.badges.push("Quiz Master".into());
            }
        }
        Ok(QuizOutcome {
            score: correct as u32,
            percent,
            passed,
            message: Some(if passed {
                "Quiz passed".into()
            } else {
                "Quiz not passed".into()
            }),
        })
    }

    async fn courses(&self, session: &AuthSession) -> Result<Vec<Course>, ApiError> {
        let state = self.state.lock().expect("state lock");
        state.account_index(session)?;
        Ok(state.courses.clone())
    }

    async fn course(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
    ) -> Result<Course, ApiError> {
        let state = self.state.lock().expect("state lock");
        state.account_index(session)?;
        state
            .courses
            .iter()
            .find(|course| &course.id == course_id)
            .cloned()
            .ok_or_else(|| ApiError::status(StatusCode::NOT_FOUND, "Course not found"))
    }

    async fn complete_topic(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
        topic_index: usize,
    ) -> Result<Option<String>, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        let idx = state.account_index(session)?;
        let user = &mut state.accounts[idx].user;
        user.course_progress
            .entry(course_id.clone())
            .or_default()
            .insert(topic_index);
        Ok(Some("Topic completed".into()))
    }

    async fn complete_course(
        &self,
        session: &AuthSession,
        course_id: &CourseId,
    ) -> Result<Option<String>, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        state.complete_course_calls += 1;
        let idx = state.account_index(session)?;
        let key = (session.user_id.clone(), course_id.clone());
        if state.finished_courses.contains(&key) {
            return Err(ApiError::status(
                StatusCode::BAD_REQUEST,
                "Course already completed",
            ));
        }
        let reward = i64::from(
            state
                .courses
                .iter()
                .find(|course| &course.id == course_id)
                .ok_or_else(|| ApiError::status(StatusCode::NOT_FOUND, "Course not found"))?
                .level
                .reward_coins(),
        );
        state.finished_courses.insert(key);
        let user_id = session.user_id.clone();
        state.credit(self.clock, &user_id, reward, "Course Reward");
        let user = &mut state.accounts[idx].user;
        user.coins += reward;
        user.completed_courses += 1;
        Ok(Some("Course completed!".into()))
    }

    async fn claim_daily(&self, session: &AuthSession) -> Result<DailyClaim, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        let idx = state.account_index(session)?;
        if !state.claimed_today.insert(session.user_id.clone()) {
            return Err(ApiError::status(
                StatusCode::BAD_REQUEST,
                "Already claimed today",
            ));
        }
        let user_id = session.user_id.clone();
        state.credit(self.clock, &user_id, DAILY_BONUS_COINS, "Daily Login Bonus");
        let user = &mut state.accounts[idx].user;
        user.coins += DAILY_BONUS_COINS;
        Ok(DailyClaim {
            coins: user.coins,
            message: Some("Daily coins claimed!".into()),
            streak: Some(1),
        })
    }

    async fn forum_posts(&self, session: &AuthSession) -> Result<Vec<ForumPost>, ApiError> {
        let state = self.state.lock().expect("state lock");
        state.account_index(session)?;
        Ok(state.posts.clone())
    }

    async fn create_forum_post(
        &self,
        session: &AuthSession,
        content: &str,
    ) -> Result<ForumPost, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        let idx = state.account_index(session)?;
        let author = state.accounts[idx].user.name.clone();
        let post = ForumPost {
            id: PostId::new(state.next_id("p")),
            author,
            content: content.to_owned(),
            created_at: self.clock.now(),
        };
        // Newest first.
        state.posts.insert(0, post.clone());
        Ok(post)
    }

    async fn forum_replies(
        &self,
        session: &AuthSession,
        post_id: &PostId,
    ) -> Result<Vec<ForumReply>, ApiError> {
        let state = self.state.lock().expect("state lock");
        state.account_index(session)?;
        Ok(state.replies.get(post_id).cloned().unwrap_or_default())
    }

    async fn create_forum_reply(
        &self,
        session: &AuthSession,
        post_id: &PostId,
        content: &str,
    ) -> Result<ForumReply, ApiError> {
        let mut state = self.state.lock().expect("state lock");
        let idx = state.account_index(session)?;
        if !state.posts.iter().any(|post| &post.id == post_id) {
            return Err(ApiError::status(StatusCode::NOT_FOUND, "Post not found"));
        }
        let author = state.accounts[idx].user.name.clone();
        let reply = ForumReply {
            id: ReplyId::new(state.next_id("r")),
            author,
            content: content.to_owned(),
            created_at: self.clock.now(),
        };
        state
            .replies
            .entry(post_id.clone())
            .or_default()
            .push(reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::time::fixed_clock;

    #[tokio::test]
    async fn register_then_login_round_trips() {
        let api = InMemoryApi::new(fixed_clock());
        api.register("Jane", "jane@example.com", "secret").await.unwrap();
        let outcome = api.login("jane@example.com", "secret").await.unwrap();
        assert_eq!(outcome.user.coins, REGISTRATION_BONUS_COINS);

        let err = api.login("jane@example.com", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn stale_token_is_rejected() {
        let api = InMemoryApi::new(fixed_clock());
        let session = api.seed_account("Jane", "jane@example.com", "secret").await;
        let stale = AuthSession::new("token-forged", session.user_id.clone());
        assert!(api.user_profile(&stale).await.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn second_daily_claim_is_rejected() {
        let api = InMemoryApi::new(fixed_clock());
        let session = api.seed_account("Jane", "jane@example.com", "secret").await;
        let claim = api.claim_daily(&session).await.unwrap();
        assert_eq!(claim.coins, REGISTRATION_BONUS_COINS + DAILY_BONUS_COINS);

        let err = api.claim_daily(&session).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Already claimed today"));
        let profile = api.user_profile(&session).await.unwrap();
        assert_eq!(profile.coins, claim.coins);
    }
}

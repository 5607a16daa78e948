//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// Local validation; no request is issued when this fires.
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("failed to persist session: {0}")]
    SessionStore(#[source] std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `UserService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UserServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `CoinService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoinError {
    /// The daily bonus was already claimed today; the balance is unchanged.
    #[error("{0}")]
    AlreadyClaimed(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ForumService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ForumError {
    /// Local validation; no request is issued when this fires.
    #[error("Message cannot be empty")]
    EmptyContent,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod coin_service;
pub mod course_service;
pub mod error;
pub mod forum_service;
pub mod quiz_service;
pub mod session_store;
pub mod user_service;

pub use vita_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use coin_service::CoinService;
pub use course_service::{CourseService, TopicCompletion};
pub use error::{
    AuthError, CoinError, CourseServiceError, ForumError, QuizServiceError, UserServiceError,
};
pub use forum_service::ForumService;
pub use quiz_service::QuizService;
pub use session_store::{FileSessionStore, InMemorySessionStore, SessionStore};
pub use user_service::{UserService, UserSnapshot};

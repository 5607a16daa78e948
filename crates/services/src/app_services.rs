use std::sync::Arc;

use api::VitaApi;

use crate::auth_service::AuthService;
use crate::coin_service::CoinService;
use crate::course_service::CourseService;
use crate::forum_service::ForumService;
use crate::quiz_service::QuizService;
use crate::session_store::SessionStore;
use crate::user_service::UserService;

/// Assembles the app-facing services over one API client.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    users: Arc<UserService>,
    quizzes: Arc<QuizService>,
    courses: Arc<CourseService>,
    coins: Arc<CoinService>,
    forum: Arc<ForumService>,
}

impl AppServices {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(Arc::clone(&api), sessions)),
            users: Arc::new(UserService::new(Arc::clone(&api))),
            quizzes: Arc::new(QuizService::new(Arc::clone(&api))),
            courses: Arc::new(CourseService::new(Arc::clone(&api))),
            coins: Arc::new(CoinService::new(Arc::clone(&api))),
            forum: Arc::new(ForumService::new(api)),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn users(&self) -> Arc<UserService> {
        Arc::clone(&self.users)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn coins(&self) -> Arc<CoinService> {
        Arc::clone(&self.coins)
    }

    #[must_use]
    pub fn forum(&self) -> Arc<ForumService> {
        Arc::clone(&self.forum)
    }
}

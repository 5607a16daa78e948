use std::sync::{Arc, RwLock};

use services::{AuthService, CoinService, CourseService, ForumService, QuizService, UserService};
use vita_core::model::AuthSession;

/// What the composition root must hand the UI.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn users(&self) -> Arc<UserService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn courses(&self) -> Arc<CourseService>;
    fn coins(&self) -> Arc<CoinService>;
    fn forum(&self) -> Arc<ForumService>;
}

/// Services plus the signed-in session, shared by every routed view.
///
/// The session slot starts from whatever `AuthService` restored from disk,
/// so a relaunch lands on the dashboard instead of the login form.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    users: Arc<UserService>,
    quizzes: Arc<QuizService>,
    courses: Arc<CourseService>,
    coins: Arc<CoinService>,
    forum: Arc<ForumService>,
    session: Arc<RwLock<Option<AuthSession>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let auth = app.auth();
        let restored = auth.restore_session();
        Self {
            auth,
            users: app.users(),
            quizzes: app.quizzes(),
            courses: app.courses(),
            coins: app.coins(),
            forum: app.forum(),
            session: Arc::new(RwLock::new(restored)),
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

    #[must_use]
    pub fn session(&self) -> Option<AuthSession> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        }
    }

    pub fn set_session(&self, session: AuthSession) {
        if let Ok(mut guard) = self.session.write() {
            *guard = Some(session);
        }
    }

    pub fn clear_session(&self) {
        if let Ok(mut guard) = self.session.write() {
            *guard = None;
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

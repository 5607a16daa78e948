use std::sync::Arc;

use api::{InMemoryApi, VitaApi};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, AuthService, CoinService, CourseService, ForumService, InMemorySessionStore,
    QuizService, UserService,
};
use vita_core::model::AuthSession;
use vita_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::user_cache::use_user_cache_provider;
use crate::views::{CoursesView, DashboardView, ForumView, LoginView, QuizView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn users(&self) -> Arc<UserService> {
        self.services.users()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn courses(&self) -> Arc<CourseService> {
        self.services.courses()
    }

    fn coins(&self) -> Arc<CoinService> {
        self.services.coins()
    }

    fn forum(&self) -> Arc<ForumService> {
        self.services.forum()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
    Quiz,
    Courses,
    Forum,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: Option<AuthSession>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = build_app_context(&app);
    if let Some(session) = props.session.clone() {
        ctx.set_session(session);
    }
    use_context_provider(|| ctx);
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    use_user_cache_provider();
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Forum => rsx! { ForumView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<InMemoryApi>,
    pub session: Option<AuthSession>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Pump the spawned futures (cache load, resources) until quiescent.
    pub async fn settle(&mut self) {
        for _ in 0..8 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, signed_in: bool) -> ViewHarness {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let session = if signed_in {
        Some(api.seed_account("Jane", "jane@example.com", "secret").await)
    } else {
        None
    };
    let services = AppServices::new(
        Arc::clone(&api) as Arc<dyn VitaApi>,
        Arc::new(InMemorySessionStore::new()),
    );
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            session: session.clone(),
        },
    );

    ViewHarness { dom, api, session }
}

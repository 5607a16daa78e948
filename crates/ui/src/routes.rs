use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::user_cache::{UserCache, use_user_cache_provider};
use crate::views::{
    CourseDetailView, CoursesView, DashboardView, ForumView, LoginView, QuizView, RegisterView,
    TopicView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/:course_id", CourseDetailView)] CourseDetail { course_id: String },
        #[route("/courses/:course_id/topics/:topic_index", TopicView)] Topic { course_id: String, topic_index: usize },
        #[route("/forum", ForumView)] Forum {},
        #[route("/:..segments", NotFound)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    use_user_cache_provider();

    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();
    let navigator = use_navigator();

    let user = cache.snapshot().map(|snapshot| snapshot.user);
    let signed_in = user.is_some();
    let name = user
        .as_ref()
        .map_or_else(|| "Profile".to_owned(), |user| user.name.clone());
    let initials = initials_of(user.as_ref().map_or("U", |user| user.name.as_str()));

    let logout = move |_| {
        // Clearing the persisted session can only fail on disk trouble;
        // the in-memory session is gone either way.
        let _ = ctx.auth().logout();
        ctx.clear_session();
        cache.clear();
        navigator.push(Route::Login {});
    };

    rsx! {
        header { class: "navbar",
            Link { class: "brand", to: Route::Dashboard {}, "Vitaversity" }
            if signed_in {
                nav { class: "nav-links",
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    Link { to: Route::Quiz {}, "Quiz" }
                    Link { to: Route::Courses {}, "Courses" }
                    Link { to: Route::Forum {}, "Forum" }
                }
                div { class: "nav-profile",
                    span { class: "avatar", "{initials}" }
                    span { class: "profile-name", "{name}" }
                    button { class: "logout", onclick: logout, "Logout" }
                }
            }
        }
    }
}

/// Up to two uppercase initials from the display name, as the avatar glyph.
fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        navigator.replace(Route::Login {});
    });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::initials_of;

    #[test]
    fn initials_take_first_letters_of_two_words() {
        assert_eq!(initials_of("Jane Doe"), "JD");
        assert_eq!(initials_of("jane"), "J");
        assert_eq!(initials_of("Ana Maria Silva"), "AM");
    }
}

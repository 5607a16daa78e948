use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::user_cache::UserCache;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();

    let ctx_for_resource = ctx.clone();
    let resource = use_resource(move || {
        let ctx = ctx_for_resource.clone();
        async move {
            let Some(session) = ctx.session() else {
                return Err(ViewError::NotSignedIn);
            };
            ctx.courses().list(&session).await.map_err(ViewError::from)
        }
    });
    let state = view_state_from_resource(&resource);

    let snapshot = cache.snapshot();
    let user = snapshot.as_ref().map(|snap| &snap.user);
    let coins = user.map_or(0, |user| user.coins);
    let badge_count = user.map_or(0, |user| user.badges.len());
    let completed = user.map_or(0, |user| user.completed_courses);

    let body = match state {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(courses) => {
            let cards = map_course_cards(&courses, user);
            rsx! {
                div { class: "course-grid",
                    for card in cards {
                        CourseCard { card }
                    }
                    if courses.is_empty() {
                        p { class: "empty", "No courses available yet." }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h1 { "Courses" }
                p { class: "subtitle", "Complete courses to earn Vitacoins and unlock badges." }
                div { class: "stat-grid",
                    div { class: "stat", "Coins: " span { class: "stat-value", "{coins}" } }
                    div { class: "stat", "Badges: " span { class: "stat-value", "{badge_count}" } }
                    div { class: "stat", "Courses Completed: " span { class: "stat-value", "{completed}" } }
                }
            }
            {body}
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    let course_id = card.id.as_str().to_owned();
    rsx! {
        div { class: "course-card",
            div { class: "course-card-head",
                h3 {
                    Link { to: Route::CourseDetail { course_id: course_id.clone() }, "{card.title}" }
                }
                span { class: "level-pill {card.level_class}", "{card.level_label}" }
            }
            p { class: "course-description", "{card.description}" }
            if card.is_program {
                span { class: "program-pill", "Program" }
            }
            div { class: "course-card-foot",
                span { class: "reward", "Reward: " span { class: "reward-value", "{card.reward_label}" } }
                Link { to: Route::CourseDetail { course_id }, "Open course" }
            }
            div { class: "progress",
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {card.percent}%" }
                }
                div { class: "progress-label", "{card.progress_label}" }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::Link;
use vita_core::model::{CourseId, Topic};
use vita_core::progress::TopicProgress;

use crate::context::AppContext;
use crate::routes::Route;
use crate::user_cache::UserCache;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::reward_on_completion_text;

#[component]
pub fn CourseDetailView(course_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();

    let ctx_for_resource = ctx.clone();
    let id_for_resource = course_id.clone();
    let resource = use_resource(move || {
        let ctx = ctx_for_resource.clone();
        let id = CourseId::from(id_for_resource.as_str());
        async move {
            let Some(session) = ctx.session() else {
                return Err(ViewError::NotSignedIn);
            };
            ctx.courses()
                .get(&session, &id)
                .await
                .map_err(ViewError::from)
        }
    });
    let state = view_state_from_resource(&resource);

    let body = match state {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { "Loading course..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(course) => {
            let course_key = CourseId::from(course_id.as_str());
            let user = cache.snapshot().map(|snap| snap.user);
            let done = user
                .as_ref()
                .map_or(0, |user| user.completed_topic_count(&course_key));
            let progress = TopicProgress::new(done, course.topic_count());
            let reward = reward_on_completion_text(course.level);
            rsx! {
                header { class: "course-hero",
                    h1 { "{course.title}" }
                    if let Some(description) = course.description.as_ref() {
                        p { class: "subtitle", "{description}" }
                    }
                    div { class: "progress",
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {progress.percent()}%" }
                        }
                        div { class: "progress-label", "Progress: {progress.label()}" }
                        div { class: "reward-label", "Reward: {reward}" }
                    }
                }
                ul { class: "topic-list",
                    for (idx, topic) in course.topics.iter().enumerate() {
                        TopicRow {
                            course_id: course_id.clone(),
                            index: idx,
                            topic: topic.clone(),
                            done: user
                                .as_ref()
                                .is_some_and(|user| user.is_topic_complete(&course_key, idx)),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page course-detail", {body} }
    }
}

#[component]
fn TopicRow(course_id: String, index: usize, topic: Topic, done: bool) -> Element {
    let place = index + 1;
    let kind = topic.kind.as_str();
    rsx! {
        li { class: if done { "topic-row done" } else { "topic-row" },
            Link {
                to: Route::Topic { course_id, topic_index: index },
                span { class: "topic-index", "{place}." }
                span { class: "topic-title", "{topic.title}" }
            }
            span { class: "topic-kind", "{kind}" }
            if let Some(minutes) = topic.estimated_minutes {
                span { class: "topic-minutes", "~{minutes} min" }
            }
            span { class: "topic-status", if done { "Completed" } else { "Not completed" } }
        }
    }
}

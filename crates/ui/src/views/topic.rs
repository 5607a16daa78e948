use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;
use vita_core::latch::{ReadingLatch, TEXT_DWELL_SECS, VIDEO_WATCH_SECS};
use vita_core::model::{CourseId, TopicKind};

use crate::context::AppContext;
use crate::routes::Route;
use crate::user_cache::UserCache;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Single-topic reader. Text topics auto-complete once the reader has been
/// near the top, reached the bottom, and kept the page open for the dwell
/// time; video topics complete after a few seconds of playback. The server
/// remains the authority: the mark is just a POST and a profile refresh.
#[component]
pub fn TopicView(course_id: String, topic_index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();

    let mut content_el = use_signal(|| None::<Rc<MountedData>>);
    let mut latch = use_signal(ReadingLatch::new);
    let mut dwell_ok = use_signal(|| false);
    let mut done = use_signal(|| false);
    let mut marking = use_signal(|| false);
    let mut watching = use_signal(|| false);
    let mut note = use_signal(|| None::<String>);

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

    let course_key = CourseId::from(course_id.as_str());
    let already_done = done()
        || cache
            .snapshot()
            .is_some_and(|snap| snap.user.is_topic_complete(&course_key, topic_index));

    let complete = use_callback({
        let ctx = ctx.clone();
        let course_key = course_key.clone();
        move |()| {
            if done() || marking() {
                return;
            }
            if cache
                .snapshot()
                .is_some_and(|snap| snap.user.is_topic_complete(&course_key, topic_index))
            {
                return;
            }
            let course = match resource.value().read().as_ref() {
                Some(Ok(course)) => course.clone(),
                _ => return,
            };
            marking.set(true);
            let ctx = ctx.clone();
            spawn(async move {
                let Some(session) = ctx.session() else {
                    marking.set(false);
                    return;
                };
                match ctx
                    .courses()
                    .complete_topic(&session, &course, topic_index)
                    .await
                {
                    Ok(completion) => {
                        done.set(true);
                        let text = if completion.course_completed {
                            completion
                                .completion_message
                                .unwrap_or_else(|| "Course completed!".to_owned())
                        } else {
                            "Topic completed".to_owned()
                        };
                        note.set(Some(text));
                        cache.refresh(&ctx).await;
                    }
                    Err(err) => note.set(Some(ViewError::from(err).message().to_owned())),
                }
                marking.set(false);
            });
        }
    });

    // Scroll measurement for text topics. The latch is fed from the actual
    // element geometry; a document that fits on one screen satisfies it on
    // the first reading.
    let measure = use_callback(move |()| {
        let Some(el) = content_el() else { return };
        spawn(async move {
            let Ok(offset) = el.get_scroll_offset().await else {
                return;
            };
            let Ok(scroll_size) = el.get_scroll_size().await else {
                return;
            };
            let Ok(rect) = el.get_client_rect().await else {
                return;
            };
            let satisfied = latch
                .write()
                .observe(offset.y, rect.size.height, scroll_size.height);
            if satisfied && dwell_ok() {
                complete.call(());
            }
        });
    });

    // Dwell gate: scrolling to the end only counts after the topic has been
    // open for a few seconds.
    use_future(move || async move {
        tokio::time::sleep(Duration::from_secs(TEXT_DWELL_SECS)).await;
        dwell_ok.set(true);
        if latch.read().is_satisfied() {
            complete.call(());
        }
    });

    let on_play = move |_| {
        if watching() {
            return;
        }
        watching.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(VIDEO_WATCH_SECS)).await;
            complete.call(());
        });
    };

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
        ViewState::Ready(course) => match course.topic(topic_index) {
            None => rsx! {
                p { class: "empty", "Topic not found" }
            },
            Some(topic) => {
                let topic = topic.clone();
                let kind = topic.kind.as_str();
                let content = topic
                    .content
                    .clone()
                    .unwrap_or_else(|| "No content provided.".to_owned());
                rsx! {
                    header { class: "topic-header",
                        Link {
                            class: "back-link",
                            to: Route::CourseDetail { course_id: course_id.clone() },
                            "← Back to course"
                        }
                        h1 { "{topic.title}" }
                        div { class: "topic-pills",
                            span { class: "pill", "{kind}" }
                            if let Some(minutes) = topic.estimated_minutes {
                                span { class: "pill minutes", "~{minutes} min" }
                            }
                        }
                        if let Some(summary) = topic.summary.as_ref() {
                            p { class: "topic-summary", "{summary}" }
                        }
                        if let Some(image_url) = topic.image_url.as_ref() {
                            img { class: "topic-image", src: "{image_url}" }
                        }
                    }

                    if topic.kind == TopicKind::Video {
                        if let Some(content_url) = topic.content_url.as_ref() {
                            div { class: "video-frame",
                                video { controls: true, src: "{content_url}", onplay: on_play }
                            }
                        } else {
                            p { class: "empty", "Video content not available." }
                        }
                    } else {
                        div {
                            class: "topic-content",
                            onmounted: move |event| {
                                content_el.set(Some(event.data()));
                                measure.call(());
                            },
                            onscroll: move |_| measure.call(()),
                            "{content}"
                        }
                    }

                    div { class: "topic-extras",
                        if let Some(snippet) = topic.code_snippet.as_ref() {
                            pre { class: "code-snippet",
                                code { "{snippet}" }
                            }
                        }
                        if !topic.objectives.is_empty() {
                            div { class: "extras-block",
                                div { class: "extras-title", "Objectives" }
                                ul {
                                    for objective in topic.objectives.iter() {
                                        li { "{objective}" }
                                    }
                                }
                            }
                        }
                        if !topic.tips.is_empty() {
                            div { class: "extras-block",
                                div { class: "extras-title", "Tips" }
                                ul {
                                    for tip in topic.tips.iter() {
                                        li { "{tip}" }
                                    }
                                }
                            }
                        }
                        if !topic.resources.is_empty() {
                            div { class: "extras-block",
                                div { class: "extras-title", "Resources" }
                                ul {
                                    for resource in topic.resources.iter() {
                                        li {
                                            a { href: "{resource.url}",
                                                {resource.label.clone().unwrap_or_else(|| resource.url.clone())}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "topic-status-line",
                            "Status: "
                            span { class: if already_done { "status done" } else { "status" },
                                if already_done { "Completed" } else { "Not completed" }
                            }
                        }
                        if let Some(text) = note() {
                            div { class: "form-note", "{text}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page topic-page", {body} }
    }
}

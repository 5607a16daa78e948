use dioxus::prelude::*;
use vita_core::model::{ForumPost, ForumReply};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_datetime;

#[component]
pub fn ForumView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut note = use_signal(|| None::<String>);

    let ctx_for_resource = ctx.clone();
    let mut resource = use_resource(move || {
        let ctx = ctx_for_resource.clone();
        async move {
            let Some(session) = ctx.session() else {
                return Err(ViewError::NotSignedIn);
            };
            ctx.forum().posts(&session).await.map_err(ViewError::from)
        }
    });
    let state = view_state_from_resource(&resource);

    let send = {
        let ctx = ctx.clone();
        move |event: FormEvent| {
            event.prevent_default();
            if sending() {
                return;
            }
            sending.set(true);
            note.set(None);
            let ctx = ctx.clone();
            spawn(async move {
                let Some(session) = ctx.session() else {
                    sending.set(false);
                    return;
                };
                match ctx.forum().create_post(&session, &draft()).await {
                    Ok(_) => {
                        draft.set(String::new());
                        resource.restart();
                    }
                    Err(err) => note.set(Some(ViewError::from(err).message().to_owned())),
                }
                sending.set(false);
            });
        }
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
        ViewState::Ready(posts) => rsx! {
            ul { class: "post-list",
                for post in posts.iter() {
                    PostCard { post: post.clone() }
                }
                if posts.is_empty() {
                    li { class: "empty", "No messages yet. Be the first to start the chat!" }
                }
            }
        },
    };

    rsx! {
        div { class: "page forum-page",
            div { class: "card",
                h2 { "Group Chat" }
                p { class: "subtitle", "Messages appear below. Share your thoughts and help your peers." }
                div { class: "post-scroll", {body} }
                if let Some(text) = note() {
                    div { class: "form-note error", "{text}" }
                }
                form { class: "compose", onsubmit: send,
                    textarea {
                        rows: 3,
                        placeholder: "Type your message...",
                        value: "{draft}",
                        oninput: move |event| draft.set(event.value()),
                    }
                    button { r#type: "submit", disabled: sending(),
                        if sending() { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: ForumPost) -> Element {
    let ctx = use_context::<AppContext>();

    let mut replies = use_signal(|| None::<Vec<ForumReply>>);
    let mut reply_draft = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let initial = post
        .author
        .chars()
        .next()
        .map_or('A', |ch| ch.to_ascii_uppercase());
    let when = format_datetime(post.created_at);

    let load_replies = use_callback({
        let ctx = ctx.clone();
        let post_id = post.id.clone();
        move |()| {
            let ctx = ctx.clone();
            let post_id = post_id.clone();
            spawn(async move {
                let Some(session) = ctx.session() else { return };
                if let Ok(list) = ctx.forum().replies(&session, &post_id).await {
                    replies.set(Some(list));
                }
            });
        }
    });

    // The draft is only cleared on success, so a failed reply keeps the text.
    let send_reply = {
        let ctx = ctx.clone();
        let post_id = post.id.clone();
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            let ctx = ctx.clone();
            let post_id = post_id.clone();
            spawn(async move {
                let Some(session) = ctx.session() else {
                    busy.set(false);
                    return;
                };
                if ctx
                    .forum()
                    .create_reply(&session, &post_id, &reply_draft())
                    .await
                    .is_ok()
                {
                    reply_draft.set(String::new());
                    load_replies.call(());
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        li { class: "post",
            span { class: "avatar", "{initial}" }
            div { class: "post-body",
                div { class: "post-meta", "{post.author} • {when}" }
                div { class: "post-content", "{post.content}" }
                button { class: "replies-toggle", onclick: move |_| load_replies.call(()),
                    if replies().is_some() { "Refresh replies" } else { "View replies" }
                }
                if let Some(list) = replies() {
                    ul { class: "reply-list",
                        for reply in list.iter() {
                            ReplyRow { reply: reply.clone() }
                        }
                    }
                }
                div { class: "reply-compose",
                    input {
                        placeholder: "Write a reply...",
                        value: "{reply_draft}",
                        oninput: move |event| reply_draft.set(event.value()),
                    }
                    button { onclick: send_reply, disabled: busy(), "Reply" }
                }
            }
        }
    }
}

#[component]
fn ReplyRow(reply: ForumReply) -> Element {
    let when = format_datetime(reply.created_at);
    rsx! {
        li { class: "reply",
            div { class: "post-meta", "{reply.author} • {when}" }
            div { class: "reply-content", "{reply.content}" }
        }
    }
}

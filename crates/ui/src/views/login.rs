use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::user_cache::UserCache;
use crate::views::ViewError;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut note = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        note.set(None);
        let ctx = ctx.clone();
        spawn(async move {
            match ctx.auth().login(email().trim(), &password()).await {
                Ok(outcome) => {
                    ctx.set_session(outcome.session);
                    cache.refresh(&ctx).await;
                    note.set(Some("Login successful!".to_owned()));
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => note.set(Some(ViewError::from(err).message().to_owned())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            div { class: "card auth-card",
                h1 { "Login to Vitaversity" }
                form { class: "auth-form", onsubmit: submit,
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                    }
                    button { r#type: "submit", disabled: busy(), "Login" }
                }
                if let Some(text) = note() {
                    div { class: "form-note", "{text}" }
                }
                div { class: "auth-switch",
                    span { "Don't have an account? " }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}

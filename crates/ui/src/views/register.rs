use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut note = use_signal(|| None::<String>);
    let mut registered = use_signal(|| false);
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
            match ctx
                .auth()
                .register(name().trim(), email().trim(), &password(), &confirm())
                .await
            {
                Ok(_) => {
                    registered.set(true);
                    note.set(Some(
                        "Registration successful! 100 Vitacoins credited.".to_owned(),
                    ));
                }
                Err(err) => note.set(Some(ViewError::from(err).message().to_owned())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            div { class: "card auth-card",
                h1 { "Create Your Account" }
                form { class: "auth-form", onsubmit: submit,
                    input {
                        r#type: "text",
                        placeholder: "Full Name",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
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
                    input {
                        r#type: "password",
                        placeholder: "Confirm Password",
                        value: "{confirm}",
                        oninput: move |event| confirm.set(event.value()),
                    }
                    button { r#type: "submit", disabled: busy(), "Register" }
                }
                if let Some(text) = note() {
                    div { class: "form-note",
                        span { class: "form-note-title", "{text}" }
                        if registered() {
                            div { class: "form-note-sub",
                                "Welcome to Vitaversity! Start earning coins by engaging with quizzes and forums."
                            }
                        }
                    }
                }
                div { class: "auth-switch",
                    span { "Already have an account? " }
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use vita_core::model::{AnswerSheet, Question, Quiz, QuizLevel, QuizOutcome};

use crate::context::AppContext;
use crate::user_cache::UserCache;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QUIZ_BADGE_TARGET, badge_glyph, option_class, option_tone, result_text};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();

    let mut level = use_signal(|| QuizLevel::Easy);
    let mut selected = use_signal(|| None::<Quiz>);
    let mut answers = use_signal(AnswerSheet::new);
    let mut outcome = use_signal(|| None::<QuizOutcome>);
    let mut note = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let ctx_for_resource = ctx.clone();
    let resource = use_resource(move || {
        let ctx = ctx_for_resource.clone();
        let level = level();
        async move {
            let Some(session) = ctx.session() else {
                return Err(ViewError::NotSignedIn);
            };
            ctx.quizzes()
                .list(&session, level)
                .await
                .map_err(ViewError::from)
        }
    });
    let state = view_state_from_resource(&resource);

    let submit = {
        let ctx = ctx.clone();
        move |event: FormEvent| {
            event.prevent_default();
            if submitting() || outcome().is_some() {
                return;
            }
            let Some(quiz) = selected() else { return };
            submitting.set(true);
            note.set(None);
            let ctx = ctx.clone();
            spawn(async move {
                let Some(session) = ctx.session() else {
                    submitting.set(false);
                    return;
                };
                match ctx.quizzes().submit(&session, &quiz, &answers()).await {
                    Ok(result) => {
                        outcome.set(Some(result));
                        cache.refresh(&ctx).await;
                    }
                    Err(err) => note.set(Some(ViewError::from(err).message().to_owned())),
                }
                submitting.set(false);
            });
        }
    };

    let snapshot = cache.snapshot();
    let coins = snapshot.as_ref().map_or(0, |snap| snap.user.coins);
    let progress = snapshot.as_ref().map_or(0, |snap| snap.user.quiz_progress);
    let latest_badge = snapshot
        .as_ref()
        .and_then(|snap| snap.user.latest_badge().map(str::to_owned));
    let graded = outcome().is_some();
    let level_name = level().as_str();

    rsx! {
        div { class: "page quiz-page",
            div { class: "card",
                h2 { "Course & Quiz Challenge" }
                div { class: "quiz-coins", "Your Coins: {coins}" }
                div { class: "quiz-progress", "Quiz Progress: {progress}/{QUIZ_BADGE_TARGET}" }
                if let Some(badge) = latest_badge.as_ref() {
                    div { class: "latest-badge",
                        span { "Latest Badge: " }
                        span { class: "badge", "{badge_glyph(badge)} {badge}" }
                    }
                }
                if let Some(text) = note() {
                    div { class: "form-note error", "{text}" }
                }

                if let Some(quiz) = selected() {
                    form { class: "quiz-form", onsubmit: submit,
                        h3 { "{quiz.title}" }
                        for (q_idx, question) in quiz.questions.iter().enumerate() {
                            QuestionCard {
                                index: q_idx,
                                question: question.clone(),
                                answers,
                                graded,
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: submitting() || graded,
                            if graded { "Completed!" } else if submitting() { "Submitting..." } else { "Submit Quiz" }
                        }
                        if let Some(result) = outcome() {
                            div { class: if result.passed { "quiz-result passed" } else { "quiz-result failed" },
                                "{result_text(&result)}"
                            }
                        }
                        button {
                            r#type: "button",
                            class: "quiz-back",
                            onclick: move |_| {
                                selected.set(None);
                                answers.set(AnswerSheet::new());
                                outcome.set(None);
                                note.set(None);
                            },
                            "Back to quiz list"
                        }
                    }
                } else {
                    div { class: "quiz-picker",
                        div { class: "level-select",
                            label { "Level:" }
                            select {
                                value: "{level_name}",
                                onchange: move |event| {
                                    if let Ok(parsed) = event.value().parse::<QuizLevel>() {
                                        level.set(parsed);
                                    }
                                },
                                for choice in QuizLevel::ALL {
                                    option { value: choice.as_str(), "{choice}" }
                                }
                            }
                        }
                        h3 { "Select a Quiz ({level_name}):" }
                        match state {
                            ViewState::Idle => rsx! { p { "Idle" } },
                            ViewState::Loading => rsx! { p { "Loading..." } },
                            ViewState::Error(err) => rsx! { p { class: "error", "{err.message()}" } },
                            ViewState::Ready(quizzes) => rsx! {
                                if quizzes.is_empty() {
                                    p { class: "empty", "No quizzes at this level yet." }
                                } else {
                                    ul { class: "quiz-list",
                                        for quiz in quizzes {
                                            li {
                                                button {
                                                    class: "quiz-pick",
                                                    onclick: {
                                                        let quiz = quiz.clone();
                                                        move |_| {
                                                            selected.set(Some(quiz.clone()));
                                                            answers.set(AnswerSheet::new());
                                                            outcome.set(None);
                                                            note.set(None);
                                                        }
                                                    },
                                                    "{quiz.title}"
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(
    index: usize,
    question: Question,
    answers: Signal<AnswerSheet>,
    graded: bool,
) -> Element {
    rsx! {
        div { class: "question",
            span { class: "question-text", "{question.text}" }
            div { class: "options",
                for (opt_idx, text) in question.options.iter().enumerate() {
                    OptionRow {
                        question_index: index,
                        option_index: opt_idx,
                        text: text.clone(),
                        correct: question.correct_answer,
                        answers,
                        graded,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionRow(
    question_index: usize,
    option_index: usize,
    text: String,
    correct: Option<usize>,
    answers: Signal<AnswerSheet>,
    graded: bool,
) -> Element {
    let mut answers = answers;
    let chosen = answers.read().choice(question_index) == Some(option_index);
    let tone = option_tone(chosen, correct, option_index, graded);

    rsx! {
        label { class: option_class(tone),
            input {
                r#type: "radio",
                name: "q-{question_index}",
                checked: chosen,
                disabled: graded,
                oninput: move |_| answers.write().select(question_index, option_index),
            }
            span { "{text}" }
        }
    }
}

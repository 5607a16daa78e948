use api::VitaApi as _;
use vita_core::model::{
    Course, CourseId, CourseLevel, Question, Quiz, QuizId, QuizLevel, Topic, TopicKind,
};

use super::test_harness::{ViewKind, setup_view_harness};

fn text_topic(title: &str) -> Topic {
    Topic {
        title: title.to_owned(),
        kind: TopicKind::Text,
        content: Some("Read me.".into()),
        content_url: None,
        summary: None,
        estimated_minutes: Some(3),
        image_url: None,
        code_snippet: None,
        objectives: Vec::new(),
        tips: Vec::new(),
        resources: Vec::new(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_the_form() {
    let mut harness = setup_view_harness(ViewKind::Login, false).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Login to Vitaversity"), "missing title in {html}");
    assert!(html.contains("Register"), "missing register link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_profile_stats() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Welcome, Jane!"), "missing welcome in {html}");
    assert!(html.contains("Claim Daily Coins"), "missing claim button in {html}");
    // Registration bonus: 100 coins, rank 1 on a one-entry leaderboard.
    assert!(html.contains("Total Coins:"), "missing coins stat in {html}");
    assert!(html.contains("100"), "missing balance in {html}");
    assert!(html.contains("Registration Bonus"), "missing bonus tx in {html}");
    assert!(html.contains("1. Jane - 100 coins"), "missing leaderboard row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_renders_topic_progress() {
    let mut harness = setup_view_harness(ViewKind::Courses, true).await;
    harness.api.seed_course(Course {
        id: CourseId::from("c1"),
        title: "Rust Basics".into(),
        description: Some("Start here.".into()),
        level: CourseLevel::Beginner,
        is_program: false,
        topics: (0..4).map(|i| text_topic(&format!("Topic {i}"))).collect(),
    });
    let session = harness.session.clone().expect("signed in");
    for topic_index in 0..3 {
        harness
            .api
            .complete_topic(&session, &CourseId::from("c1"), topic_index)
            .await
            .expect("mark topic");
    }

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Rust Basics"), "missing course in {html}");
    assert!(
        html.contains("Topic progress: 3/4 (75%)"),
        "missing progress in {html}"
    );
    assert!(html.contains("30 Vitacoins"), "missing reward in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_the_picker() {
    let mut harness = setup_view_harness(ViewKind::Quiz, true).await;
    harness.api.seed_quiz(Quiz {
        id: QuizId::from("q1"),
        title: "Ownership Basics".into(),
        level: QuizLevel::Easy,
        questions: vec![Question {
            text: "What moves on assignment?".into(),
            options: vec!["Copies".into(), "Ownership".into()],
            correct_answer: Some(1),
        }],
    });

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Select a Quiz (easy):"), "missing picker in {html}");
    assert!(html.contains("Ownership Basics"), "missing quiz in {html}");
    assert!(html.contains("Quiz Progress: 0/5"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn forum_view_smoke_renders_the_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Forum, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Group Chat"), "missing heading in {html}");
    assert!(
        html.contains("No messages yet. Be the first to start the chat!"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_prompts_sign_in_without_a_session() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, false).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Please sign in to continue."),
        "missing sign-in prompt in {html}"
    );
}

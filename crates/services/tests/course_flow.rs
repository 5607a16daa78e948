use std::sync::Arc;

use api::InMemoryApi;
use services::CourseService;
use vita_core::model::{Course, CourseId, CourseLevel, Topic, TopicKind};
use vita_core::time::fixed_clock;

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

fn four_topic_course() -> Course {
    Course {
        id: CourseId::from("c1"),
        title: "Rust Basics".into(),
        description: Some("Start here.".into()),
        level: CourseLevel::Beginner,
        is_program: false,
        topics: (0..4).map(|i| text_topic(&format!("Topic {i}"))).collect(),
    }
}

#[tokio::test]
async fn completing_all_topics_fires_exactly_one_complete_course_call() {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let session = api.seed_account("Jane", "jane@example.com", "secret").await;
    api.seed_course(four_topic_course());

    let courses = CourseService::new(Arc::clone(&api) as Arc<dyn api::VitaApi>);
    let course = courses.get(&session, &CourseId::from("c1")).await.unwrap();

    for topic_index in 0..3 {
        let done = courses
            .complete_topic(&session, &course, topic_index)
            .await
            .unwrap();
        assert!(!done.course_completed);
    }
    assert_eq!(api.complete_course_calls(), 0);

    let done = courses.complete_topic(&session, &course, 3).await.unwrap();
    assert_eq!(done.progress.label(), "4/4 (100%)");
    assert!(done.course_completed);
    assert_eq!(done.completion_message.as_deref(), Some("Course completed!"));
    assert_eq!(api.complete_course_calls(), 1);

    // Beginner course pays 30 coins on top of the 100-coin registration bonus.
    assert_eq!(done.profile.coins, 130);
    assert_eq!(done.profile.completed_courses, 1);
}

#[tokio::test]
async fn three_of_four_topics_shows_seventy_five_percent() {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let session = api.seed_account("Jane", "jane@example.com", "secret").await;
    api.seed_course(four_topic_course());

    let courses = CourseService::new(Arc::clone(&api) as Arc<dyn api::VitaApi>);
    let course = courses.get(&session, &CourseId::from("c1")).await.unwrap();

    let mut last = None;
    for topic_index in 0..3 {
        last = Some(
            courses
                .complete_topic(&session, &course, topic_index)
                .await
                .unwrap(),
        );
    }
    let done = last.expect("three topics marked");
    assert_eq!(done.progress.label(), "3/4 (75%)");
    assert_eq!(done.progress.percent(), 75);
}

#[tokio::test]
async fn marking_the_same_topic_twice_does_not_duplicate_progress() {
    let api = Arc::new(InMemoryApi::new(fixed_clock()));
    let session = api.seed_account("Jane", "jane@example.com", "secret").await;
    api.seed_course(four_topic_course());

    let courses = CourseService::new(Arc::clone(&api) as Arc<dyn api::VitaApi>);
    let course = courses.get(&session, &CourseId::from("c1")).await.unwrap();

    courses.complete_topic(&session, &course, 1).await.unwrap();
    let done = courses.complete_topic(&session, &course, 1).await.unwrap();

    assert_eq!(done.profile.completed_topic_count(&course.id), 1);
    assert_eq!(done.progress.label(), "1/4 (25%)");
}

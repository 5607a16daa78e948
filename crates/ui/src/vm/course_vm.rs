use vita_core::model::{Course, CourseId, CourseLevel, User};
use vita_core::progress::TopicProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub level_label: String,
    pub level_class: &'static str,
    pub is_program: bool,
    pub reward_label: String,
    pub percent: u32,
    pub progress_label: String,
}

#[must_use]
pub fn reward_text(level: CourseLevel) -> String {
    format!("{} Vitacoins", level.reward_coins())
}

#[must_use]
pub fn reward_on_completion_text(level: CourseLevel) -> String {
    format!("{} Vitacoins on completion", level.reward_coins())
}

#[must_use]
pub fn level_class(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Beginner => "level-beginner",
        CourseLevel::Intermediate => "level-intermediate",
        CourseLevel::Advanced => "level-advanced",
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course], user: Option<&User>) -> Vec<CourseCardVm> {
    courses
        .iter()
        .map(|course| {
            let done = user.map_or(0, |user| user.completed_topic_count(&course.id));
            let progress = TopicProgress::new(done, course.topic_count());
            CourseCardVm {
                id: course.id.clone(),
                title: course.title.clone(),
                description: course
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description provided.".to_owned()),
                level_label: course.level.as_str().to_uppercase(),
                level_class: level_class(course.level),
                is_program: course.is_program,
                reward_label: reward_text(course.level),
                percent: progress.percent(),
                progress_label: format!("Topic progress: {}", progress.label()),
            }
        })
        .collect()
}

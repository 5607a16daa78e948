mod course_detail;
mod courses;
mod dashboard;
mod forum;
mod login;
mod quiz;
mod register;
mod state;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course_detail::CourseDetailView;
pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use forum::ForumView;
pub use login::LoginView;
pub use quiz::QuizView;
pub use register::RegisterView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topic::TopicView;

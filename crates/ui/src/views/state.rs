use api::ApiError;
use dioxus::prelude::*;
use services::{
    AuthError, CoinError, CourseServiceError, ForumError, QuizServiceError, UserServiceError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotSignedIn,
    /// A message worth showing verbatim: server rejections and local
    /// validation failures.
    Server(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotSignedIn => "Please sign in to continue.",
            Self::Server(message) => message,
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }

    fn from_api(err: &ApiError) -> Self {
        if err.is_unauthorized() {
            return Self::NotSignedIn;
        }
        match err.server_message() {
            Some(message) => Self::Server(message.to_owned()),
            None => Self::Unknown,
        }
    }
}

impl From<UserServiceError> for ViewError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Api(api) => Self::from_api(&api),
            _ => Self::Unknown,
        }
    }
}

impl From<QuizServiceError> for ViewError {
    fn from(err: QuizServiceError) -> Self {
        match err {
            QuizServiceError::Api(api) => Self::from_api(&api),
            _ => Self::Unknown,
        }
    }
}

impl From<CourseServiceError> for ViewError {
    fn from(err: CourseServiceError) -> Self {
        match err {
            CourseServiceError::Api(api) => Self::from_api(&api),
            _ => Self::Unknown,
        }
    }
}

impl From<CoinError> for ViewError {
    fn from(err: CoinError) -> Self {
        match err {
            CoinError::AlreadyClaimed(message) => Self::Server(message),
            CoinError::Api(api) => Self::from_api(&api),
            _ => Self::Unknown,
        }
    }
}

impl From<ForumError> for ViewError {
    fn from(err: ForumError) -> Self {
        match err {
            ForumError::EmptyContent => Self::Server(err.to_string()),
            ForumError::Api(api) => Self::from_api(&api),
            _ => Self::Unknown,
        }
    }
}

impl From<AuthError> for ViewError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::PasswordMismatch => Self::Server(err.to_string()),
            AuthError::Api(api) => Self::from_api(&api),
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use api::StatusCode;

    use super::*;

    #[test]
    fn server_messages_surface_verbatim() {
        let err = ViewError::from(CoinError::AlreadyClaimed("Already claimed today".into()));
        assert_eq!(err.message(), "Already claimed today");

        let err = ViewError::from(AuthError::PasswordMismatch);
        assert_eq!(err.message(), "Passwords do not match");
    }

    #[test]
    fn unauthorized_maps_to_not_signed_in() {
        let api = ApiError::status(StatusCode::UNAUTHORIZED, "Invalid token");
        let err = ViewError::from(UserServiceError::Api(api));
        assert_eq!(err, ViewError::NotSignedIn);
    }

    #[test]
    fn other_statuses_keep_the_server_text() {
        let api = ApiError::status(StatusCode::BAD_REQUEST, "Course already completed");
        let err = ViewError::from(CourseServiceError::Api(api));
        assert_eq!(err.message(), "Course already completed");
    }
}

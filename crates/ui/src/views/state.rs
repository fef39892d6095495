use dioxus::prelude::*;
use services::{CatalogError, DashboardError, QuizError};

/// What a page can show when its content fails to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The route names a language or lesson the catalog does not have.
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }

    fn unknown(err: &dyn std::error::Error) -> Self {
        log::warn!("content failure: {err}");
        Self::Unknown
    }
}

impl From<DashboardError> for ViewError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::LanguageNotFound(_) | DashboardError::CourseNotFound(_) => {
                Self::NotFound
            }
            other => Self::unknown(&other),
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::LessonNotFound(_) => Self::NotFound,
            other => Self::unknown(&other),
        }
    }
}

impl From<CatalogError> for ViewError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::LanguageNotFound(_) => Self::NotFound,
            other => Self::unknown(&other),
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

/// Snapshot of a loader resource for rendering.
#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    if resource.state().cloned() == UseResourceState::Pending {
        return ViewState::Loading;
    }
    match &*resource.value().read() {
        Some(Ok(data)) => ViewState::Ready(data.clone()),
        Some(Err(err)) => ViewState::Error(*err),
        None => ViewState::Idle,
    }
}

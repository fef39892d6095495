//! Shared error types for the services crate.

use content::ContentError;
use thiserror::Error;

/// Errors emitted while starting a quiz.
///
/// Transitions on a running session never fail; invalid ones are no-ops.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("lesson {0:?} not found")]
    LessonNotFound(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error("language {0:?} not found")]
    LanguageNotFound(String),
    #[error("no course for language {0:?}")]
    CourseNotFound(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("language {0:?} not found")]
    LanguageNotFound(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

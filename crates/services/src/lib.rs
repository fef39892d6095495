#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod dashboard_service;
pub mod error;
pub mod quiz;

pub use lingo_core::Clock;

pub use catalog_service::CatalogService;
pub use dashboard_service::{CourseOverview, DashboardService, LessonTile, UnitBoard};
pub use error::{CatalogError, DashboardError, QuizError};
pub use quiz::{
    AdvanceOutcome, AnswerFeedback, QuizLoopService, QuizPhase, QuizProgress, QuizSession,
};

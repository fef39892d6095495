use std::sync::Arc;

use content::{ContentError, CourseRepository, LanguageRepository};
use lingo_core::model::{Course, Language, LanguageCode, LearnerProgress, LessonId, UnitId};
use lingo_core::unlock::{LessonStatus, SequentialUnlock, UnlockPolicy, lesson_statuses};

use crate::error::DashboardError;

/// Static half of the dashboard: the language and its learning path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOverview {
    pub language: Language,
    pub course: Course,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTile {
    pub id: LessonId,
    pub title: String,
    pub status: LessonStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBoard {
    pub id: UnitId,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonTile>,
}

/// Builds the per-language dashboard from content plus learner progress.
#[derive(Clone)]
pub struct DashboardService {
    languages: Arc<dyn LanguageRepository>,
    courses: Arc<dyn CourseRepository>,
    policy: Arc<dyn UnlockPolicy>,
}

impl DashboardService {
    #[must_use]
    pub fn new(languages: Arc<dyn LanguageRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self {
            languages,
            courses,
            policy: Arc::new(SequentialUnlock::new()),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Arc<dyn UnlockPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Load the language and its course.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::LanguageNotFound` for unknown or malformed keys,
    /// `DashboardError::CourseNotFound` if the language has no course, or
    /// `DashboardError::Content` for other content failures.
    pub async fn load_overview(&self, key: &str) -> Result<CourseOverview, DashboardError> {
        let code =
            LanguageCode::new(key).map_err(|_| DashboardError::LanguageNotFound(key.into()))?;

        let language = match self.languages.get_language(&code).await {
            Ok(language) => language,
            Err(ContentError::NotFound) => return Err(DashboardError::LanguageNotFound(key.into())),
            Err(err) => return Err(err.into()),
        };
        let course = match self.courses.get_course(&code).await {
            Ok(course) => course,
            Err(ContentError::NotFound) => return Err(DashboardError::CourseNotFound(key.into())),
            Err(err) => return Err(err.into()),
        };

        Ok(CourseOverview { language, course })
    }

    /// Lesson tiles with their unlock status, unit by unit.
    #[must_use]
    pub fn board(&self, overview: &CourseOverview, progress: &LearnerProgress) -> Vec<UnitBoard> {
        let path = overview.course.lesson_path();
        let statuses = lesson_statuses(self.policy.as_ref(), &path, progress.completed());
        let mut statuses = statuses.into_iter();

        overview
            .course
            .units()
            .iter()
            .map(|unit| UnitBoard {
                id: unit.id,
                title: unit.title.clone(),
                description: unit.description.clone(),
                lessons: unit
                    .lessons
                    .iter()
                    .map(|entry| {
                        // `lesson_path` lists lessons in the same order as the units.
                        let status = statuses
                            .next()
                            .map_or(LessonStatus::Locked, |(_, status)| status);
                        LessonTile {
                            id: entry.id,
                            title: entry.title.clone(),
                            status,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

use std::sync::Arc;

use content::{ContentError, LessonRepository};
use lingo_core::model::LessonId;

use super::session::QuizSession;
use crate::error::QuizError;

/// Starts quiz sessions from the lesson content provider.
#[derive(Clone)]
pub struct QuizLoopService {
    lessons: Arc<dyn LessonRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonRepository>) -> Self {
        Self { lessons }
    }

    /// Start a new attempt at the given lesson.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LessonNotFound` if there is no content for the lesson,
    /// or `QuizError::Content` for other content failures.
    pub async fn start_quiz(&self, lesson_id: LessonId) -> Result<QuizSession, QuizError> {
        match self.lessons.get_lesson(lesson_id).await {
            Ok(lesson) => {
                log::debug!("starting lesson {lesson_id} with {} questions", lesson.len());
                Ok(QuizSession::new(lesson))
            }
            Err(ContentError::NotFound) => Err(QuizError::LessonNotFound(lesson_id.to_string())),
            Err(err) => Err(QuizError::Content(err)),
        }
    }

    /// Start a quiz from a raw lesson key, such as a route segment.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LessonNotFound` for keys that do not parse as a lesson id
    /// or have no content.
    pub async fn start_quiz_by_key(&self, key: &str) -> Result<QuizSession, QuizError> {
        let lesson_id: LessonId = key
            .parse()
            .map_err(|_| QuizError::LessonNotFound(key.to_string()))?;
        self.start_quiz(lesson_id).await
    }
}

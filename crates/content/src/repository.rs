use async_trait::async_trait;
use lingo_core::model::{Course, Language, LanguageCode, Lesson, LessonId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by content sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Lesson content keyed by lesson id. Packs write through `upsert_lesson`.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Add or replace a lesson.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the lesson cannot be stored.
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<(), ContentError>;

    /// Fetch a lesson by ID.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if missing, or other content errors.
    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, ContentError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Add or replace the course for its language.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the course cannot be stored.
    async fn upsert_course(&self, course: &Course) -> Result<(), ContentError>;

    /// Fetch the course for a language.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if the language has no course.
    async fn get_course(&self, language: &LanguageCode) -> Result<Course, ContentError>;
}

#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// Add a language, or replace the one with the same code in place.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the language cannot be stored.
    async fn upsert_language(&self, language: &Language) -> Result<(), ContentError>;

    /// All languages in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the source cannot be read.
    async fn list_languages(&self) -> Result<Vec<Language>, ContentError>;

    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if the code is unknown.
    async fn get_language(&self, code: &LanguageCode) -> Result<Language, ContentError>;
}

/// Simple in-memory repository implementation for bundled content and tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lessons: Arc<Mutex<HashMap<LessonId, Lesson>>>,
    courses: Arc<Mutex<HashMap<LanguageCode, Course>>>,
    languages: Arc<Mutex<Vec<Language>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<(), ContentError> {
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        guard.insert(lesson.id(), lesson.clone());
        Ok(())
    }

    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, ContentError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        guard.get(&id).cloned().ok_or(ContentError::NotFound)
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn upsert_course(&self, course: &Course) -> Result<(), ContentError> {
        let mut guard = self
            .courses
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        guard.insert(course.language().clone(), course.clone());
        Ok(())
    }

    async fn get_course(&self, language: &LanguageCode) -> Result<Course, ContentError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        guard.get(language).cloned().ok_or(ContentError::NotFound)
    }
}

#[async_trait]
impl LanguageRepository for InMemoryRepository {
    async fn upsert_language(&self, language: &Language) -> Result<(), ContentError> {
        let mut guard = self
            .languages
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        match guard.iter_mut().find(|existing| existing.code() == language.code()) {
            Some(existing) => *existing = language.clone(),
            None => guard.push(language.clone()),
        }
        Ok(())
    }

    async fn list_languages(&self) -> Result<Vec<Language>, ContentError> {
        let guard = self
            .languages
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get_language(&self, code: &LanguageCode) -> Result<Language, ContentError> {
        let guard = self
            .languages
            .lock()
            .map_err(|e| ContentError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|language| language.code() == code)
            .cloned()
            .ok_or(ContentError::NotFound)
    }
}

/// Aggregates content repositories behind trait objects for easy source swapping.
#[derive(Clone)]
pub struct Content {
    pub lessons: Arc<dyn LessonRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub languages: Arc<dyn LanguageRepository>,
}

impl Content {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let lessons: Arc<dyn LessonRepository> = Arc::new(repo.clone());
        let courses: Arc<dyn CourseRepository> = Arc::new(repo.clone());
        let languages: Arc<dyn LanguageRepository> = Arc::new(repo);
        Self {
            lessons,
            courses,
            languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::model::{LessonEntry, Question, QuestionKind, Unit, UnitId};

    fn build_lesson(id: u64) -> Lesson {
        let question = Question::new(
            QuestionKind::Plain,
            "Q",
            vec!["A".into(), "B".into()],
            "A",
            "",
        )
        .unwrap();
        Lesson::new(LessonId::new(id), format!("Lesson {id}"), vec![question]).unwrap()
    }

    fn code(raw: &str) -> LanguageCode {
        LanguageCode::new(raw).unwrap()
    }

    #[tokio::test]
    async fn missing_lesson_is_not_found() {
        let repo = InMemoryRepository::new();
        repo.upsert_lesson(&build_lesson(1)).await.unwrap();

        assert_eq!(repo.get_lesson(LessonId::new(1)).await.unwrap().id(), LessonId::new(1));
        let err = repo.get_lesson(LessonId::new(9)).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound));
    }

    #[tokio::test]
    async fn languages_keep_insertion_order_and_replace_in_place() {
        let repo = InMemoryRepository::new();
        repo.upsert_language(&Language::new(code("oromo"), "Oromo", "Afaan Oromoo", "", ""))
            .await
            .unwrap();
        repo.upsert_language(&Language::new(code("french"), "French", "Français", "", ""))
            .await
            .unwrap();
        repo.upsert_language(&Language::new(code("oromo"), "Oromo", "Afaan Oromoo", "", "35M"))
            .await
            .unwrap();

        let listed = repo.list_languages().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].code().as_str(), "oromo");
        assert_eq!(listed[0].speakers(), "35M");
        assert!(repo.get_language(&code("german")).await.is_err());
    }

    #[tokio::test]
    async fn course_is_keyed_by_language() {
        let repo = InMemoryRepository::new();
        let course = Course::new(
            code("oromo"),
            vec![Unit {
                id: UnitId::new(1),
                title: "Basics 1".into(),
                description: String::new(),
                lessons: vec![LessonEntry {
                    id: LessonId::new(1),
                    title: "Letters & Sounds".into(),
                }],
            }],
        )
        .unwrap();
        repo.upsert_course(&course).await.unwrap();

        let content = Content::from_repository(repo);
        let fetched = content.courses.get_course(&code("oromo")).await.unwrap();
        assert_eq!(fetched.lesson_count(), 1);
        assert!(content.courses.get_course(&code("french")).await.is_err());
    }
}

use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{LanguageCode, LessonId, UnitId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("lesson {0} appears more than once in the course")]
    DuplicateLesson(LessonId),

    #[error("unit {0} appears more than once in the course")]
    DuplicateUnit(UnitId),
}

/// A lesson as listed on the dashboard. Content is looked up separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonEntry {
    pub id: LessonId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonEntry>,
}

/// The learning path for one language: units of lessons in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    language: LanguageCode,
    units: Vec<Unit>,
}

impl Course {
    /// # Errors
    ///
    /// Returns `CourseError` if a unit or lesson id is repeated.
    pub fn new(language: LanguageCode, units: Vec<Unit>) -> Result<Self, CourseError> {
        let mut unit_ids = HashSet::new();
        let mut lesson_ids = HashSet::new();
        for unit in &units {
            if !unit_ids.insert(unit.id) {
                return Err(CourseError::DuplicateUnit(unit.id));
            }
            for lesson in &unit.lessons {
                if !lesson_ids.insert(lesson.id) {
                    return Err(CourseError::DuplicateLesson(lesson.id));
                }
            }
        }
        Ok(Self { language, units })
    }

    #[must_use]
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Every lesson id, unit by unit, in display order.
    #[must_use]
    pub fn lesson_path(&self) -> Vec<LessonId> {
        self.units
            .iter()
            .flat_map(|unit| unit.lessons.iter().map(|lesson| lesson.id))
            .collect()
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.units.iter().map(|unit| unit.lessons.len()).sum()
    }
}

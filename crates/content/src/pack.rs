//! JSON content packs.
//!
//! Records mirror the domain types so a pack can be read with serde and then
//! validated into `lingo_core` models without leaking serialization concerns
//! into the domain layer.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use lingo_core::model::{
    Course, Language, LanguageCode, LearnerProgress, Lesson, LessonEntry, LessonId, Question,
    QuestionKind, SampleWord, Unit, UnitId,
};
use lingo_core::unlock::SequentialUnlock;
use serde::{Deserialize, Serialize};

use crate::repository::{Content, ContentError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    #[serde(default)]
    pub languages: Vec<LanguageRecord>,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    #[serde(default)]
    pub lessons: Vec<LessonRecord>,
    #[serde(default)]
    pub profile: Option<ProfileRecord>,
    #[serde(default)]
    pub unlock: UnlockRecord,
}

/// Lessons that stay open on the dashboard whatever the learner has completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    #[serde(default)]
    pub always_open: Vec<u64>,
}

impl UnlockRecord {
    #[must_use]
    pub fn sequential(&self) -> SequentialUnlock {
        self.always_open
            .iter()
            .copied()
            .map(LessonId::new)
            .fold(SequentialUnlock::new(), SequentialUnlock::with_always_open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub code: String,
    pub name: String,
    pub native_name: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub speakers: String,
    #[serde(default)]
    pub spotlight: Option<String>,
    #[serde(default)]
    pub sample_words: Vec<SampleWordRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleWordRecord {
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub pronunciation: String,
}

/// One learning path, shared by every language listed in `languages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub languages: Vec<String>,
    pub units: Vec<UnitRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub lessons: Vec<LessonEntryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntryRecord {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: u64,
    pub title: String,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Seed values for the learner's dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub total_xp: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub today_xp: u32,
    pub daily_goal: u32,
    #[serde(default)]
    pub completed: Vec<u64>,
}

/// Counts of what a pack installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackSummary {
    pub languages: usize,
    pub courses: usize,
    pub lessons: usize,
}

fn invalid(context: impl std::fmt::Display, err: impl std::fmt::Display) -> ContentError {
    ContentError::Invalid(format!("{context}: {err}"))
}

impl LanguageRecord {
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` if the code is not a valid language code.
    pub fn into_language(self) -> Result<Language, ContentError> {
        let code = LanguageCode::new(self.code.clone())
            .map_err(|e| invalid(format!("language {:?}", self.code), e))?;
        let words = self
            .sample_words
            .into_iter()
            .map(|w| SampleWord {
                word: w.word,
                translation: w.translation,
                pronunciation: w.pronunciation,
            })
            .collect();
        let mut language = Language::new(code, self.name, self.native_name, self.flag, self.speakers)
            .with_sample_words(words);
        if let Some(spotlight) = self.spotlight {
            language = language.with_spotlight(spotlight);
        }
        Ok(language)
    }
}

impl CourseRecord {
    /// One `Course` per listed language.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` for bad language codes or repeated ids.
    pub fn into_courses(self) -> Result<Vec<Course>, ContentError> {
        let units: Vec<Unit> = self
            .units
            .into_iter()
            .map(|unit| Unit {
                id: UnitId::new(unit.id),
                title: unit.title,
                description: unit.description,
                lessons: unit
                    .lessons
                    .into_iter()
                    .map(|entry| LessonEntry {
                        id: LessonId::new(entry.id),
                        title: entry.title,
                    })
                    .collect(),
            })
            .collect();

        self.languages
            .into_iter()
            .map(|raw| {
                let code = LanguageCode::new(raw.clone())
                    .map_err(|e| invalid(format!("course language {raw:?}"), e))?;
                Course::new(code, units.clone()).map_err(|e| invalid(format!("course {raw:?}"), e))
            })
            .collect()
    }
}

impl LessonRecord {
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` if a question or the lesson fails validation.
    pub fn into_lesson(self) -> Result<Lesson, ContentError> {
        let id = LessonId::new(self.id);
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(idx, q)| {
                let question = Question::new(q.kind, q.prompt, q.options, q.correct, q.explanation)
                    .map_err(|e| invalid(format!("lesson {id} question {}", idx + 1), e))?;
                Ok(match q.audio {
                    Some(clip) => question.with_audio_clip(clip),
                    None => question,
                })
            })
            .collect::<Result<Vec<_>, ContentError>>()?;
        Lesson::new(id, self.title, questions).map_err(|e| invalid(format!("lesson {id}"), e))
    }
}

impl ProfileRecord {
    /// Build dashboard counters, treating `today` as the last active day.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` if the profile values are inconsistent.
    pub fn into_progress(self, today: NaiveDate) -> Result<LearnerProgress, ContentError> {
        let completed: BTreeSet<LessonId> = self.completed.into_iter().map(LessonId::new).collect();
        let last_active = (self.streak > 0 || self.today_xp > 0).then_some(today);
        LearnerProgress::restore(
            self.total_xp,
            self.streak,
            self.today_xp,
            self.daily_goal,
            last_active,
            completed,
        )
        .map_err(|e| invalid("profile", e))
    }
}

impl ContentPack {
    /// # Errors
    ///
    /// Returns `ContentError::Serialization` if the JSON does not match the pack shape.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Serialization(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read, or
    /// `ContentError::Serialization` if it is not a valid pack.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ContentError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    /// Validate every record and write the results into `content`.
    ///
    /// Nothing is written unless the whole pack validates.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` for records that fail validation, or any
    /// error reported by the repositories.
    pub async fn install(&self, content: &Content) -> Result<PackSummary, ContentError> {
        let languages = self
            .languages
            .iter()
            .cloned()
            .map(LanguageRecord::into_language)
            .collect::<Result<Vec<_>, _>>()?;
        let mut courses = Vec::new();
        for record in self.courses.iter().cloned() {
            courses.extend(record.into_courses()?);
        }
        let lessons = self
            .lessons
            .iter()
            .cloned()
            .map(LessonRecord::into_lesson)
            .collect::<Result<Vec<_>, _>>()?;

        for language in &languages {
            content.languages.upsert_language(language).await?;
        }
        for course in &courses {
            content.courses.upsert_course(course).await?;
        }
        for lesson in &lessons {
            content.lessons.upsert_lesson(lesson).await?;
        }

        let summary = PackSummary {
            languages: languages.len(),
            courses: courses.len(),
            lessons: lessons.len(),
        };
        log::info!(
            "installed content pack: {} languages, {} courses, {} lessons",
            summary.languages,
            summary.courses,
            summary.lessons
        );
        Ok(summary)
    }
}

impl Content {
    /// In-memory content holding everything in `pack`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` if any record fails validation.
    pub async fn from_pack(pack: &ContentPack) -> Result<Self, ContentError> {
        let content = Self::in_memory();
        pack.install(&content).await?;
        Ok(content)
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("option cannot be empty")]
    EmptyOption,

    #[error("correct option {0:?} is not one of the options")]
    CorrectNotInOptions(String),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// How a question is presented to the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    Plain,
    Translation,
    Audio,
}

/// A single multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    prompt: String,
    options: Vec<String>,
    correct: String,
    explanation: String,
    audio_clip: Option<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are fewer than two
    /// options, an option is blank or repeated, or `correct` is not an option.
    pub fn new(
        kind: QuestionKind,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let correct = correct.into();

        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        for (idx, option) in options.iter().enumerate() {
            if option.is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if options[..idx].contains(option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        // Exact, case-sensitive match.
        if !options.contains(&correct) {
            return Err(QuestionError::CorrectNotInOptions(correct));
        }

        Ok(Self {
            kind,
            prompt,
            options,
            correct,
            explanation: explanation.into(),
            audio_clip: None,
        })
    }

    /// Attach the name of an audio clip (used by `QuestionKind::Audio`).
    #[must_use]
    pub fn with_audio_clip(mut self, clip: impl Into<String>) -> Self {
        self.audio_clip = Some(clip.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn audio_clip(&self) -> Option<&str> {
        self.audio_clip.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct
    }
}

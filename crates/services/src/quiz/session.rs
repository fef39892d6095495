use std::fmt;

use lingo_core::model::{Lesson, LessonCompleted, LessonId, Question};

use super::progress::QuizProgress;

/// Lives at the start of every attempt.
pub const STARTING_LIVES: u32 = 5;

/// XP awarded per correct submission.
pub const XP_PER_CORRECT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Revealed,
    Completed,
}

/// Result shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub selected: String,
    pub correct_option: String,
    pub explanation: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Not in `Revealed`; nothing changed.
    Ignored,
    /// Moved to the question at `index`.
    Next { index: usize },
    /// The lesson is finished. Returned once per attempt.
    Completed(LessonCompleted),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a lesson.
///
/// Operations called outside their valid phase are silent no-ops, so the UI
/// can forward every click without checking state first.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    lesson: Lesson,
    phase: QuizPhase,
    current: usize,
    selected: Option<String>,
    feedback: Option<AnswerFeedback>,
    lives: u32,
    xp_earned: u32,
    correct_count: u32,
}

impl QuizSession {
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            phase: QuizPhase::Answering,
            current: 0,
            selected: None,
            feedback: None,
            lives: STARTING_LIVES,
            xp_earned: 0,
            correct_count: 0,
        }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.lesson.id()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.lesson.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.lesson.question(self.current)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.lesson.len()
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True once the active question has been submitted.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, QuizPhase::Revealed | QuizPhase::Completed)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Zero lives is tracked but does not stop the learner from continuing.
    #[must_use]
    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    #[must_use]
    pub fn xp_earned(&self) -> u32 {
        self.xp_earned
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.current + 1,
            total: self.lesson.len(),
            is_complete: self.is_complete(),
        }
    }

    /// Choose an option for the active question. The last choice wins.
    ///
    /// An empty string clears the selection. Returns `false` when ignored.
    pub fn select_answer(&mut self, option: impl Into<String>) -> bool {
        if self.phase != QuizPhase::Answering {
            log::debug!("select ignored in {:?} for lesson {}", self.phase, self.lesson_id());
            return false;
        }
        let option = option.into();
        self.selected = (!option.is_empty()).then_some(option);
        true
    }

    /// Check the selected option against the active question.
    ///
    /// Returns `None` without touching state when not answering or when nothing
    /// is selected.
    pub fn submit(&mut self) -> Option<&AnswerFeedback> {
        if self.phase != QuizPhase::Answering {
            log::debug!("submit ignored in {:?} for lesson {}", self.phase, self.lesson_id());
            return None;
        }
        let selected = self.selected.clone()?;
        let question = self.lesson.question(self.current)?;

        let correct = question.is_correct(&selected);
        let feedback = AnswerFeedback {
            correct,
            selected,
            correct_option: question.correct().to_string(),
            explanation: question.explanation().to_string(),
        };

        if correct {
            self.correct_count += 1;
            self.xp_earned += XP_PER_CORRECT;
        } else {
            self.lives = self.lives.saturating_sub(1);
        }
        self.phase = QuizPhase::Revealed;
        self.feedback = Some(feedback);
        self.feedback.as_ref()
    }

    /// Move past a revealed question.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase != QuizPhase::Revealed {
            log::debug!("advance ignored in {:?} for lesson {}", self.phase, self.lesson_id());
            return AdvanceOutcome::Ignored;
        }

        self.selected = None;
        if self.is_last_question() {
            self.phase = QuizPhase::Completed;
            log::info!(
                "lesson {} completed: {} correct, {} xp",
                self.lesson_id(),
                self.correct_count,
                self.xp_earned
            );
            return AdvanceOutcome::Completed(LessonCompleted {
                lesson_id: self.lesson_id(),
                xp_earned: self.xp_earned,
                correct_answers: self.correct_count,
            });
        }

        self.current += 1;
        self.feedback = None;
        self.phase = QuizPhase::Answering;
        AdvanceOutcome::Next {
            index: self.current,
        }
    }

    /// Back to the first question with full lives and no score. Valid anywhere.
    pub fn restart(&mut self) {
        self.phase = QuizPhase::Answering;
        self.current = 0;
        self.selected = None;
        self.feedback = None;
        self.lives = STARTING_LIVES;
        self.xp_earned = 0;
        self.correct_count = 0;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("lesson_id", &self.lesson_id())
            .field("questions_len", &self.lesson.len())
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("lives", &self.lives)
            .field("xp_earned", &self.xp_earned)
            .field("correct_count", &self.correct_count)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

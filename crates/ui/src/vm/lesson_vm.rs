use lingo_core::model::{LessonCompleted, QuestionKind};
use services::quiz::STARTING_LIVES;
use services::{AdvanceOutcome, QuizLoopService, QuizPhase, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    Select(String),
    Check,
    Next,
    Restart,
    PlayAudio,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LessonOutcome {
    Continue,
    Completed(LessonCompleted),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub label: String,
    pub selected: bool,
}

/// Result panel for a revealed question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub correct: bool,
    pub headline: &'static str,
    pub detail: String,
    pub explanation: String,
}

/// Everything the lesson page renders for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonScreen {
    pub title: String,
    pub hearts: Vec<bool>,
    pub xp_label: String,
    pub progress_percent: u32,
    pub progress_label: String,
    pub percent_label: String,
    pub phase: QuizPhase,
    pub prompt: String,
    pub has_audio: bool,
    pub options: Vec<AnswerOptionVm>,
    pub can_check: bool,
    pub result: Option<ResultVm>,
    pub next_label: &'static str,
}

pub struct LessonVm {
    session: QuizSession,
}

impl LessonVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.session.lesson().title()
    }

    /// One entry per starting heart, `true` while the heart is still full.
    #[must_use]
    pub fn hearts(&self) -> Vec<bool> {
        (0..STARTING_LIVES).map(|i| i < self.session.lives()).collect()
    }

    #[must_use]
    pub fn xp_label(&self) -> String {
        self.session.xp_earned().to_string()
    }

    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        self.session.progress().percent()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.session.progress();
        format!("Question {} of {}", progress.position, progress.total)
    }

    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}% complete", self.progress_percent())
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.session.current_question().map(|q| q.prompt())
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.session
            .current_question()
            .is_some_and(|q| q.kind() == QuestionKind::Audio)
    }

    #[must_use]
    pub fn options(&self) -> Vec<AnswerOptionVm> {
        let selected = self.session.selected_answer();
        self.session
            .current_question()
            .map(|q| {
                q.options()
                    .iter()
                    .map(|option| AnswerOptionVm {
                        label: option.clone(),
                        selected: selected == Some(option.as_str()),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn can_check(&self) -> bool {
        self.phase() == QuizPhase::Answering && self.session.selected_answer().is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultVm> {
        if self.phase() != QuizPhase::Revealed {
            return None;
        }
        self.session.feedback().map(|feedback| {
            if feedback.correct {
                ResultVm {
                    correct: true,
                    headline: "Correct!",
                    detail: "+10 XP".to_string(),
                    explanation: feedback.explanation.clone(),
                }
            } else {
                ResultVm {
                    correct: false,
                    headline: "Not quite right",
                    detail: format!("The correct answer is: {}", feedback.correct_option),
                    explanation: feedback.explanation.clone(),
                }
            }
        })
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.session.is_last_question() {
            "Complete Lesson"
        } else {
            "Continue"
        }
    }

    #[must_use]
    pub fn screen(&self) -> LessonScreen {
        LessonScreen {
            title: self.title().to_string(),
            hearts: self.hearts(),
            xp_label: self.xp_label(),
            progress_percent: self.progress_percent(),
            progress_label: self.progress_label(),
            percent_label: self.percent_label(),
            phase: self.phase(),
            prompt: self.prompt().unwrap_or_default().to_string(),
            has_audio: self.has_audio(),
            options: self.options(),
            can_check: self.can_check(),
            result: self.result(),
            next_label: self.next_label(),
        }
    }

    pub fn apply(&mut self, intent: LessonIntent) -> LessonOutcome {
        match intent {
            LessonIntent::Select(option) => {
                self.session.select_answer(option);
            }
            LessonIntent::Check => {
                self.session.submit();
            }
            LessonIntent::Next => {
                if let AdvanceOutcome::Completed(event) = self.session.advance() {
                    return LessonOutcome::Completed(event);
                }
            }
            LessonIntent::Restart => self.session.restart(),
            LessonIntent::PlayAudio => self.play_audio(),
        }
        LessonOutcome::Continue
    }

    fn play_audio(&self) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        if question.kind() != QuestionKind::Audio {
            return;
        }
        match question.audio_clip() {
            Some(clip) => log::info!("play audio {clip} for lesson {}", self.session.lesson_id()),
            None => log::info!("play audio for lesson {}", self.session.lesson_id()),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` for unknown or malformed lesson keys.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_lesson(quiz_loop: &QuizLoopService, key: &str) -> Result<LessonVm, ViewError> {
    let session = quiz_loop.start_quiz_by_key(key).await?;
    Ok(LessonVm::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::model::{Lesson, LessonId, Question};

    fn vm() -> LessonVm {
        let questions = vec![
            Question::new(
                QuestionKind::Plain,
                "What does 'Akkam' mean?",
                vec!["Goodbye".into(), "Hello".into()],
                "Hello",
                "'Akkam' means 'Hello'.",
            )
            .unwrap(),
            Question::new(
                QuestionKind::Audio,
                "Listen and select the correct greeting:",
                vec!["Akkam".into(), "Nagaan".into()],
                "Akkam",
                "You heard 'Akkam'.",
            )
            .unwrap()
            .with_audio_clip("akkam.mp3"),
        ];
        let lesson = Lesson::new(LessonId::new(2), "Basic Greetings", questions).unwrap();
        LessonVm::new(QuizSession::new(lesson))
    }

    #[test]
    fn header_labels_track_progress() {
        let mut vm = vm();
        assert_eq!(vm.progress_label(), "Question 1 of 2");
        assert_eq!(vm.percent_label(), "50% complete");
        assert_eq!(vm.hearts(), vec![true; 5]);
        assert_eq!(vm.next_label(), "Continue");
        assert!(!vm.has_audio());

        vm.apply(LessonIntent::Select("Goodbye".into()));
        vm.apply(LessonIntent::Check);
        assert_eq!(vm.hearts(), vec![true, true, true, true, false]);
        vm.apply(LessonIntent::Next);

        assert_eq!(vm.progress_label(), "Question 2 of 2");
        assert_eq!(vm.percent_label(), "100% complete");
        assert_eq!(vm.next_label(), "Complete Lesson");
        assert!(vm.has_audio());
    }

    #[test]
    fn check_requires_a_selection() {
        let mut vm = vm();
        assert!(!vm.can_check());
        vm.apply(LessonIntent::Select("Hello".into()));
        assert!(vm.can_check());
        assert!(vm.options().iter().any(|o| o.selected && o.label == "Hello"));
        vm.apply(LessonIntent::Select(String::new()));
        assert!(!vm.can_check());
    }

    #[test]
    fn result_panel_texts() {
        let mut vm = vm();
        assert_eq!(vm.result(), None);
        vm.apply(LessonIntent::Select("Hello".into()));
        vm.apply(LessonIntent::Check);
        let result = vm.result().unwrap();
        assert!(result.correct);
        assert_eq!(result.headline, "Correct!");
        assert_eq!(result.detail, "+10 XP");
        assert_eq!(vm.xp_label(), "10");

        vm.apply(LessonIntent::Next);
        vm.apply(LessonIntent::Select("Nagaan".into()));
        vm.apply(LessonIntent::Check);
        let result = vm.result().unwrap();
        assert!(!result.correct);
        assert_eq!(result.detail, "The correct answer is: Akkam");
    }

    #[test]
    fn completing_returns_the_event_once() {
        let mut vm = vm();
        for answer in ["Hello", "Akkam"] {
            vm.apply(LessonIntent::Select(answer.into()));
            vm.apply(LessonIntent::Check);
            vm.apply(LessonIntent::PlayAudio);
            let outcome = vm.apply(LessonIntent::Next);
            if answer == "Akkam" {
                assert_eq!(
                    outcome,
                    LessonOutcome::Completed(LessonCompleted {
                        lesson_id: LessonId::new(2),
                        xp_earned: 20,
                        correct_answers: 2,
                    })
                );
            }
        }
        assert_eq!(vm.apply(LessonIntent::Next), LessonOutcome::Continue);
        assert_eq!(vm.result(), None);

        vm.apply(LessonIntent::Restart);
        assert_eq!(vm.phase(), QuizPhase::Answering);
        assert_eq!(vm.xp_label(), "0");
    }
}

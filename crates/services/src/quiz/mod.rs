mod progress;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use session::{
    AdvanceOutcome, AnswerFeedback, QuizPhase, QuizSession, STARTING_LIVES, XP_PER_CORRECT,
};
pub use workflow::QuizLoopService;

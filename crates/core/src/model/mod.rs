mod completion;
mod course;
mod ids;
mod language;
mod lesson;
mod progress;
mod question;

pub use ids::{LanguageCode, LanguageCodeError, LessonId, ParseIdError, UnitId};

pub use completion::LessonCompleted;
pub use course::{Course, CourseError, LessonEntry, Unit};
pub use language::{Language, SampleWord};
pub use lesson::{Lesson, LessonError};
pub use progress::{CompletionNotice, LearnerProgress, ProgressError};
pub use question::{Question, QuestionError, QuestionKind};

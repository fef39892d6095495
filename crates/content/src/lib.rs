#![forbid(unsafe_code)]

pub mod builtin;
pub mod pack;
pub mod repository;

pub use builtin::{builtin_pack, load_builtin};
pub use pack::{ContentPack, PackSummary, ProfileRecord, UnlockRecord};
pub use repository::{
    Content, ContentError, CourseRepository, InMemoryRepository, LanguageRepository,
    LessonRepository,
};

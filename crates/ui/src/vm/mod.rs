mod dashboard_vm;
mod language_vm;
mod lesson_vm;

pub use dashboard_vm::{
    DailyGoalVm, DashboardVm, LessonButtonVm, SampleWordVm, ToastVm, UnitVm, completion_toast,
    map_dashboard,
};
pub use language_vm::{LanguageCardVm, map_language_cards};
pub use lesson_vm::{
    AnswerOptionVm, LessonIntent, LessonOutcome, LessonScreen, LessonVm, ResultVm, start_lesson,
};

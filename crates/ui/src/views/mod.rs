mod dashboard;
mod home;
mod languages;
mod lesson;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use languages::LanguagesView;
pub use lesson::LessonView;
pub use state::{ViewError, ViewState, view_state_from_resource};

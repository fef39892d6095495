use std::sync::{Arc, Mutex};

use lingo_core::model::{LanguageCode, LearnerProgress};
use services::{CatalogService, Clock, DashboardService, QuizLoopService};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn initial_progress(&self) -> LearnerProgress;
    fn start_language(&self) -> Option<LanguageCode>;

    fn catalog(&self) -> Arc<CatalogService>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    initial_progress: LearnerProgress,
    start_language_once: Arc<Mutex<Option<LanguageCode>>>,

    catalog: Arc<CatalogService>,
    dashboard: Arc<DashboardService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            initial_progress: app.initial_progress(),
            start_language_once: Arc::new(Mutex::new(app.start_language())),
            catalog: app.catalog(),
            dashboard: app.dashboard(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Progress the learner starts the run with.
    #[must_use]
    pub fn initial_progress(&self) -> LearnerProgress {
        self.initial_progress.clone()
    }

    /// The launch language, handed out once so returning home does not
    /// bounce back into the dashboard.
    #[must_use]
    pub fn take_start_language(&self) -> Option<LanguageCode> {
        self.start_language_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

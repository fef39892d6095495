use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use content::{Content, builtin_pack, load_builtin};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lingo_core::model::{CompletionNotice, LanguageCode, LearnerProgress};
use lingo_core::time::fixed_clock;
use services::{CatalogService, Clock, DashboardService, QuizLoopService};

use crate::app::{provide_learner_state, use_completion_notice, use_learner_progress};
use crate::context::{UiApp, build_app_context};
use crate::views::lesson::LessonTestHandles;
use crate::views::{DashboardView, HomeView, LanguagesView, LessonView};

#[derive(Clone)]
struct TestApp {
    progress: LearnerProgress,
    start_language: Option<LanguageCode>,
    catalog: Arc<CatalogService>,
    dashboard: Arc<DashboardService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn initial_progress(&self) -> LearnerProgress {
        self.progress.clone()
    }

    fn start_language(&self) -> Option<LanguageCode> {
        self.start_language.clone()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Languages,
    Dashboard(String),
    Lesson(String, String),
}

/// Shared learner signals, captured once the harness root has provided them.
#[derive(Clone, Default)]
pub struct LearnerHandles {
    progress: Rc<RefCell<Option<Signal<LearnerProgress>>>>,
    notice: Rc<RefCell<Option<Signal<Option<CompletionNotice>>>>>,
}

impl LearnerHandles {
    pub fn progress(&self) -> Signal<LearnerProgress> {
        (*self.progress.borrow()).expect("progress registered")
    }

    pub fn notice(&self) -> Signal<Option<CompletionNotice>> {
        (*self.notice.borrow()).expect("notice registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    learner: LearnerHandles,
    lesson_handles: Option<LessonTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    provide_learner_state(&ctx);
    let progress = use_learner_progress();
    let notice = use_completion_notice();
    use_hook(|| {
        *props.learner.progress.borrow_mut() = Some(progress);
        *props.learner.notice.borrow_mut() = Some(notice);
    });
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.lesson_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

/// Mirrors the app's dashboard path so lesson completion can navigate.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/learn/:language")]
    Learn { language: String },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Languages => rsx! { LanguagesView {} },
        ViewKind::Dashboard(language) => rsx! { DashboardView { language } },
        ViewKind::Lesson(language, lesson) => rsx! { LessonView { language, lesson } },
    }
}

#[component]
fn Learn(language: String) -> Element {
    rsx! { DashboardView { language } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub learner: LearnerHandles,
    pub lesson_handles: Option<LessonTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// First render, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_pending().await;
    }

    pub async fn drive_pending(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// The demo learner from the built-in pack.
pub fn demo_progress() -> LearnerProgress {
    builtin_pack()
        .expect("builtin pack")
        .profile
        .expect("builtin profile")
        .into_progress(fixed_clock().today())
        .expect("builtin progress")
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let content = load_builtin().await.expect("load builtin");
    setup_view_harness_with_content(view, content, demo_progress(), None)
}

pub fn setup_view_harness_with_content(
    view: ViewKind,
    content: Content,
    progress: LearnerProgress,
    start_language: Option<LanguageCode>,
) -> ViewHarness {
    let catalog = Arc::new(CatalogService::new(Arc::clone(&content.languages)));
    let dashboard = Arc::new(DashboardService::new(
        Arc::clone(&content.languages),
        Arc::clone(&content.courses),
    ));
    let quiz_loop = Arc::new(QuizLoopService::new(Arc::clone(&content.lessons)));

    let lesson_handles = match view {
        ViewKind::Lesson(..) => Some(LessonTestHandles::default()),
        _ => None,
    };
    let learner = LearnerHandles::default();

    let app = Arc::new(TestApp {
        progress,
        start_language,
        catalog,
        dashboard,
        quiz_loop,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            learner: learner.clone(),
            lesson_handles: lesson_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        learner,
        lesson_handles,
    }
}

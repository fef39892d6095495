use std::sync::Arc;

use content::{Content, ContentError, LanguageRepository, load_builtin};
use lingo_core::model::{Language, LanguageCode, LessonId};
use lingo_core::time::fixed_clock;

use super::test_harness::{
    ViewHarness, ViewKind, demo_progress, drive_dom, setup_view_harness,
    setup_view_harness_with_content,
};
use crate::vm::LessonIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_catalog_stats() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Oromo Lingo Hub"), "missing title in {html}");
    assert!(html.contains("Start Learning"), "missing cta in {html}");
    assert!(html.contains("Languages Available"), "missing stats in {html}");
    assert!(html.contains(">6<"), "missing language count in {html}");
    assert!(html.contains("Discover the Oromo Language"), "missing spotlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_opens_configured_language_once() {
    let mut harness = setup_view_harness_with_content(
        ViewKind::Home,
        load_builtin().await.expect("load builtin"),
        demo_progress(),
        Some(LanguageCode::new("oromo").unwrap()),
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Basics 1"), "did not open the dashboard: {html}");
    assert!(!html.contains("Why Choose Oromo Lingo Hub?"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn languages_view_smoke_lists_catalog_with_disabled_continue() {
    let mut harness = setup_view_harness(ViewKind::Languages).await;
    harness.settle().await;
    let html = harness.render();
    for name in ["Oromo", "Spanish", "French", "German", "Italian", "Portuguese"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("Afaan Oromoo"), "missing native name in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("disabled"), "continue should start disabled in {html}");
    assert!(!html.contains("Featured:"), "spotlight shown without selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_demo_learner() {
    let mut harness = setup_view_harness(ViewKind::Dashboard("oromo".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Unit 1"), "missing unit heading in {html}");
    assert!(html.contains("Basics 1"), "missing unit title in {html}");
    assert!(html.contains("Phrases"), "missing third unit in {html}");
    assert!(html.contains("1250"), "missing total xp in {html}");
    assert!(html.contains("30 XP earned"), "missing daily goal in {html}");
    assert!(html.contains("20 XP to reach your daily goal"), "missing remaining in {html}");
    assert!(html.contains("Sample Words"), "missing sample words in {html}");
    assert!(html.contains("Galatomaa"), "missing sample word in {html}");
    assert!(html.contains("completed 2 lessons"), "missing achievement in {html}");
    assert_eq!(html.matches("lesson-btn--completed").count(), 2, "{html}");
    assert_eq!(html.matches("lesson-btn--current").count(), 1, "{html}");
    assert_eq!(html.matches("lesson-btn--locked").count(), 12, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_hides_sample_words_without_any() {
    let mut harness = setup_view_harness(ViewKind::Dashboard("french".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("French"), "missing language name in {html}");
    assert!(!html.contains("Sample Words"), "unexpected sample words in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_reports_unknown_language() {
    let mut harness = setup_view_harness(ViewKind::Dashboard("klingon".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Language not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reports_missing_lessons() {
    for key in ["4", "greetings"] {
        let mut harness =
            setup_view_harness(ViewKind::Lesson("oromo".into(), key.into())).await;
        harness.settle().await;
        let html = harness.render();
        assert!(html.contains("Lesson not found"), "missing not found for {key} in {html}");
        assert!(html.contains("Back to Dashboard"), "missing back button in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_runs_greetings_to_completion() {
    let mut harness = setup_view_harness(ViewKind::Lesson("oromo".into(), "2".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Basic Greetings"), "missing title in {html}");
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("33% complete"), "missing percent in {html}");
    assert!(html.contains("Check Answer"), "missing check in {html}");
    assert_eq!(html.matches("heart--full").count(), 5, "{html}");

    let handles = harness.lesson_handles.clone().expect("lesson handles");
    let dispatch = handles.dispatch();
    let step = |harness: &mut ViewHarness, intent: LessonIntent| {
        harness.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut harness.dom);
        harness.render()
    };

    step(&mut harness, LessonIntent::Select("Hello".into()));
    let html = step(&mut harness, LessonIntent::Check);
    assert!(html.contains("Correct!"), "missing correct in {html}");
    assert!(html.contains("+10 XP"), "missing xp in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");

    step(&mut harness, LessonIntent::Next);
    step(&mut harness, LessonIntent::Select("Goodbye".into()));
    let html = step(&mut harness, LessonIntent::Check);
    assert!(html.contains("Not quite right"), "missing wrong in {html}");
    assert!(html.contains("Akkam ganama"), "missing correct option in {html}");
    assert_eq!(html.matches("heart--empty").count(), 1, "{html}");

    let html = step(&mut harness, LessonIntent::Next);
    assert!(html.contains("Play Audio"), "missing audio button in {html}");
    step(&mut harness, LessonIntent::PlayAudio);
    step(&mut harness, LessonIntent::Select("Akkam".into()));
    let html = step(&mut harness, LessonIntent::Check);
    assert!(html.contains("Complete Lesson"), "missing complete in {html}");

    step(&mut harness, LessonIntent::Next);
    let progress = harness.learner.progress();
    let notice = harness.learner.notice();
    let (total_xp, today_xp, completed) = harness.dom.in_runtime(|| {
        let progress = progress.peek();
        (
            progress.total_xp(),
            progress.today_xp(fixed_clock().today()),
            progress.is_completed(LessonId::new(2)),
        )
    });
    assert_eq!(total_xp, 1270);
    assert_eq!(today_xp, 50);
    assert!(completed);
    let merged = harness.dom.in_runtime(|| notice.peek().clone()).expect("notice");
    assert_eq!(merged.xp_earned, 20);
    assert_eq!(merged.correct_answers, 2);
    assert!(merged.reached_daily_goal);

    harness.drive_pending().await;
    let html = harness.render();
    assert!(html.contains("Lesson Completed!"), "missing toast in {html}");
    assert!(
        html.contains("You earned 20 XP and got 2 questions correct!"),
        "missing toast text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_restart_resets_hearts_and_xp() {
    let mut harness = setup_view_harness(ViewKind::Lesson("oromo".into(), "3".into())).await;
    harness.settle().await;
    let handles = harness.lesson_handles.clone().expect("lesson handles");
    let dispatch = handles.dispatch();

    for intent in [LessonIntent::Select("Mother".into()), LessonIntent::Check] {
        harness.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut harness.dom);
    }
    let html = harness.render();
    assert_eq!(html.matches("heart--empty").count(), 1, "{html}");
    assert!(html.contains("The correct answer is: Father"), "{html}");

    harness.dom.in_runtime(|| dispatch.call(LessonIntent::Restart));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert_eq!(html.matches("heart--full").count(), 5, "{html}");
    assert!(html.contains("Question 1 of 2"), "{html}");

    let vm = handles.vm();
    let lives = harness
        .dom
        .in_runtime(|| vm.peek().as_ref().map(|vm| vm.session().lives()));
    assert_eq!(lives, Some(5));
}

struct FailingLanguages;

#[async_trait::async_trait]
impl LanguageRepository for FailingLanguages {
    async fn upsert_language(&self, _language: &Language) -> Result<(), ContentError> {
        Err(ContentError::Connection("fail".to_string()))
    }

    async fn list_languages(&self) -> Result<Vec<Language>, ContentError> {
        Err(ContentError::Connection("fail".to_string()))
    }

    async fn get_language(&self, _code: &LanguageCode) -> Result<Language, ContentError> {
        Err(ContentError::Connection("fail".to_string()))
    }
}

async fn failing_content() -> Content {
    let builtin = load_builtin().await.expect("load builtin");
    Content {
        languages: Arc::new(FailingLanguages),
        ..builtin
    }
}

#[tokio::test(flavor = "current_thread")]
async fn languages_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_content(
        ViewKind::Languages,
        failing_content().await,
        demo_progress(),
        None,
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_content(
        ViewKind::Dashboard("oromo".into()),
        failing_content().await,
        demo_progress(),
        None,
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(!html.contains("Language not found"), "error reported as missing in {html}");
}

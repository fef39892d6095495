use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::app::{use_completion_notice, use_learner_progress};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, LessonButtonVm, UnitVm, completion_toast, map_dashboard};

#[component]
pub fn DashboardView(language: String) -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();
    let progress = use_learner_progress();
    let mut notice = use_completion_notice();

    let key = language.clone();
    let resource = use_resource(use_reactive!(|(key,)| {
        let dashboard = dashboard.clone();
        async move { Ok::<_, ViewError>(dashboard.load_overview(&key).await?) }
    }));
    let state = view_state_from_resource(&resource);
    let vm = match &state {
        ViewState::Ready(overview) => {
            let progress = progress.read();
            let boards = ctx.dashboard().board(overview, &progress);
            Some(map_dashboard(overview, &boards, &progress, ctx.clock().today()))
        }
        _ => None,
    };
    let toast = notice.read().as_ref().map(completion_toast);

    rsx! {
        div { class: "page dashboard-page",
            match (state, vm) {
                (ViewState::Idle, _) => rsx! {
                    p { "Idle" }
                },
                (ViewState::Loading, _) => rsx! {
                    p { "Loading..." }
                },
                (ViewState::Error(ViewError::NotFound), _) => rsx! {
                    div { class: "not-found",
                        h1 { "Language not found" }
                        Link { class: "btn btn-primary", to: Route::Languages {}, "Choose a Language" }
                    }
                },
                (ViewState::Error(err), _) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                (ViewState::Ready(_), Some(vm)) => rsx! {
                    DashboardBody { language: language.clone(), vm }
                },
                (ViewState::Ready(_), None) => rsx! {},
            }

            if let Some(toast) = toast {
                div { class: "toast", role: "status",
                    div { class: "toast__body",
                        strong { class: "toast__title", "{toast.title}" }
                        p { class: "toast__description", "{toast.description}" }
                    }
                    button {
                        class: "toast__dismiss",
                        id: "toast-dismiss",
                        r#type: "button",
                        onclick: move |_| notice.set(None),
                        "Dismiss"
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardBody(language: String, vm: DashboardVm) -> Element {
    let goal = vm.daily_goal.clone();

    rsx! {
        header { class: "dashboard-header",
            div { class: "dashboard-header__brand",
                h1 { "Oromo Lingo Hub" }
                span { class: "badge", "{vm.language_name}" }
            }
            div { class: "dashboard-header__stats",
                span { class: "stat-streak", "🔥 {vm.streak}" }
                span { class: "stat-xp", "🏆 {vm.total_xp}" }
            }
        }

        div { class: "dashboard-layout",
            div { class: "dashboard-path",
                for unit in vm.units {
                    UnitCard { key: "{unit.heading}", language: language.clone(), unit }
                }
            }

            aside { class: "dashboard-sidebar",
                div { class: "card daily-goal",
                    h3 { "Daily Goal" }
                    div { class: "daily-goal__labels",
                        span { "{goal.earned_label}" }
                        span { "{goal.goal_label}" }
                    }
                    div { class: "progress",
                        div { class: "progress__bar", style: "width: {goal.percent}%" }
                    }
                    p { class: "daily-goal__remaining", "{goal.remaining_label}" }
                }

                if !vm.sample_words.is_empty() {
                    div { class: "card sample-words",
                        h3 { "Sample Words" }
                        for word in vm.sample_words {
                            div { class: "sample-word",
                                div { class: "sample-word__word", "{word.word}" }
                                div { class: "sample-word__translation", "{word.translation}" }
                                div { class: "sample-word__pronunciation", "{word.pronunciation}" }
                            }
                        }
                    }
                }

                div { class: "card achievement",
                    h3 { "Great Progress!" }
                    p { "{vm.achievement_text}" }
                }
            }
        }
    }
}

#[component]
fn UnitCard(language: String, unit: UnitVm) -> Element {
    rsx! {
        section { class: "card unit",
            h2 { "{unit.heading}" }
            h3 { class: "unit__title", "{unit.title}" }
            p { class: "unit__description", "{unit.description}" }
            div { class: "unit__lessons",
                for lesson in unit.lessons {
                    LessonButton { key: "{lesson.id}", language: language.clone(), lesson }
                }
            }
        }
    }
}

#[component]
fn LessonButton(language: String, lesson: LessonButtonVm) -> Element {
    let navigator = use_navigator();
    let locked = lesson.is_locked();
    let id = lesson.id;

    rsx! {
        button {
            class: "{lesson.class()}",
            id: "lesson-{lesson.id}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| {
                if !locked {
                    let _ = navigator.push(Route::Lesson {
                        language: language.clone(),
                        lesson: id.to_string(),
                    });
                }
            },
            span { class: "lesson-btn__icon", "{lesson.icon()}" }
            "{lesson.title}"
        }
    }
}

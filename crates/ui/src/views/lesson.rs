use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::QuizPhase;

use crate::app::{use_completion_notice, use_learner_progress};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AnswerOptionVm, LessonIntent, LessonOutcome, LessonScreen, LessonVm, start_lesson};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonView(language: String, lesson: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let clock = ctx.clock();
    let mut progress = use_learner_progress();
    let mut notice = use_completion_notice();

    let vm = use_signal(|| None::<LessonVm>);

    let key = lesson.clone();
    let resource = use_resource(use_reactive!(|(key,)| {
        let quiz_loop = quiz_loop.clone();
        let mut vm = vm;
        async move {
            let started = start_lesson(&quiz_loop, &key).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    }));
    let state = view_state_from_resource(&resource);

    let dispatch_intent = {
        let language = language.clone();
        use_callback(move |intent: LessonIntent| {
            let mut vm = vm;
            let outcome = match vm.write().as_mut() {
                Some(vm) => vm.apply(intent),
                None => return,
            };
            if let LessonOutcome::Completed(event) = outcome {
                let merged = progress.write().record_completion(event, clock.today());
                log::info!(
                    "lesson {} merged: streak {}, daily goal reached {}",
                    merged.lesson_id,
                    merged.streak,
                    merged.reached_daily_goal
                );
                notice.set(Some(merged));
                let _ = navigator.push(Route::Dashboard {
                    language: language.clone(),
                });
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_back = use_callback(move |_: MouseEvent| {
        let _ = navigator.push(Route::Dashboard {
            language: language.clone(),
        });
    });

    let screen = vm.read().as_ref().map(LessonVm::screen);

    rsx! {
        div { class: "page lesson-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "not-found",
                        h1 { "Lesson not found" }
                        button {
                            class: "btn btn-primary",
                            id: "lesson-back",
                            r#type: "button",
                            onclick: move |evt| on_back.call(evt),
                            "Back to Dashboard"
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
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
                ViewState::Ready(()) => match screen {
                    Some(screen) => rsx! {
                        LessonHeader { screen: screen.clone(), on_back }
                        LessonCard { screen, on_intent: dispatch_intent }
                    },
                    None => rsx! {
                        p { "Loading..." }
                    },
                },
            }
        }
    }
}

#[component]
fn LessonHeader(screen: LessonScreen, on_back: EventHandler<MouseEvent>) -> Element {
    rsx! {
        header { class: "lesson-header",
            div { class: "lesson-header__row",
                div { class: "lesson-header__left",
                    button {
                        class: "btn btn-ghost",
                        id: "lesson-back",
                        r#type: "button",
                        onclick: move |evt| on_back.call(evt),
                        "← Back"
                    }
                    span { class: "badge", "{screen.title}" }
                }
                div { class: "lesson-header__right",
                    div { class: "hearts",
                        for (index, full) in screen.hearts.iter().copied().enumerate() {
                            span {
                                key: "{index}",
                                class: if full { "heart heart--full" } else { "heart heart--empty" },
                                "♥"
                            }
                        }
                    }
                    span { class: "stat-xp", "🏆 {screen.xp_label}" }
                }
            }
            div { class: "progress",
                div { class: "progress__bar", style: "width: {screen.progress_percent}%" }
            }
            div { class: "lesson-header__labels",
                span { "{screen.progress_label}" }
                span { "{screen.percent_label}" }
            }
        }
    }
}

#[component]
fn LessonCard(screen: LessonScreen, on_intent: Callback<LessonIntent>) -> Element {
    let result = screen.result.clone();

    rsx! {
        div { class: "card lesson-card",
            match (screen.phase, result) {
                (QuizPhase::Revealed, Some(result)) => rsx! {
                    div { class: if result.correct { "result result--correct" } else { "result result--wrong" },
                        h3 { "{result.headline}" }
                        p { "{result.detail}" }
                    }
                    div { class: "result__explanation",
                        p { "{result.explanation}" }
                    }
                    div { class: "result__actions",
                        button {
                            class: "btn btn-primary",
                            id: "lesson-next",
                            r#type: "button",
                            onclick: move |_| on_intent.call(LessonIntent::Next),
                            "{screen.next_label}"
                        }
                        button {
                            class: "btn btn-secondary",
                            id: "lesson-restart",
                            r#type: "button",
                            onclick: move |_| on_intent.call(LessonIntent::Restart),
                            "Restart"
                        }
                    }
                },
                (QuizPhase::Completed, _) => rsx! {
                    p { class: "lesson-complete", "Lesson complete!" }
                },
                _ => rsx! {
                    div { class: "question",
                        h2 { "{screen.prompt}" }
                        if screen.has_audio {
                            button {
                                class: "btn btn-secondary",
                                id: "lesson-audio",
                                r#type: "button",
                                onclick: move |_| on_intent.call(LessonIntent::PlayAudio),
                                "🔊 Play Audio"
                            }
                        }
                    }
                    div { class: "options",
                        for option in screen.options.iter().cloned() {
                            OptionButton { key: "{option.label}", option, on_intent }
                        }
                    }
                    div { class: "question__actions",
                        button {
                            class: "btn btn-primary",
                            id: "lesson-check",
                            r#type: "button",
                            disabled: !screen.can_check,
                            onclick: move |_| on_intent.call(LessonIntent::Check),
                            "Check Answer"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn OptionButton(option: AnswerOptionVm, on_intent: Callback<LessonIntent>) -> Element {
    let label = option.label.clone();

    rsx! {
        button {
            class: if option.selected { "option option--selected" } else { "option" },
            r#type: "button",
            onclick: move |_| on_intent.call(LessonIntent::Select(label.clone())),
            "{option.label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<LessonVm>>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>, vm: Signal<Option<LessonVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<LessonVm>> {
        (*self.vm.borrow()).expect("lesson vm registered")
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LanguageCardVm, map_language_cards};

#[component]
pub fn LanguagesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let mut selected = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let languages = catalog.list_languages().await.map_err(ViewError::from)?;
            Ok(map_language_cards(&languages))
        }
    });
    let state = view_state_from_resource(&resource);
    let selected_code = selected.read().clone();
    let featured = match (&state, selected_code.as_deref()) {
        (ViewState::Ready(cards), Some(code)) => cards
            .iter()
            .find(|card| card.code == code)
            .and_then(|card| {
                card.spotlight
                    .clone()
                    .map(|text| (card.spotlight_title(), text))
            }),
        _ => None,
    };

    let on_continue = move |_: MouseEvent| {
        if let Some(language) = selected() {
            let _ = navigator.push(Route::Dashboard { language });
        }
    };

    rsx! {
        div { class: "page languages-page",
            header { class: "languages-header",
                h1 { "Oromo Lingo Hub" }
                p { "Choose a language to start your learning journey" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
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
                ViewState::Ready(cards) => rsx! {
                    div { class: "languages-grid",
                        for card in cards {
                            LanguageCard {
                                key: "{card.code}",
                                selected: selected_code.as_deref() == Some(card.code.as_str()),
                                on_select: move |code: String| selected.set(Some(code)),
                                card,
                            }
                        }
                    }
                    div { class: "languages-actions",
                        button {
                            class: "btn btn-primary",
                            id: "languages-continue",
                            r#type: "button",
                            disabled: selected_code.is_none(),
                            onclick: on_continue,
                            "Continue"
                        }
                    }
                    if let Some((title, text)) = featured {
                        div { class: "spotlight spotlight--featured",
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn LanguageCard(card: LanguageCardVm, selected: bool, on_select: EventHandler<String>) -> Element {
    let class = if selected {
        "card language-card language-card--selected"
    } else {
        "card language-card"
    };
    let code = card.code.clone();

    rsx! {
        div {
            class,
            id: "language-{card.code}",
            onclick: move |_| on_select.call(code.clone()),
            div { class: "language-card__flag", "{card.flag}" }
            h3 { "{card.name}" }
            p { "{card.native_name}" }
            p { class: "language-card__speakers", "{card.speakers}" }
        }
    }
}

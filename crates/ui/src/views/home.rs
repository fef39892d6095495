use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LanguageCardVm, map_language_cards};

const FEATURES: [(&str, &str); 4] = [
    (
        "Interactive Lessons",
        "Learn through engaging exercises and real-world conversations",
    ),
    (
        "Multiple Languages",
        "Start with Oromo and explore other languages from around the world",
    ),
    (
        "Community Learning",
        "Connect with native speakers and fellow learners",
    ),
    (
        "Gamified Experience",
        "Earn XP, maintain streaks, and unlock achievements",
    ),
];

#[derive(Clone, Debug, PartialEq)]
struct Spotlight {
    flag: String,
    name: String,
    text: String,
}

impl Spotlight {
    fn from_card(card: LanguageCardVm) -> Option<Self> {
        let text = card.spotlight?;
        Some(Self {
            flag: card.flag,
            name: card.name,
            text,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    language_count: usize,
    spotlight: Option<Spotlight>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    use_hook(|| {
        if let Some(code) = ctx.take_start_language() {
            log::info!("opening dashboard for {code}");
            let _ = navigator.push(Route::Dashboard {
                language: code.to_string(),
            });
        }
    });

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let languages = catalog.list_languages().await.map_err(ViewError::from)?;
            let cards = map_language_cards(&languages);
            Ok(HomeData {
                language_count: cards.len(),
                spotlight: cards.into_iter().find_map(Spotlight::from_card),
            })
        }
    });
    let state = view_state_from_resource(&resource);
    let language_count = match &state {
        ViewState::Ready(data) => data.language_count.to_string(),
        _ => "--".to_string(),
    };
    let spotlight = match state {
        ViewState::Ready(data) => data.spotlight,
        _ => None,
    };

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { class: "hero__title", "Oromo Lingo Hub" }
                p { class: "hero__subtitle",
                    "Master languages through interactive lessons, starting with the beautiful "
                    span { class: "hero__accent", "Oromo language" }
                    ". Join millions learning with the world's most popular language-learning platform."
                }
                div { class: "hero__actions",
                    Link { class: "btn btn-primary", to: Route::Languages {}, "Start Learning" }
                    a { class: "btn btn-secondary", href: "#features", "Learn More" }
                }
                div { class: "stats",
                    div { class: "stat",
                        div { class: "stat__value", "35M+" }
                        div { class: "stat__label", "Oromo Speakers Worldwide" }
                    }
                    div { class: "stat",
                        div { class: "stat__value", "{language_count}" }
                        div { class: "stat__label", "Languages Available" }
                    }
                    div { class: "stat",
                        div { class: "stat__value", "100K+" }
                        div { class: "stat__label", "Lessons Completed" }
                    }
                }
            }

            section { class: "features", id: "features",
                h2 { "Why Choose Oromo Lingo Hub?" }
                p { "Experience the most effective way to learn languages" }
                div { class: "features__grid",
                    for (title, description) in FEATURES {
                        div { class: "card feature",
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            if let Some(language) = spotlight {
                section { class: "spotlight",
                    div { class: "spotlight__flag", "{language.flag}" }
                    h2 { "Discover the {language.name} Language" }
                    p { "{language.text}" }
                    Link { class: "btn btn-primary", to: Route::Languages {}, "Start Learning {language.name}" }
                }
            }

            section { class: "cta",
                h2 { "Ready to Start Your Language Journey?" }
                p { "Join thousands of learners mastering Oromo and other languages through our interactive platform." }
                Link { class: "btn btn-primary", to: Route::Languages {}, "Get Started Now" }
            }
        }
    }
}

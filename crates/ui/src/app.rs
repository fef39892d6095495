use dioxus::prelude::*;
use dioxus_router::Router;
use lingo_core::model::{CompletionNotice, LearnerProgress};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    provide_learner_state(&ctx);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Oromo Lingo Hub" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shared learner state: the progress every view reads, and the notice of
/// the last finished lesson until the dashboard toast is dismissed.
pub fn provide_learner_state(ctx: &AppContext) {
    let initial = ctx.initial_progress();
    use_context_provider(move || Signal::new(initial));
    use_context_provider(|| Signal::new(None::<CompletionNotice>));
}

#[must_use]
pub fn use_learner_progress() -> Signal<LearnerProgress> {
    use_context::<Signal<LearnerProgress>>()
}

#[must_use]
pub fn use_completion_notice() -> Signal<Option<CompletionNotice>> {
    use_context::<Signal<Option<CompletionNotice>>>()
}

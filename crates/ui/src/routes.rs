use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{DashboardView, HomeView, LanguagesView, LessonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/languages", LanguagesView)] Languages {},
        #[route("/learn/:language", DashboardView)] Dashboard { language: String },
        #[route("/learn/:language/lesson/:lesson", LessonView)] Lesson { language: String, lesson: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{CurriculumView, LessonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CurriculumView)] Curriculum {},
        #[route("/lesson/:module_id", LessonView)] Lesson { module_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Seekho" }
                p { class: "masthead-tagline", "Learn green skills for a sustainable future" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

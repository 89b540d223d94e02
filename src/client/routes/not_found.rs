use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Stepwise" }
        Page { class: "flex flex-col items-center",
            div { class: "flex flex-col items-center gap-4 py-12",
                h1 { class: "text-4xl font-bold", "Page not found" }
                p { class: "opacity-70", "Nothing lives at /{path}" }
                Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
            }
        }
    )
}

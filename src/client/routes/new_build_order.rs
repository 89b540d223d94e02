use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{BuildOrderForm, Page, SteamLogin},
    store::user::UserState,
};

#[component]
pub fn NewBuildOrder() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx!(
        Title { "New Build Order | Stepwise" }
        Page {
            div { class: "mx-auto max-w-3xl",
                h1 { class: "mb-8 text-4xl font-bold", "Create Build Order" }
                if state.user.is_some() {
                    BuildOrderForm {}
                } else if state.fetched {
                    div { class: "flex flex-col items-center gap-4 py-12",
                        p { class: "opacity-70", "Sign in to create a build order." }
                        SteamLogin {}
                    }
                } else {
                    div { class: "skeleton h-64 w-full" }
                }
            }
        }
    )
}

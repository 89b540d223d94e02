use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Page, SteamLogin},
    router::Route,
    store::user::UserState,
};

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx!(
        Title { "Stepwise" }
        Meta {
            name: "description",
            content: "Create, share, and follow interactive build orders for Age of Empires 2."
        }
        Page { class: "flex flex-col items-center",
            div { class: "mx-auto max-w-3xl text-center flex flex-col items-center gap-6",
                h1 { class: "text-5xl font-bold", "Master Your Build Orders" }
                p { class: "text-xl opacity-70",
                    "Create, share, and follow interactive build orders for Age of Empires 2: Definitive Edition"
                }
                div { class: "flex justify-center gap-4",
                    Link { to: Route::BuildOrders {}, class: "btn btn-primary btn-lg",
                        "Browse Build Orders"
                    }
                    if state.user.is_some() {
                        Link { to: Route::NewBuildOrder {}, class: "btn btn-outline btn-lg",
                            "Create Build Order"
                        }
                    } else if state.fetched {
                        SteamLogin {}
                    }
                }
            }
            div { class: "mt-20 grid gap-6 md:grid-cols-2",
                FeatureCard {
                    title: "Step Viewer",
                    description: "Follow a build step by step with timings, villager counts, and resources at a glance."
                }
                FeatureCard {
                    title: "Community Library",
                    description: "Sign in with Steam to publish your own build orders and discover what others play."
                }
            }
        }
    )
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                p { class: "opacity-70", "{description}" }
            }
        }
    )
}

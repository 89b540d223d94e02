use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaHeart};
use dioxus_free_icons::Icon;

use crate::{client::router::Route, model::build_order::BuildOrderDto};

/// Summary card linking to a build order's detail page
#[component]
pub fn BuildOrderCard(build_order: BuildOrderDto) -> Element {
    let author = build_order
        .author
        .name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_string());
    let step_count = build_order.steps.len();

    rsx!(
        Link {
            to: Route::BuildOrderDetail { id: build_order.id },
            div {
                class: "card bg-base-100 shadow-sm h-full transition-shadow hover:shadow-lg",
                div {
                    class: "card-body",
                    div { class: "flex flex-wrap items-center gap-2",
                        span { class: "badge badge-secondary", "{build_order.civilization}" }
                        for map_type in build_order.map_types.iter() {
                            span { class: "badge badge-outline", "{map_type}" }
                        }
                        span { class: "text-sm opacity-70", "{step_count} steps" }
                    }
                    h2 { class: "card-title", "{build_order.title}" }
                    p { class: "line-clamp-2 opacity-70", "{build_order.description}" }
                    div { class: "card-actions justify-between items-center text-sm opacity-70",
                        span { "by {author}" }
                        div { class: "flex items-center gap-3",
                            span { class: "flex items-center gap-1",
                                Icon { width: 14, height: 14, icon: FaEye }
                                "{build_order.views}"
                            }
                            span { class: "flex items-center gap-1",
                                Icon { width: 14, height: 14, icon: FaHeart }
                                "{build_order.likes}"
                            }
                        }
                    }
                }
            }
        }
    )
}

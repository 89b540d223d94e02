use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{BuildOrderCard, Page},
        router::Route,
    },
    model::build_order::BuildOrderDto,
};

/// Newest public build orders shown on the list page
#[cfg(feature = "web")]
const BUILD_ORDER_PAGE_LIMIT: u64 = 50;

#[component]
pub fn BuildOrders() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut build_orders = use_signal(|| None::<Result<Vec<BuildOrderDto>, String>>);

    // Retrieve public build orders on component load
    #[cfg(feature = "web")]
    use_resource(move || async move {
        use crate::client::util::api::list_build_orders;

        build_orders.set(Some(list_build_orders(true, Some(BUILD_ORDER_PAGE_LIMIT)).await));
    });

    rsx!(
        Title { "Build Orders | Stepwise" }
        Page {
            div { class: "mb-8 flex items-center justify-between",
                div {
                    h1 { class: "text-4xl font-bold", "Build Orders" }
                    p { class: "opacity-70", "Discover and follow community build orders" }
                }
                Link { to: Route::NewBuildOrder {}, class: "btn btn-primary", "Create Build Order" }
            }
            {match build_orders() {
                None => rsx!(
                    div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                        for _ in 0..3 {
                            div { class: "skeleton h-48 w-full" }
                        }
                    }
                ),
                Some(Err(err)) => rsx!(
                    div { class: "alert alert-error", "{err}" }
                ),
                Some(Ok(list)) if list.is_empty() => rsx!(
                    div { class: "py-12 text-center opacity-70",
                        "No build orders yet. Be the first to create one!"
                    }
                ),
                Some(Ok(list)) => rsx!(
                    div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                        for build_order in list {
                            BuildOrderCard { key: "{build_order.id}", build_order }
                        }
                    }
                ),
            }}
        }
    )
}

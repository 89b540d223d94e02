use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaHeart};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{Page, StepViewer},
        store::user::UserState,
    },
    model::build_order::BuildOrderDto,
};

#[component]
pub fn BuildOrderDetail(id: i32) -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut build_order = use_signal(|| None::<Result<Option<BuildOrderDto>, String>>);

    // Retrieve the build order, counting a view
    #[cfg(feature = "web")]
    use_resource(move || async move {
        use crate::client::util::api::get_build_order;

        build_order.set(Some(get_build_order(id).await));
    });

    rsx!(
        Page {
            {match build_order() {
                None => rsx!(div { class: "skeleton h-96 w-full" }),
                Some(Err(err)) => rsx!(div { class: "alert alert-error", "{err}" }),
                Some(Ok(None)) => rsx!(
                    Title { "Not Found | Stepwise" }
                    div { class: "py-12 text-center opacity-70", "Build order not found" }
                ),
                Some(Ok(Some(build_order))) => rsx!(
                    BuildOrderHeader { build_order: build_order.clone() }
                    StepViewer { steps: build_order.steps.clone() }
                ),
            }}
        }
    )
}

#[component]
fn BuildOrderHeader(build_order: BuildOrderDto) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_author = user_state
        .read()
        .user
        .as_ref()
        .is_some_and(|user| user.id == build_order.author.id);
    let author = build_order
        .author
        .name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_string());

    rsx!(
        Title { "{build_order.title} | Stepwise" }
        div { class: "mb-8",
            div { class: "mb-4 flex flex-wrap items-center gap-2",
                span { class: "badge badge-secondary", "{build_order.civilization}" }
                for map_type in build_order.map_types.iter() {
                    span { class: "badge badge-outline", "{map_type}" }
                }
                if !build_order.is_public {
                    span { class: "badge badge-ghost", "Private" }
                }
            }
            h1 { class: "mb-2 text-4xl font-bold", "{build_order.title}" }
            p { class: "mb-4 opacity-70", "{build_order.description}" }
            div { class: "flex items-center gap-4 text-sm opacity-70",
                span { "by {author}" }
                span { class: "flex items-center gap-1",
                    Icon { width: 14, height: 14, icon: FaEye }
                    "{build_order.views} views"
                }
                span { class: "flex items-center gap-1",
                    Icon { width: 14, height: 14, icon: FaHeart }
                    "{build_order.likes} likes"
                }
                if is_author {
                    DeleteButton { id: build_order.id }
                }
            }
        }
    )
}

#[component]
fn DeleteButton(id: i32) -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut error = use_signal(|| None::<String>);
    #[cfg(feature = "web")]
    let navigator = use_navigator();

    rsx!(
        button {
            class: "btn btn-error btn-outline btn-xs",
            onclick: move |_| {
                #[cfg(feature = "web")]
                spawn(async move {
                    use crate::client::{router::Route, util::api::delete_build_order};

                    match delete_build_order(id).await {
                        Ok(()) => {
                            navigator.push(Route::BuildOrders {});
                        }
                        Err(err) => error.set(Some(err)),
                    }
                });
            },
            "Delete"
        }
        if let Some(message) = error() {
            span { class: "text-error", "{message}" }
        }
    )
}

use dioxus::prelude::*;

use crate::client::{components::SteamLogin, router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-6",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl font-bold",
                            "Stepwise"
                        }
                        p { class: "text-xs",
                            "v0.1.0-Alpha.1"
                        }
                    }
                }
                Link {
                    to: Route::BuildOrders {},
                    class: "text-sm hover:underline",
                    "Build Orders"
                }
            }
            div {
                class: "navbar-end",
                if let Some(user) = state.user.as_ref() {
                    div { class: "flex items-center gap-3",
                        if let Some(image) = user.image.as_ref() {
                            div { class: "avatar",
                                div { class: "w-8 rounded-full",
                                    img { src: "{image}", alt: "Steam avatar" }
                                }
                            }
                        }
                        p { class: "text-sm",
                            {user.name.clone().unwrap_or_else(|| user.steam_id.clone())}
                        }
                        a { href: "/api/auth/logout",
                            button {
                                class: "btn btn-outline btn-sm",
                                "Sign Out"
                            }
                        }
                    }
                } else if state.fetched {
                    SteamLogin {}
                }
            }
        }

        Outlet::<Route> {}
    }
}

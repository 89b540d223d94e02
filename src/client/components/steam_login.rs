use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaSteam;
use dioxus_free_icons::Icon;

#[component]
pub fn SteamLogin() -> Element {
    rsx!(
        a { href: "/api/auth/login",
            button {
                class: "btn btn-primary btn-sm flex gap-2",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaSteam
                }
                p {
                    "Sign in with Steam"
                }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_variables))]
    let user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Retrieve the signed in user once on load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api::get_current_user;

        use_resource(move || async move {
            let mut user_state = user_state;

            match get_current_user().await {
                Ok(user) => user_state.set(UserState {
                    user,
                    fetched: true,
                }),
                Err(err) => {
                    tracing::error!(err);
                    user_state.write().fetched = true;
                }
            }
        });
    }

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        Router::<Route> {}
    }
}

use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "flex min-h-screen flex-col pt-[64px] {class}",
            div { class: "container mx-auto flex-1 p-4 py-8",
                {children}
            }
            Footer {}
        }
    )
}

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer { class: "w-full border-t border-base-300 py-6",
            div { class: "container mx-auto px-4 text-center text-sm opacity-70",
                p { "Stepwise - Built for the Age of Empires 2 community" }
            }
        }
    )
}

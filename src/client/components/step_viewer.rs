use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight, FaPause, FaPlay};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::model::{
    build_order::StepDto,
    cursor::{format_step_time, StepCursor},
};

/// Steps through a build order one step at a time
///
/// Timer mode trades the full step list for a large clock and a preview of the next step.
#[component]
pub fn StepViewer(steps: Vec<StepDto>) -> Element {
    let mut cursor = use_signal(|| StepCursor::new(steps.len()));
    let mut timer_mode = use_signal(|| false);

    let Some(current) = cursor() else {
        return rsx!(
            div { class: "rounded-lg border border-base-300 p-8 text-center opacity-70",
                "This build order has no steps yet."
            }
        );
    };

    let step = &steps[current.index()];
    let next_step = steps.get(current.index() + 1);
    let time = format_step_time(step.time_minutes, step.time_seconds);
    let time_class = if timer_mode() { "text-5xl" } else { "text-xl" };

    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "flex items-center justify-between",
                p { class: "text-sm opacity-70", {current.label()} }
                button {
                    class: "btn btn-outline btn-sm flex gap-2",
                    onclick: move |_| timer_mode.toggle(),
                    if timer_mode() {
                        Icon { width: 14, height: 14, icon: FaPause }
                        "Exit Timer Mode"
                    } else {
                        Icon { width: 14, height: 14, icon: FaPlay }
                        "Timer Mode"
                    }
                }
            }

            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-4",
                    div { class: "flex items-center justify-between",
                        h2 { class: "card-title text-2xl", "{step.action}" }
                        p { class: "font-mono {time_class}", "{time}" }
                    }
                    p { class: "opacity-70", "Villagers: {step.villager_count}" }
                    if !step.description.is_empty() {
                        p { "{step.description}" }
                    }
                    div { class: "grid grid-cols-4 gap-4",
                        ResourceTile { label: "Wood", amount: step.resources.wood }
                        ResourceTile { label: "Food", amount: step.resources.food }
                        ResourceTile { label: "Gold", amount: step.resources.gold }
                        ResourceTile { label: "Stone", amount: step.resources.stone }
                    }
                }
            }

            div { class: "flex justify-between",
                button {
                    class: "btn btn-outline flex gap-2",
                    disabled: current.is_at_start(),
                    onclick: move |_| cursor.with_mut(|c| {
                        if let Some(c) = c {
                            c.retreat();
                        }
                    }),
                    Icon { width: 14, height: 14, icon: FaChevronLeft }
                    "Previous"
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    disabled: current.is_at_end(),
                    onclick: move |_| cursor.with_mut(|c| {
                        if let Some(c) = c {
                            c.advance();
                        }
                    }),
                    "Next"
                    Icon { width: 14, height: 14, icon: FaChevronRight }
                }
            }

            if timer_mode() {
                if let Some(next) = next_step {
                    div { class: "rounded-lg border border-base-300 p-4 opacity-70",
                        p { class: "text-sm", "Up next at {format_step_time(next.time_minutes, next.time_seconds)}" }
                        p { class: "font-medium", "{next.action}" }
                    }
                }
            } else {
                div { class: "rounded-lg border border-base-300 p-4",
                    h3 { class: "mb-3 font-semibold", "All Steps" }
                    div { class: "flex flex-col gap-2",
                        for (index, s) in steps.iter().enumerate() {
                            button {
                                key: "{s.id}",
                                class: if index == current.index() {
                                    "w-full rounded-lg border border-primary bg-base-200 p-3 text-left"
                                } else {
                                    "w-full rounded-lg border border-base-300 p-3 text-left hover:bg-base-200"
                                },
                                onclick: move |_| cursor.with_mut(|c| {
                                    if let Some(c) = c {
                                        if let Err(err) = c.jump_to(index) {
                                            tracing::warn!("{}", err);
                                        }
                                    }
                                }),
                                div { class: "flex items-center justify-between",
                                    span { class: "font-medium", "{s.action}" }
                                    span { class: "text-sm opacity-70",
                                        {format_step_time(s.time_minutes, s.time_seconds)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ResourceTile(label: &'static str, amount: i32) -> Element {
    rsx!(
        div { class: "rounded-lg border border-base-300 p-3",
            p { class: "text-sm opacity-70", "{label}" }
            p { class: "text-2xl font-bold", "{amount}" }
        }
    )
}

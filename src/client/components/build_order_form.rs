use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::model::{
    build_order::{CreateBuildOrderDto, NewStepDto, ResourcesDto},
    catalog::{CIVILIZATIONS, DEFAULT_CIVILIZATION, DEFAULT_MAP_TYPE, MAP_TYPES},
};

fn first_step() -> NewStepDto {
    NewStepDto {
        order: 0,
        time_minutes: 0,
        time_seconds: 0,
        villager_count: 3,
        action: "Build houses and scout".to_string(),
        description: "Send 3 starting villagers to sheep, build 2 houses, scout for resources"
            .to_string(),
        resources: ResourcesDto {
            wood: 200,
            food: 0,
            gold: 0,
            stone: 0,
        },
    }
}

/// Empty or malformed numeric input is treated as 0
fn parse_number(value: &str) -> i32 {
    value.trim().parse().unwrap_or_default()
}

/// Keeps `order` equal to each step's position after a removal
fn renumber(steps: &mut [NewStepDto]) {
    for (index, step) in steps.iter_mut().enumerate() {
        step.order = index as i32;
    }
}

/// Form for authoring a new build order
///
/// The payload is validated with the same rules the server applies before it is sent.
#[component]
pub fn BuildOrderForm() -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut civilization = use_signal(|| DEFAULT_CIVILIZATION.to_string());
    let mut map_types = use_signal(|| vec![DEFAULT_MAP_TYPE.to_string()]);
    let mut is_public = use_signal(|| false);
    let mut steps = use_signal(|| vec![first_step()]);
    let mut error = use_signal(|| None::<String>);
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut submitting = use_signal(|| false);
    #[cfg(feature = "web")]
    let navigator = use_navigator();

    let on_submit = move |_| {
        let payload = CreateBuildOrderDto {
            title: title(),
            description: description(),
            civilization: civilization(),
            map_types: map_types(),
            is_public: is_public(),
            steps: steps(),
        };

        if let Err(err) = payload.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::{router::Route, util::api::create_build_order};

            submitting.set(true);
            match create_build_order(&payload).await {
                Ok(build_order) => {
                    navigator.push(Route::BuildOrderDetail { id: build_order.id });
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    let rows = steps();

    rsx!(
        div { class: "flex flex-col gap-8",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "Basic Information" }
                    label { class: "form-control",
                        span { class: "label-text", "Title" }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "e.g., 22 Pop Scouts into Archers",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Description" }
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            placeholder: "Describe your build order strategy...",
                            rows: 4,
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Civilization" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{civilization}",
                            onchange: move |evt| civilization.set(evt.value()),
                            for civ in CIVILIZATIONS {
                                option { key: "{civ}", value: civ, selected: civ == civilization().as_str(), "{civ}" }
                            }
                        }
                    }
                    div {
                        span { class: "label-text", "Map Types" }
                        div { class: "flex flex-col gap-2 mt-2",
                            for map in MAP_TYPES {
                                label { key: "{map}", class: "flex items-center gap-2",
                                    input {
                                        r#type: "checkbox",
                                        class: "checkbox checkbox-sm",
                                        checked: map_types.read().iter().any(|m| m == map),
                                        onchange: move |evt| {
                                            let mut selected = map_types.write();
                                            if evt.checked() {
                                                if !selected.iter().any(|m| m == map) {
                                                    selected.push(map.to_string());
                                                }
                                            } else {
                                                selected.retain(|m| m != map);
                                            }
                                        },
                                    }
                                    "{map}"
                                }
                            }
                        }
                    }
                    label { class: "flex items-center gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-sm",
                            checked: is_public(),
                            onchange: move |evt| is_public.set(evt.checked()),
                        }
                        "Make public (visible to everyone)"
                    }
                }
            }

            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-6",
                    div { class: "flex items-center justify-between",
                        h2 { class: "card-title", "Build Order Steps" }
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            r#type: "button",
                            onclick: move |_| {
                                let mut steps = steps.write();
                                let order = steps.len() as i32;
                                steps.push(NewStepDto::blank(order));
                            },
                            Icon { width: 14, height: 14, icon: FaPlus }
                            "Add Step"
                        }
                    }
                    for (index, step) in rows.into_iter().enumerate() {
                        StepFields { key: "{index}", index, step, steps }
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "alert alert-error", "{message}" }
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: submitting(),
                onclick: on_submit,
                if submitting() { "Creating..." } else { "Create Build Order" }
            }
        }
    )
}

#[component]
fn StepFields(index: usize, step: NewStepDto, steps: Signal<Vec<NewStepDto>>) -> Element {
    let mut update = move |apply: fn(&mut NewStepDto, String), value: String| {
        if let Some(step) = steps.write().get_mut(index) {
            apply(step, value);
        }
    };

    rsx!(
        div { class: "rounded-lg border border-base-300 p-4 flex flex-col gap-4",
            div { class: "flex items-center justify-between",
                h4 { class: "font-semibold", "Step {index + 1}" }
                if index > 0 {
                    button {
                        class: "btn btn-ghost btn-sm",
                        r#type: "button",
                        onclick: move |_| {
                            let mut steps = steps.write();
                            if index < steps.len() {
                                steps.remove(index);
                                renumber(&mut steps);
                            }
                        },
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
            div { class: "grid grid-cols-3 gap-4",
                NumberField {
                    label: "Time (minutes)",
                    value: step.time_minutes,
                    oninput: move |v: String| update(|s, v| s.time_minutes = parse_number(&v), v),
                }
                NumberField {
                    label: "Time (seconds)",
                    value: step.time_seconds,
                    oninput: move |v: String| update(|s, v| s.time_seconds = parse_number(&v), v),
                }
                NumberField {
                    label: "Villager Count",
                    value: step.villager_count,
                    oninput: move |v: String| update(|s, v| s.villager_count = parse_number(&v), v),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Action" }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "e.g., Build Lumber Camp",
                    value: "{step.action}",
                    oninput: move |evt| update(|s, v| s.action = v, evt.value()),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Description" }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Detailed instructions...",
                    rows: 3,
                    value: "{step.description}",
                    oninput: move |evt| update(|s, v| s.description = v, evt.value()),
                }
            }
            div { class: "grid grid-cols-4 gap-4",
                NumberField {
                    label: "Wood",
                    value: step.resources.wood,
                    oninput: move |v: String| update(|s, v| s.resources.wood = parse_number(&v), v),
                }
                NumberField {
                    label: "Food",
                    value: step.resources.food,
                    oninput: move |v: String| update(|s, v| s.resources.food = parse_number(&v), v),
                }
                NumberField {
                    label: "Gold",
                    value: step.resources.gold,
                    oninput: move |v: String| update(|s, v| s.resources.gold = parse_number(&v), v),
                }
                NumberField {
                    label: "Stone",
                    value: step.resources.stone,
                    oninput: move |v: String| update(|s, v| s.resources.stone = parse_number(&v), v),
                }
            }
        }
    )
}

#[component]
fn NumberField(label: &'static str, value: i32, oninput: EventHandler<String>) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text text-xs", "{label}" }
            input {
                class: "input input-bordered input-sm w-full",
                r#type: "number",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    )
}

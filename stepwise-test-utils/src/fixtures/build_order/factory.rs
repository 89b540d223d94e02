//! JSON request bodies for the build order endpoints.

use serde_json::{json, Value};

/// A valid step payload placed at `order`
pub fn step_payload(order: i32) -> Value {
    json!({
        "order": order,
        "timeMinutes": order,
        "timeSeconds": 30,
        "villagerCount": 6 + order,
        "action": format!("Queue villager {}", order),
        "description": "",
        "resources": { "wood": 0, "food": 50, "gold": 0, "stone": 0 }
    })
}

/// A valid create payload with `step_count` steps
pub fn create_build_order_payload(title: &str, is_public: bool, step_count: i32) -> Value {
    let steps: Vec<Value> = (0..step_count).map(step_payload).collect();

    json!({
        "title": title,
        "description": "Scouts into archers",
        "civilization": "Mongols",
        "mapType": ["Arabia", "Arena"],
        "isPublic": is_public,
        "steps": steps
    })
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::AuthorDto;

/// Resources spent on a step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResourcesDto {
    pub wood: i32,
    pub food: i32,
    pub gold: i32,
    pub stone: i32,
}

/// A stored step of a build order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepDto {
    pub id: i32,
    pub order: i32,
    pub time_minutes: i32,
    pub time_seconds: i32,
    pub villager_count: i32,
    pub action: String,
    pub description: String,
    pub resources: ResourcesDto,
}

/// A build order with its author and steps sorted by `order`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BuildOrderDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub civilization: String,
    #[serde(rename = "mapType")]
    pub map_types: Vec<String>,
    pub is_public: bool,
    pub views: i32,
    pub likes: i32,
    pub author: AuthorDto,
    pub created_at: NaiveDateTime,
    pub steps: Vec<StepDto>,
}

/// A step as submitted when creating or replacing a build order's steps
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewStepDto {
    pub order: i32,
    pub time_minutes: i32,
    pub time_seconds: i32,
    pub villager_count: i32,
    pub action: String,
    #[serde(default)]
    pub description: String,
    pub resources: ResourcesDto,
}

impl NewStepDto {
    /// Blank step placed at `order`, used when adding a row to the form
    pub fn blank(order: i32) -> Self {
        Self {
            order,
            time_minutes: 0,
            time_seconds: 0,
            villager_count: 0,
            action: String::new(),
            description: String::new(),
            resources: ResourcesDto::default(),
        }
    }
}

/// Request body for creating a build order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildOrderDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub civilization: String,
    #[serde(rename = "mapType", default)]
    pub map_types: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    pub steps: Vec<NewStepDto>,
}

/// Request body for updating a build order
///
/// Absent fields are left untouched. When `steps` is present the stored steps are replaced
/// with it as a whole.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateBuildOrderDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civilization: Option<String>,
    #[serde(rename = "mapType", default, skip_serializing_if = "Option::is_none")]
    pub map_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<NewStepDto>>,
}

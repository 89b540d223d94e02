use serde::{Deserialize, Serialize};

/// The signed in user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    /// 64-bit SteamID as a decimal string
    pub steam_id: String,
    pub name: Option<String>,
    /// Full size Steam avatar URL
    pub image: Option<String>,
}

/// Public information about a build order's author
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AuthorDto {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
}

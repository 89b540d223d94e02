use serde::Deserialize;

use crate::server::{error::steam::SteamError, steam::SteamClient};

/// Public profile of a Steam account as returned by `GetPlayerSummaries`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlayerSummary {
    pub steamid: String,
    pub personaname: String,
    #[serde(default)]
    pub avatarfull: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
}

#[derive(Deserialize)]
struct PlayerSummariesResponse {
    response: PlayerSummariesPlayers,
}

#[derive(Deserialize)]
struct PlayerSummariesPlayers {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

impl SteamClient {
    /// Fetches the profile of the player with `steam_id` from the Steam Web API.
    ///
    /// # Returns
    /// - `Ok(PlayerSummary)` - Player's display name and avatar
    /// - `Err(SteamError::MissingApiKey)` - No Web API key is configured
    /// - `Err(SteamError::UnexpectedStatus)` - Web API responded with a non-success status
    /// - `Err(SteamError::PlayerNotFound)` - Web API returned no player for the ID
    /// - `Err(SteamError::RequestError)` - Request failed or the body could not be decoded
    pub async fn get_player_summary(&self, steam_id: &str) -> Result<PlayerSummary, SteamError> {
        let Some(api_key) = &self.api_key else {
            return Err(SteamError::MissingApiKey);
        };

        let url = format!("{}/ISteamUser/GetPlayerSummaries/v0002/", self.api_url);

        let response = self
            .http
            .get(url)
            .query(&[("key", api_key.as_str()), ("steamids", steam_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SteamError::UnexpectedStatus(response.status().as_u16()));
        }

        let summaries: PlayerSummariesResponse = response.json().await?;

        summaries
            .response
            .players
            .into_iter()
            .find(|player| player.steamid == steam_id)
            .ok_or_else(|| SteamError::PlayerNotFound(steam_id.to_string()))
    }
}

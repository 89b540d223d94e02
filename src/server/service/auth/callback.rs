use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::Error, steam::SteamClient};

/// Completes a Steam sign-in.
pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    steam_client: &'a SteamClient,
}

impl<'a> CallbackService<'a> {
    pub fn new(db: &'a DatabaseConnection, steam_client: &'a SteamClient) -> Self {
        Self { db, steam_client }
    }

    /// Verifies the OpenID assertion and upserts the user it identifies.
    ///
    /// The user's name and avatar are refreshed from their Steam profile on every sign-in.
    ///
    /// # Arguments
    /// - `params` - Every query parameter Steam redirected back with
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the signed in user
    /// - `Err(Error::SteamError)` - Assertion rejected, claimed ID invalid, or the player
    ///   summary could not be fetched
    /// - `Err(Error::DbErr)` - The user could not be stored
    pub async fn handle_callback(&self, params: &HashMap<String, String>) -> Result<i32, Error> {
        let steam_id = self.steam_client.verify_assertion(params).await?;

        let player = self.steam_client.get_player_summary(&steam_id).await?;

        let user = UserRepository::new(self.db)
            .upsert(&steam_id, Some(player.personaname), player.avatarfull)
            .await?;

        tracing::info!(user_id = %user.id, steam_id = %steam_id, "User signed in with Steam");

        Ok(user.id)
    }
}

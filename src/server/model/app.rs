use sea_orm::DatabaseConnection;

use crate::server::steam::SteamClient;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Client for Steam's OpenID provider and Web API
    pub steam_client: SteamClient,
}

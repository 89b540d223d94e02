use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{config::Config, error::Error, steam::SteamClient};

/// Build the Steam client from the configured endpoints and API key
pub fn build_steam_client(config: &Config) -> Result<SteamClient, Error> {
    let steam_client = SteamClient::builder()
        .openid_url(&config.steam_openid_url)
        .api_url(&config.steam_api_url)
        .api_key(config.steam_api_key.clone())
        .app_url(&config.app_url)
        .build()?;

    Ok(steam_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as ValkeyConfig};

    let valkey_config = ValkeyConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(valkey_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Build every service the router depends on
///
/// # Returns
/// - `Ok((SteamClient, SessionManagerLayer, DatabaseConnection))` - Services ready for use
/// - `Err(Error)` - Steam client configuration, Valkey, or database failure
pub async fn initialize(
    config: &Config,
) -> Result<(SteamClient, SessionManagerLayer<RedisStore<Pool>>, DatabaseConnection), Error> {
    let steam_client = build_steam_client(config)?;
    let session = connect_to_session(config).await?;
    let db = connect_to_database(config).await?;

    Ok((steam_client, session, db))
}

//! Placeholder values shared by tests. None of these are real credentials.

/// Public base URL the test Steam client uses as its OpenID realm
pub static TEST_APP_URL: &str = "http://localhost:8080";

/// Steam Web API key sent to the mocked player summary endpoint
pub static TEST_STEAM_API_KEY: &str = "steam_api_key";

/// SteamID used by the mocked OpenID assertion and player summary
pub static TEST_STEAM_ID: &str = "76561197960287930";

/// Persona name returned by the mocked player summary
pub static TEST_PLAYER_NAME: &str = "Test Player";

/// Avatar URL returned by the mocked player summary
pub static TEST_PLAYER_AVATAR: &str =
    "https://avatars.steamstatic.com/0000000000000000000000000000000000000000_full.jpg";

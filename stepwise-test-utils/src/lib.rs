//! Test environment setup for Stepwise.
//!
//! Tests are written in two phases. [`TestBuilder`] declares the tables, database fixtures,
//! and mocked Steam endpoints a test needs, then `build()` returns a [`TestContext`] holding
//! an in-memory SQLite database, a session, and the mock server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_APP_URL, TEST_PLAYER_AVATAR, TEST_PLAYER_NAME, TEST_STEAM_API_KEY, TEST_STEAM_ID},
        fixtures::build_order::factory,
        TestBuilder, TestContext, TestError,
    };
}

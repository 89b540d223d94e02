//! Stepwise: community build orders for real-time strategy games.

pub mod model;

#[cfg(feature = "server")]
pub mod server;

//! Database records and mocked Steam endpoints created during a test.

pub mod build_order;
pub mod steam;
pub mod user;

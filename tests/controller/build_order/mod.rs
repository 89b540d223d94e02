//! Tests for the build order endpoints.

mod create;
mod delete;
mod get;
mod list;
mod update;

use super::*;

//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, and the response status is checked
//! along with the resulting database state.

mod auth;
mod build_order;

use stepwise_test_utils::prelude::*;

use crate::util::{json_body, json_rejection, sign_in, TestContextExt};

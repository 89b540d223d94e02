//! Tests for the Steam sign-in endpoints.

mod callback;
mod login;
mod logout;
mod user;

use super::*;

//! Server application core modules.
//!
//! This module contains all server-side functionality for Stepwise: HTTP routing, Steam
//! OpenID sign-in, session handling, build order persistence, and the service layer that
//! enforces validation and ownership rules on top of the repositories.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod steam;
pub mod util;

//! Server application models.
//!
//! This module contains the shared application state handed to every handler and the
//! type-safe session wrappers used by the authentication flow.

pub mod app;
pub mod session;

//! Types shared between the server and the web client.
//!
//! Everything in here compiles for every target, so the validation rules and the step
//! cursor used by the viewer are the same code on both sides of the wire.

pub mod api;
pub mod build_order;
pub mod catalog;
pub mod cursor;
pub mod user;
pub mod validation;

//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and the Steam client. They own validation, ownership
//! checks, transactions, and the conversion of database models into API DTOs.

pub mod auth;
pub mod build_order;
pub mod user;

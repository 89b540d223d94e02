//! Repositories over the SeaORM entities, one per table.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code runs against
//! a plain connection or inside a transaction.

pub mod build_order;
pub mod build_order_step;
pub mod user;

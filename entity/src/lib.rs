//! SeaORM entities for Stepwise.

pub mod prelude;

pub mod build_order;
pub mod build_order_step;
pub mod stepwise_user;

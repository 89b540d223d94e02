//! Entity model aliases matching those used by the main crate.

pub type UserModel = entity::stepwise_user::Model;

pub type BuildOrderModel = entity::build_order::Model;

pub type BuildOrderStepModel = entity::build_order_step::Model;

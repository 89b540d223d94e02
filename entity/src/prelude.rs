pub use super::build_order::Entity as BuildOrder;
pub use super::build_order_step::Entity as BuildOrderStep;
pub use super::stepwise_user::Entity as StepwiseUser;

pub mod build_order;
pub mod build_orders;
pub mod home;
pub mod new_build_order;
pub mod not_found;

pub use build_order::BuildOrderDetail;
pub use build_orders::BuildOrders;
pub use home::Home;
pub use new_build_order::NewBuildOrder;
pub use not_found::NotFound;

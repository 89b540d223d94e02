pub mod build_order_card;
pub mod build_order_form;
pub mod navbar;
pub mod page;
pub mod step_viewer;
pub mod steam_login;

pub use build_order_card::BuildOrderCard;
pub use build_order_form::BuildOrderForm;
pub use navbar::Navbar;
pub use page::{Footer, Page};
pub use step_viewer::StepViewer;
pub use steam_login::SteamLogin;

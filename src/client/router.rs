use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{BuildOrderDetail, BuildOrders, Home, NewBuildOrder, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/build-orders")]
    BuildOrders {},

    #[route("/build-orders/new")]
    NewBuildOrder {},

    #[route("/build-orders/:id")]
    BuildOrderDetail { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

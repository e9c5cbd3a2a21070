#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_console::error as console_error;
use tracing::Level;

mod common;
use common::config::load_config;

mod components;
use components::navigation::NavBar;

mod pages;
use pages::{About, Contact, Home, Offers, PageNotFound, Products, Quotation};

fn main() {
    if let Err(err) = dioxus_logger::init(Level::DEBUG) {
        console_error!(format!("failed to init logger: {err}"));
    }
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/products/:brand")]
        Products { brand: String },
        #[route("/offers")]
        Offers {},
        #[route("/quotation")]
        Quotation {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use navbar::{brands::slugify, config::NavConfig};

use crate::Route;

// placeholder pages; dark heroes sit under the transparent navbar, light ones are the
// routes the navbar config lists as needing dark text
#[derive(Clone, PartialEq, Props)]
struct PageProps {
    #[props(into)]
    title: String,
    #[props(into)]
    subtitle: String,
    #[props(default)]
    light: bool,
    children: Element,
}

#[component]
fn Page(props: PageProps) -> Element {
    let hero = if props.light {
        "page-hero page-hero-light"
    } else {
        "page-hero page-hero-dark"
    };

    rsx! {
        div { class: "page",
            section { class: "{hero}",
                h1 { class: "page-title", "{props.title}" }
                p { class: "page-subtitle", "{props.subtitle}" }
            }
            div { class: "page-body", {props.children} }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Page {
            title: "Sidhhivinayak Auto World",
            subtitle: "Two-wheelers from every major brand, under one roof",
            Link { class: "nav-cta", to: Route::Quotation {}, "Get a quote" }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        Page { title: "About Us", subtitle: "A family dealership serving riders for over two decades" }
    }
}

#[component]
pub fn Products(brand: String) -> Element {
    let config = use_context::<NavConfig>();

    // show the configured display name when the slug belongs to a known brand
    let name = config
        .brands
        .iter()
        .find(|name| slugify(name) == brand)
        .cloned()
        .unwrap_or(brand);

    rsx! {
        Page { title: "{name}", subtitle: "Current models, prices and availability", light: true }
    }
}

#[component]
pub fn Offers() -> Element {
    rsx! {
        Page { title: "Offers & Deals", subtitle: "Festive discounts and exchange bonuses", light: true }
    }
}

#[component]
pub fn Quotation() -> Element {
    rsx! {
        Page { title: "Get Quote", subtitle: "On-road price for the model you want", light: true }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        Page { title: "Contact Us", subtitle: "Visit the showroom or give us a call", light: true }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page { title: "Page not found", subtitle: "Nothing lives at /{path}",
            Link { class: "nav-cta", to: Route::Home {}, "Back home" }
        }
    }
}

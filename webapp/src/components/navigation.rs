use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use navbar::{
    brands::slugify,
    config::NavConfig,
    route::RouteOracle,
    state::{Disclosure, NavState},
    style::{Magnitudes, STYLE_TRANSITION_MS, StyleContext, Tone},
    transition::TransitionController,
};
use tracing::{debug, error};

use crate::{
    Route,
    common::{host::BrowserHost, viewport::subscribe_scroll},
    components::icons::{Glyph, Icon},
};

fn is_current(oracle: &RouteOracle<'_>, target: &Route) -> bool {
    oracle.is_active(&target.to_string())
}

// compared through the router's own rendering of the path, so a slug that gets
// percent-encoded still matches
fn brand_target(brand: &str) -> Route {
    Route::Products {
        brand: slugify(brand),
    }
}

// keeps NavState::scrolled in sync with the window for as long as the navbar is mounted
fn use_scroll_watcher(threshold: f64, mut state: Signal<NavState>) {
    let subscription = use_hook(|| {
        let subscription = subscribe_scroll(threshold, move |scrolled| {
            state.write().set_scrolled(scrolled);
        });

        match subscription {
            Ok(subscription) => Rc::new(RefCell::new(Some(subscription))),
            Err(err) => {
                error!("navbar will not react to scrolling: {err:#}");
                Rc::new(RefCell::new(None))
            }
        }
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });
}

#[derive(Clone, PartialEq, Props)]
struct NavItemProps {
    #[props(into)]
    name: String,
    target: Route,
    tone: Tone,
    #[props(default)]
    icon: Option<Glyph>,
    // followed links close the mobile menu and unpin the brand dropdown
    #[props(default)]
    closes: Option<Signal<NavState>>,
}

#[component]
fn NavItem(props: NavItemProps) -> Element {
    let name = props.name;
    let closes = props.closes;
    let tone = props.tone.class();
    let icon = props.icon.map(|glyph| rsx! { Icon { glyph } });

    rsx! {
        Link {
            class: "nav-link {tone}",
            to: props.target,
            onclick: move |_| {
                if let Some(mut state) = closes {
                    state.write().close_menu();
                }
            },
            {icon}
            span { "{name}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct LogoProps {
    current_path: String,
    tone: Tone,
    size: Magnitudes,
}

// the logo does not jump home: it fades the page out, navigates, then fades back in
#[component]
fn Logo(props: LogoProps) -> Element {
    let config = use_context::<NavConfig>();
    let mut controller = use_signal(|| TransitionController::new(&config));
    let navigator = navigator();

    use_drop(move || {
        let mut host = BrowserHost::<Route>::new(controller, navigator);
        if let Ok(mut controller) = controller.try_write() {
            controller.abort(&mut host);
        }
    });

    let current_path = props.current_path;
    let tone = props.tone.class();
    let size = props.size;

    rsx! {
        a {
            class: "nav-logo",
            href: "/",
            style: "transform: scale({size.logo_scale}); transition: all {STYLE_TRANSITION_MS}ms;",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let mut host = BrowserHost::<Route>::new(controller, navigator);
                controller.write().on_logo_click(&current_path, &mut host);
            },
            img {
                src: "/SV.png",
                alt: "Sidhhivinayak Logo",
                style: "height: {size.logo_image_px}px; transition: all {STYLE_TRANSITION_MS}ms;",
            }
            div { class: "nav-wordmark",
                span {
                    class: "nav-wordmark-title {tone}",
                    style: "font-size: {size.title_rem}rem; transition: all {STYLE_TRANSITION_MS}ms;",
                    "SIDHHIVINAYAK"
                }
                span {
                    class: "nav-wordmark-subtitle {tone}",
                    style: "font-size: {size.subtitle_rem}rem; transition: all {STYLE_TRANSITION_MS}ms;",
                    "AUTO WORLD"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MenuProps {
    state: Signal<NavState>,
    ctx: StyleContext,
    current_path: String,
}

// horizontal menu for wide viewports; the brand dropdown shows while hovered or pinned by a click
#[component]
fn WideMenu(props: MenuProps) -> Element {
    let config = use_context::<NavConfig>();
    let oracle = RouteOracle::new(&props.current_path, &config);
    let mut state = props.state;
    let ctx = props.ctx;

    let size = ctx.magnitudes();
    let header_tone = ctx.base_tone().class();
    let brands_open = state.read().brands_open(Disclosure::Wide);

    let home_tone = ctx.link_tone(is_current(&oracle, &Route::Home {}));
    let about_tone = ctx.link_tone(is_current(&oracle, &Route::About {}));
    let offers_tone = ctx.link_tone(is_current(&oracle, &Route::Offers {}));
    let quotation_tone = ctx.link_tone(is_current(&oracle, &Route::Quotation {}));

    rsx! {
        nav {
            class: "nav-wide",
            style: "font-size: {size.link_rem}rem; transition: all {STYLE_TRANSITION_MS}ms;",
            NavItem {
                name: "Home",
                tone: home_tone,
                target: Route::Home {},
            }
            NavItem {
                name: "About Us",
                tone: about_tone,
                target: Route::About {},
            }
            div {
                class: "nav-dropdown",
                onmouseenter: move |_| state.write().set_brands_hovered(true),
                onmouseleave: move |_| state.write().set_brands_hovered(false),
                button {
                    class: "nav-link {header_tone}",
                    onclick: move |_| state.write().toggle_brands(Disclosure::Wide),
                    span { "Products" }
                    Icon { glyph: Glyph::ChevronDown }
                }
                if brands_open {
                    div { class: "nav-dropdown-panel",
                        for brand in config.brands.iter() {
                            NavItem {
                                key: "{brand}",
                                name: brand.clone(),
                                tone: ctx.panel_tone(is_current(&oracle, &brand_target(brand))),
                                target: brand_target(brand),
                                closes: state,
                            }
                        }
                    }
                }
            }
            NavItem {
                name: "Offers & Deals",
                tone: offers_tone,
                target: Route::Offers {},
            }
            NavItem {
                name: "Get Quote",
                tone: quotation_tone,
                icon: Glyph::Calculator,
                target: Route::Quotation {},
            }
            Link { class: "nav-cta", to: Route::Contact {},
                Icon { glyph: Glyph::Phone }
                span { "Contact Us" }
            }
        }
    }
}

// stacked menu for narrow viewports, shown while the toggle is open; its brand list is
// collapsed independently of the wide dropdown
#[component]
fn NarrowMenu(props: MenuProps) -> Element {
    let config = use_context::<NavConfig>();
    let oracle = RouteOracle::new(&props.current_path, &config);
    let mut state = props.state;
    let ctx = props.ctx;

    let brands_open = state.read().brands_open(Disclosure::Narrow);
    let chevron = if brands_open {
        "nav-chevron nav-chevron-open"
    } else {
        "nav-chevron"
    };

    let home_tone = ctx.panel_tone(is_current(&oracle, &Route::Home {}));
    let about_tone = ctx.panel_tone(is_current(&oracle, &Route::About {}));
    let offers_tone = ctx.panel_tone(is_current(&oracle, &Route::Offers {}));
    let quotation_tone = ctx.panel_tone(is_current(&oracle, &Route::Quotation {}));
    let header_tone = Tone::Dark.class();

    rsx! {
        div { class: "nav-narrow",
            div { class: "nav-narrow-list",
                NavItem {
                    name: "Home",
                    tone: home_tone,
                    target: Route::Home {},
                    closes: state,
                }
                NavItem {
                    name: "About Us",
                    tone: about_tone,
                    target: Route::About {},
                    closes: state,
                }
                div { class: "nav-narrow-group",
                    button {
                        class: "nav-link {header_tone}",
                        onclick: move |_| {
                            state.write().toggle_brands(Disclosure::Narrow);
                            debug!("toggled mobile brand list");
                        },
                        span { "Products" }
                        Icon { glyph: Glyph::ChevronDown, class: chevron }
                    }
                    if brands_open {
                        div { class: "nav-narrow-brands",
                            for brand in config.brands.iter() {
                                NavItem {
                                    key: "{brand}",
                                    name: brand.clone(),
                                    tone: ctx.panel_tone(is_current(&oracle, &brand_target(brand))),
                                    target: brand_target(brand),
                                    closes: state,
                                }
                            }
                        }
                    }
                }
                NavItem {
                    name: "Offers & Deals",
                    tone: offers_tone,
                    target: Route::Offers {},
                    closes: state,
                }
                NavItem {
                    name: "Get Quote",
                    tone: quotation_tone,
                    icon: Glyph::Calculator,
                    target: Route::Quotation {},
                    closes: state,
                }
                div { class: "nav-narrow-group",
                    Link {
                        class: "nav-cta",
                        to: Route::Contact {},
                        onclick: move |_| state.write().close_menu(),
                        Icon { glyph: Glyph::Phone }
                        span { "Contact Us" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<NavConfig>();
    // an ancestor may hand over the state; otherwise it lives and dies with the navbar
    let mut state = use_hook(|| {
        try_consume_context::<Signal<NavState>>()
            .unwrap_or_else(|| Signal::new(NavState::default()))
    });
    use_scroll_watcher(config.scroll_threshold_px, state);

    let current_path = use_route::<Route>().to_string();
    let oracle = RouteOracle::new(&current_path, &config);
    let nav = *state.read();
    let ctx = StyleContext::new(&nav, &oracle);

    let size = ctx.magnitudes();
    let base_tone = ctx.base_tone();
    let toggle_tone = base_tone.class();
    let bar_class = ctx.bar_class();

    rsx! {
        header { class: "{bar_class}",
            div { class: "nav-container",
                div {
                    class: "nav-row",
                    style: "height: {size.bar_height_px}px; transition: all {STYLE_TRANSITION_MS}ms;",
                    Logo {
                        current_path: current_path.clone(),
                        tone: base_tone,
                        size,
                    }
                    WideMenu {
                        state,
                        ctx,
                        current_path: current_path.clone(),
                    }
                    button {
                        class: "nav-toggle {toggle_tone}",
                        style: "transform: scale({size.toggle_scale});",
                        onclick: move |_| {
                            state.write().toggle_menu();
                            debug!({ menu_open = state.peek().menu_open }, "toggled mobile menu");
                        },
                        if nav.menu_open {
                            Icon { glyph: Glyph::Close, size: 32 }
                        } else {
                            Icon { glyph: Glyph::Menu, size: 32 }
                        }
                    }
                }
                if nav.menu_open {
                    NarrowMenu { state, ctx, current_path: current_path.clone() }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::{rc::Rc, time::Duration};

    use dioxus::dioxus_core::NoOpMutations;
    use dioxus_history::{History, MemoryHistory};

    use super::*;

    const MENU_GLYPH: &str = "M4 6h16M4 12h16M4 18h16";
    const CLOSE_GLYPH: &str = "M18 6 6 18M6 6l12 12";

    #[derive(Clone, PartialEq, Props)]
    struct HarnessProps {
        path: String,
        state: NavState,
        config: NavConfig,
    }

    // the site router at a given path, with the navbar state owned up here
    #[component]
    fn Harness(props: HarnessProps) -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path(props.path.clone())) as Rc<dyn History>
        });
        use_context_provider(|| props.config.clone());
        use_context_provider(|| Signal::new(props.state));

        rsx! { Router::<Route> {} }
    }

    fn mount(path: &str, state: NavState, config: NavConfig) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                path: path.to_owned(),
                state,
                config,
            },
        );
        dom.rebuild_in_place();
        dom
    }

    fn render_at(path: &str, state: NavState) -> String {
        dioxus_ssr::render(&mount(path, state, NavConfig::default()))
    }

    fn state_of(dom: &VirtualDom) -> Signal<NavState> {
        dom.in_runtime(|| ScopeId::APP.in_runtime(consume_context::<Signal<NavState>>))
    }

    async fn rerender(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn closed_menu_shows_the_hamburger() {
        let html = render_at("/", NavState::default());

        assert!(html.contains(MENU_GLYPH));
        assert!(!html.contains(CLOSE_GLYPH));
        assert!(!html.contains("nav-narrow"));
        assert!(html.contains("site-nav site-nav-clear"));
    }

    #[test]
    fn home_link_is_accent_on_home() {
        let html = render_at("/", NavState::default());

        assert!(html.contains("nav-link nav-tone-accent"));
        assert!(html.contains("nav-link nav-tone-light"));
        assert!(!html.contains("nav-tone-dark"));
    }

    #[test]
    fn contact_page_links_are_dark() {
        let html = render_at("/contact", NavState::default());

        assert!(html.contains("nav-link nav-tone-dark"));
        assert!(!html.contains("nav-tone-light"));
    }

    #[tokio::test]
    async fn tapping_the_toggle_swaps_glyph_and_opens_menu() {
        let mut dom = mount("/", NavState::default(), NavConfig::default());
        let mut state = state_of(&dom);

        // the toggle button's handler
        dom.in_runtime(|| ScopeId::APP.in_runtime(|| state.write().toggle_menu()));
        rerender(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(CLOSE_GLYPH));
        assert!(!html.contains(MENU_GLYPH));
        assert!(html.contains("nav-narrow-list"));
        assert!(html.contains("site-nav site-nav-solid"));

        // a followed link in the open menu
        dom.in_runtime(|| ScopeId::APP.in_runtime(|| state.write().close_menu()));
        rerender(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(MENU_GLYPH));
        assert!(!html.contains("nav-narrow-list"));
    }

    #[test]
    fn narrow_brand_list_needs_its_own_tap() {
        let open = NavState {
            menu_open: true,
            ..NavState::default()
        };
        let html = render_at("/", open);
        assert!(html.contains("nav-narrow-list"));
        assert!(!html.contains("nav-narrow-brands"));
        assert!(!html.contains("nav-chevron-open"));

        let expanded = NavState {
            narrow_brands_open: true,
            ..open
        };
        let html = render_at("/", expanded);
        assert!(html.contains("nav-narrow-brands"));
        assert!(html.contains("nav-chevron nav-chevron-open"));
        assert!(html.contains("royal-enfield"));
        assert!(!html.contains("nav-dropdown-panel"));
    }

    #[test]
    fn pinned_dropdown_renders_its_panel() {
        let pinned = NavState {
            wide_brands_pinned: true,
            ..NavState::default()
        };
        let html = render_at("/", pinned);

        assert!(html.contains("nav-dropdown-panel"));
        assert!(html.contains("Royal Enfield"));
        assert!(!html.contains("nav-narrow"));
    }

    #[test]
    fn multi_word_brand_is_highlighted_on_its_page() {
        let config = NavConfig {
            brands: vec![String::from("Hero"), String::from("Royal Enfield Classic")],
            ..NavConfig::default()
        };
        let path = brand_target("Royal Enfield Classic").to_string();
        let state = NavState {
            menu_open: true,
            narrow_brands_open: true,
            ..NavState::default()
        };

        let html = dioxus_ssr::render(&mount(&path, state, config));

        assert!(html.contains("Royal Enfield Classic"));
        assert_eq!(html.matches("nav-tone-accent").count(), 1);
    }
}

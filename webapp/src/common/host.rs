use std::marker::PhantomData;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use navbar::transition::{ScrollMotion, Tick, TransitionController, TransitionHost};
use tracing::error;

use crate::common::viewport;

#[cfg(target_arch = "wasm32")]
async fn delay(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// no browser timers natively; ticks resume on the next poll
#[cfg(not(target_arch = "wasm32"))]
async fn delay(_ms: u32) {}

// drives the logo transition against the real page: body opacity, the router and
// timed tasks that feed ticks back into the controller
//
// ticks run as tasks spawned in the scope that scheduled them, so the router (and its
// history) is reachable when the navigate step fires
pub struct BrowserHost<R> {
    controller: Signal<TransitionController>,
    navigator: Navigator,
    route: PhantomData<fn() -> R>,
}

impl<R> Clone for BrowserHost<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for BrowserHost<R> {}

impl<R: Routable> BrowserHost<R> {
    pub fn new(controller: Signal<TransitionController>, navigator: Navigator) -> Self {
        BrowserHost {
            controller,
            navigator,
            route: PhantomData,
        }
    }
}

impl<R: Routable> TransitionHost for BrowserHost<R> {
    fn set_page_opacity(&mut self, opacity: f32, fade_ms: u32) {
        if let Err(err) = viewport::set_page_opacity(opacity, fade_ms) {
            error!("{err:#}");
        }
    }

    fn navigate_to(&mut self, path: &str) {
        let Ok(route) = path.parse::<R>() else {
            error!({ path = path }, "transition target is not a known route");
            return;
        };

        if self.navigator.push(route).is_some() {
            error!({ path = path }, "failed to navigate");
        }
    }

    fn scroll_to_top(&mut self, motion: ScrollMotion) {
        if let Err(err) = viewport::scroll_to_top(motion) {
            error!("{err:#}");
        }
    }

    fn schedule(&mut self, delay_ms: u32, tick: Tick) {
        let mut host = *self;

        spawn(async move {
            delay(delay_ms).await;

            // the navbar may have been unmounted while the task was pending
            let mut signal = host.controller;
            match signal.try_write() {
                Ok(mut controller) => {
                    controller.resume(tick, &mut host);
                }
                Err(err) => error!({ tick = ?tick }, "dropping transition tick: {err}"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc, time::Duration};

    use dioxus::dioxus_core::NoOpMutations;
    use dioxus_history::{History, MemoryHistory, history};
    use navbar::{config::NavConfig, transition::Phase};

    use super::*;

    #[derive(Clone, PartialEq, Routable)]
    #[rustfmt::skip]
    enum Site {
        #[layout(Shell)]
            #[route("/")]
            Landing {},
            #[route("/about")]
            Elsewhere {},
    }

    thread_local! {
        static HOST: Cell<Option<BrowserHost<Site>>> = const { Cell::new(None) };
    }

    #[component]
    fn Shell() -> Element {
        let controller = use_signal(|| TransitionController::new(&NavConfig::default()));
        HOST.with(|host| host.set(Some(BrowserHost::new(controller, navigator()))));

        rsx! { Outlet::<Site> {} }
    }

    #[component]
    fn Landing() -> Element {
        rsx! { "landing" }
    }

    #[component]
    fn Elsewhere() -> Element {
        rsx! { "elsewhere" }
    }

    #[component]
    fn Harness() -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path("/about")) as Rc<dyn History>
        });

        rsx! { Router::<Site> {} }
    }

    fn current_path(dom: &VirtualDom) -> String {
        dom.in_runtime(|| ScopeId::APP.in_runtime(|| history().current_route()))
    }

    // polls spawned ticks until nothing is left to do
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn logo_transition_navigates_from_a_spawned_tick() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        assert_eq!(current_path(&dom), "/about");

        let mut host = HOST.with(Cell::get).expect("shell rendered");
        let mut controller = host.controller;

        // the click handler runs inside the runtime; everything after it is deferred
        dom.in_runtime(|| {
            ScopeId::APP.in_runtime(|| controller.write().on_logo_click("/about", &mut host))
        });
        assert_eq!(current_path(&dom), "/about");

        settle(&mut dom).await;

        assert_eq!(current_path(&dom), "/");
        assert_eq!(dom.in_runtime(|| controller.peek().phase()), Phase::Idle);
    }

    #[tokio::test]
    async fn unknown_target_leaves_the_route_alone() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        let mut host = HOST.with(Cell::get).expect("shell rendered");
        dom.in_runtime(|| ScopeId::APP.in_runtime(|| host.navigate_to("/nowhere")));
        settle(&mut dom).await;

        assert_eq!(current_path(&dom), "/about");
    }
}

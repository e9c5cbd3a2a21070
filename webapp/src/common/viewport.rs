use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use anyhow::{Context, anyhow};
use navbar::{scroll::ScrollWatcher, transition::ScrollMotion};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

#[cfg(target_arch = "wasm32")]
fn window() -> anyhow::Result<Window> {
    web_sys::window().context("no global window exists")
}

// native builds (tests, ssr) have no browser to talk to; every binding reports an error
#[cfg(not(target_arch = "wasm32"))]
fn window() -> anyhow::Result<Window> {
    Err(anyhow!("no browser window outside wasm"))
}

pub fn scroll_offset() -> anyhow::Result<f64> {
    window()?
        .scroll_y()
        .map_err(|err| anyhow!("failed to read scroll offset: {err:?}"))
}

pub fn scroll_to_top(motion: ScrollMotion) -> anyhow::Result<()> {
    let window = window()?;

    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(match motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Instant,
    });

    window.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}

// opacity of the whole <body>, used to fade between pages
pub fn set_page_opacity(opacity: f32, fade_ms: u32) -> anyhow::Result<()> {
    let body = window()?
        .document()
        .context("window has no document")?
        .body()
        .context("document has no body")?;

    let style = body.style();
    style
        .set_property("transition", &format!("opacity {fade_ms}ms ease"))
        .map_err(|err| anyhow!("failed to set page transition: {err:?}"))?;
    style
        .set_property("opacity", &opacity.to_string())
        .map_err(|err| anyhow!("failed to set page opacity: {err:?}"))?;

    Ok(())
}

// a live window scroll listener; dropping it removes the listener and any pending frame
pub struct ScrollSubscription {
    window: Window,
    watcher: Rc<RefCell<ScrollWatcher>>,
    frame: Rc<Cell<Option<i32>>>,
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

// scroll events only request an animation frame; the offset is read once per frame and
// on_change fires only when the scrolled flag flips
pub fn subscribe_scroll(
    threshold: f64,
    mut on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<ScrollSubscription> {
    let window = window()?;
    let watcher = Rc::new(RefCell::new(ScrollWatcher::new(threshold)));
    let frame = Rc::new(Cell::new(None));

    let on_frame = {
        let watcher = watcher.clone();
        let frame = frame.clone();

        Rc::new(Closure::wrap(Box::new(move || {
            frame.set(None);

            let offset = match scroll_offset() {
                Ok(offset) => offset,
                Err(err) => {
                    watcher.borrow_mut().cancel_frame();
                    error!("{err:#}");
                    return;
                }
            };

            let change = watcher.borrow_mut().on_frame(offset);
            if let Some(scrolled) = change {
                on_change(scrolled);
            }
        }) as Box<dyn FnMut()>))
    };

    let on_scroll = {
        let window = window.clone();
        let watcher = watcher.clone();
        let frame = frame.clone();
        let on_frame = on_frame.clone();

        Closure::wrap(Box::new(move || {
            if !watcher.borrow_mut().on_scroll_event() {
                return;
            }

            match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                Ok(handle) => frame.set(Some(handle)),
                Err(err) => {
                    watcher.borrow_mut().cancel_frame();
                    error!("failed to request animation frame: {err:?}");
                }
            }
        }) as Box<dyn FnMut()>)
    };

    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("failed to add scroll listener: {err:?}"))?;

    debug!({ threshold = threshold }, "added scroll listener");
    Ok(ScrollSubscription {
        window,
        watcher,
        frame,
        on_scroll,
        _on_frame: on_frame,
    })
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                error!("failed to cancel animation frame: {err:?}");
            }
            self.watcher.borrow_mut().cancel_frame();
        }

        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
        {
            error!("failed to remove scroll listener: {err:?}");
            return;
        }

        debug!("removed scroll listener");
    }
}

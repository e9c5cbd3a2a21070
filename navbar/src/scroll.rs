use tracing::{debug, trace};

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

// at most one sample per animation frame
//
// the browser fires scroll events far more often than it paints, so events arriving while a
// frame is already requested are only counted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
    coalesced: u32,
}

impl FrameGate {
    // true when the caller should request a frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    // returns how many events were folded into this frame
    pub fn complete(&mut self) -> u32 {
        self.pending = false;
        std::mem::take(&mut self.coalesced)
    }
}

// turns raw scroll offsets into changes of the scrolled flag
#[derive(Clone, Copy, Debug)]
pub struct ScrollWatcher {
    threshold: f64,
    scrolled: bool,
    gate: FrameGate,
}

impl ScrollWatcher {
    pub fn new(threshold: f64) -> Self {
        ScrollWatcher {
            threshold,
            scrolled: false,
            gate: FrameGate::default(),
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    // called for every scroll event; true when a frame needs to be requested
    pub fn on_scroll_event(&mut self) -> bool {
        self.gate.request()
    }

    // called from the frame callback with the current offset; Some only on a change
    pub fn on_frame(&mut self, offset: f64) -> Option<bool> {
        let coalesced = self.gate.complete();
        trace!({ offset = offset, coalesced = coalesced }, "sampled scroll offset");

        let scrolled = is_scrolled(offset, self.threshold);
        if scrolled == self.scrolled {
            return None;
        }

        debug!({ offset = offset, scrolled = scrolled }, "scroll state changed");
        self.scrolled = scrolled;
        Some(scrolled)
    }

    // drop a requested frame that will never run, e.g. when unsubscribing
    pub fn cancel_frame(&mut self) {
        self.gate.complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0, 20.0));
        assert!(!is_scrolled(19.5, 20.0));
        assert!(!is_scrolled(20.0, 20.0));
        assert!(is_scrolled(20.5, 20.0));
        assert!(is_scrolled(21.0, 20.0));
    }

    #[test]
    fn gate_coalesces_a_burst() {
        let mut gate = FrameGate::default();

        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
        assert_eq!(gate.complete(), 2);

        assert!(!gate.is_pending());
        assert!(gate.request());
        assert_eq!(gate.complete(), 0);
    }

    #[test]
    fn watcher_reports_only_changes() {
        let mut watcher = ScrollWatcher::new(20.0);

        assert!(watcher.on_scroll_event());
        assert_eq!(watcher.on_frame(5.0), None);

        assert!(watcher.on_scroll_event());
        assert_eq!(watcher.on_frame(20.0), None);

        assert!(watcher.on_scroll_event());
        assert_eq!(watcher.on_frame(21.0), Some(true));
        assert!(watcher.scrolled());

        assert!(watcher.on_scroll_event());
        assert_eq!(watcher.on_frame(400.0), None);

        assert!(watcher.on_scroll_event());
        assert_eq!(watcher.on_frame(0.0), Some(false));
    }

    #[test]
    fn one_frame_per_burst() {
        let mut watcher = ScrollWatcher::new(20.0);

        let requested = (0..10).filter(|_| watcher.on_scroll_event()).count();
        assert_eq!(requested, 1);

        assert_eq!(watcher.on_frame(100.0), Some(true));
        assert!(watcher.on_scroll_event());
    }

    #[test]
    fn cancelled_frame_can_be_requested_again() {
        let mut watcher = ScrollWatcher::new(20.0);
        assert!(watcher.on_scroll_event());
        watcher.cancel_frame();
        assert!(watcher.on_scroll_event());
    }
}

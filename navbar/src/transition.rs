use tracing::debug;

use crate::{HOME_PATH, config::NavConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    // page opacity is heading to 0
    FadingOut,
    // route changed, waiting for the new page to settle before revealing it
    Navigating,
    // opacity is heading back to 1
    FadingIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Navigate,
    Reveal,
    Finish,
}

// a deferred resumption of the controller
//
// ticks from an older generation are ignored, which is what makes a second click safe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub step: Step,
}

// the page-level side effects of the logo transition
//
// the browser implementation lives in the webapp; tests use a recording fake
pub trait TransitionHost {
    fn set_page_opacity(&mut self, opacity: f32, fade_ms: u32);

    fn navigate_to(&mut self, path: &str);

    fn scroll_to_top(&mut self, motion: ScrollMotion);

    // call TransitionController::resume with this tick after delay_ms
    fn schedule(&mut self, delay_ms: u32, tick: Tick);
}

// Idle -> FadingOut -> Navigating -> FadingIn -> Idle
#[derive(Clone, Debug)]
pub struct TransitionController {
    phase: Phase,
    generation: u64,
    fade_ms: u32,
    settle_ms: u32,
}

impl TransitionController {
    pub fn new(config: &NavConfig) -> Self {
        TransitionController {
            phase: Phase::Idle,
            generation: 0,
            fade_ms: config.fade_ms,
            settle_ms: config.settle_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn on_logo_click<H: TransitionHost>(&mut self, current_path: &str, host: &mut H) {
        // already home: just glide back up. an in-flight fade-in keeps its generation so it
        // still restores the opacity
        if current_path == HOME_PATH {
            debug!({ phase = ?self.phase }, "logo clicked on home page");
            host.scroll_to_top(ScrollMotion::Smooth);
            return;
        }

        self.generation += 1;
        self.phase = Phase::FadingOut;
        debug!({ generation = self.generation, from = current_path }, "starting home transition");

        host.set_page_opacity(0.0, self.fade_ms);
        host.schedule(
            self.fade_ms,
            Tick {
                generation: self.generation,
                step: Step::Navigate,
            },
        );
    }

    // returns false for stale ticks
    pub fn resume<H: TransitionHost>(&mut self, tick: Tick, host: &mut H) -> bool {
        if tick.generation != self.generation {
            debug!({ tick = ?tick, generation = self.generation }, "dropping stale transition tick");
            return false;
        }

        match (self.phase, tick.step) {
            (Phase::FadingOut, Step::Navigate) => {
                self.phase = Phase::Navigating;
                host.navigate_to(HOME_PATH);
                host.schedule(
                    self.settle_ms,
                    Tick {
                        generation: self.generation,
                        step: Step::Reveal,
                    },
                );
            }
            (Phase::Navigating, Step::Reveal) => {
                self.phase = Phase::FadingIn;
                host.set_page_opacity(1.0, self.fade_ms);
                host.scroll_to_top(ScrollMotion::Instant);
                host.schedule(
                    self.fade_ms,
                    Tick {
                        generation: self.generation,
                        step: Step::Finish,
                    },
                );
            }
            (Phase::FadingIn, Step::Finish) => {
                self.phase = Phase::Idle;
            }
            (phase, step) => {
                debug!({ phase = ?phase, step = ?step }, "transition tick out of order");
                return false;
            }
        }

        debug!({ generation = self.generation, phase = ?self.phase }, "transition advanced");
        true
    }

    // the component is going away mid-transition; never leave the page invisible
    pub fn abort<H: TransitionHost>(&mut self, host: &mut H) {
        if self.phase == Phase::Idle {
            return;
        }

        debug!({ generation = self.generation, phase = ?self.phase }, "aborting transition");
        self.generation += 1;
        self.phase = Phase::Idle;
        host.set_page_opacity(1.0, 0);
    }
}

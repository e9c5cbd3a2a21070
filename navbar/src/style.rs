use crate::{route::RouteOracle, state::NavState};

// every size and color change on the bar animates over this long
pub const STYLE_TRANSITION_MS: u32 = 300;

// text color family for a single link or label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    // the current page
    Accent,
    // on white, or over a light hero
    Dark,
    // white on the transparent bar over a dark hero
    Light,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Accent => "nav-tone-accent",
            Tone::Dark => "nav-tone-dark",
            Tone::Light => "nav-tone-light",
        }
    }
}

// sizes that step down once the page is scrolled, independent of color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnitudes {
    pub bar_height_px: u32,
    pub logo_scale: f32,
    pub logo_image_px: u32,
    pub title_rem: f32,
    pub subtitle_rem: f32,
    pub link_rem: f32,
    pub toggle_scale: f32,
}

pub const TALL: Magnitudes = Magnitudes {
    bar_height_px: 96,
    logo_scale: 1.0,
    logo_image_px: 48,
    title_rem: 1.25,
    subtitle_rem: 1.0,
    link_rem: 1.125,
    toggle_scale: 1.0,
};

pub const SHORT: Magnitudes = Magnitudes {
    bar_height_px: 64,
    logo_scale: 0.95,
    logo_image_px: 40,
    title_rem: 1.125,
    subtitle_rem: 0.875,
    link_rem: 1.0,
    toggle_scale: 0.9,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleContext {
    pub scrolled: bool,
    pub menu_open: bool,
    pub dark_text: bool,
}

impl StyleContext {
    pub fn new(state: &NavState, oracle: &RouteOracle<'_>) -> Self {
        StyleContext {
            scrolled: state.scrolled,
            menu_open: state.menu_open,
            dark_text: oracle.needs_dark_text(),
        }
    }

    // tone of anything that is not a link: wordmark, dropdown header, menu toggle
    pub fn base_tone(&self) -> Tone {
        if self.scrolled || self.menu_open || self.dark_text {
            Tone::Dark
        } else {
            Tone::Light
        }
    }

    // links on the bar itself; the current page always wins
    pub fn link_tone(&self, active: bool) -> Tone {
        if active { Tone::Accent } else { self.base_tone() }
    }

    // links drawn on a white panel (dropdown, mobile menu) are never light
    pub fn panel_tone(&self, active: bool) -> Tone {
        if active { Tone::Accent } else { Tone::Dark }
    }

    // solid white with a shadow once scrolled or while the mobile menu is open
    pub fn solid_background(&self) -> bool {
        self.scrolled || self.menu_open
    }

    pub fn magnitudes(&self) -> Magnitudes {
        if self.scrolled { SHORT } else { TALL }
    }

    pub fn bar_class(&self) -> &'static str {
        if self.solid_background() {
            "site-nav site-nav-solid"
        } else {
            "site-nav site-nav-clear"
        }
    }
}

use crate::{HOME_PATH, config::NavConfig};

// read-only view of the router's current path
//
// built fresh on every render, so nothing here is cached
#[derive(Clone, Copy, Debug)]
pub struct RouteOracle<'a> {
    current_path: &'a str,
    config: &'a NavConfig,
}

impl<'a> RouteOracle<'a> {
    pub fn new(current_path: &'a str, config: &'a NavConfig) -> Self {
        RouteOracle {
            current_path,
            config,
        }
    }

    pub fn current_path(&self) -> &'a str {
        self.current_path
    }

    // exact match only; /products is not active on /products/hero
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }

    pub fn is_home(&self) -> bool {
        self.is_active(HOME_PATH)
    }

    pub fn needs_dark_text(&self) -> bool {
        self.config
            .dark_text_routes
            .iter()
            .any(|route| route == self.current_path)
            || self
                .config
                .dark_text_prefixes
                .iter()
                .any(|prefix| self.current_path.starts_with(prefix.as_str()))
    }
}

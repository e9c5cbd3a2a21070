use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::brands::{BRANDS, PRODUCTS_PREFIX};

// navbar configuration
//
// every field falls back to the production value, so an empty [config] table is valid
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // offset in pixels past which the bar switches to its compact, solid style (strict >)
    pub scroll_threshold_px: f64,

    // fade-out length before the route change; the page fades back in over the same length
    pub fade_ms: u32,

    // pause between the route change and the fade-in
    pub settle_ms: u32,

    // exact paths whose hero sections are light, so the bar needs dark text from the start
    pub dark_text_routes: Vec<String>,

    // same as above, matched by prefix
    pub dark_text_prefixes: Vec<String>,

    pub brands: Vec<String>,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scroll_threshold_px: 20.0,
            fade_ms: 300,
            settle_ms: 50,
            dark_text_routes: vec![
                String::from("/offers"),
                String::from("/quotation"),
                String::from("/contact"),
            ],
            dark_text_prefixes: vec![String::from(PRODUCTS_PREFIX)],
            brands: BRANDS.iter().map(|b| b.to_string()).collect(),
        }
    }
}

// the config lives under a [config] table, same as the rest of the site's toml files
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: NavConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<NavConfig> {
    debug!("parsing navbar config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse navbar config")?;

    debug!({brands = data.config.brands.len()}, "successfully parsed navbar config");
    Ok(data.config)
}

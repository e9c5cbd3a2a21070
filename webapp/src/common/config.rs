use navbar::config::{NavConfig, parse_config};
use tracing::error;

const NAVBAR_TOML: &str = include_str!("../../navbar.toml");

// a broken config must not take the site down, the built-in values are the production ones
pub fn load_config() -> NavConfig {
    parse_config(NAVBAR_TOML).unwrap_or_else(|err| {
        error!("using default navbar config: {err:#}");
        NavConfig::default()
    })
}

pub mod config;
pub mod host;
pub mod style;
pub mod viewport;

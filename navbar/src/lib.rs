// core of the site navigation bar
//
// nothing in here touches the browser: the webapp crate feeds scroll offsets, the current
// route and click events in, and renders whatever the resolver hands back
pub mod brands;
pub mod config;
pub mod route;
pub mod scroll;
pub mod state;
pub mod style;
pub mod transition;

pub const HOME_PATH: &str = "/";

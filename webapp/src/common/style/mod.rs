use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::NAV_COMPONENTS;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything ends up in a single <style> at the root
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    NAV_COMPONENTS,
    PAGE_STYLES
);

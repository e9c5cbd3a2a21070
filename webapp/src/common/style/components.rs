pub const NAV_COMPONENTS: &str = r#"
/* Site navigation bar */

.site-nav {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  transition: all var(--transition-nav) var(--easing-standard);
}

.site-nav-clear {
  background-color: transparent;
}

.site-nav-solid {
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.nav-container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-logo {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  transform-origin: left center;
}

.nav-logo img {
  width: auto;
  object-fit: contain;
}

.nav-wordmark {
  display: flex;
  flex-direction: column;
  line-height: 1.25;
}

.nav-wordmark-title {
  font-weight: 700;
}

.nav-wordmark-subtitle {
  font-weight: 500;
}

.nav-wordmark .nav-tone-dark {
  color: var(--text-primary);
}

/* Tones */
.nav-tone-accent {
  color: var(--primary);
}

.nav-tone-dark {
  color: var(--text-secondary);
}

.nav-tone-light {
  color: var(--text-inverse);
}

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  background: none;
  border: none;
  cursor: pointer;
  font: inherit;
  transition: color var(--transition-nav) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
  text-decoration: none;
}

/* Wide viewport menu */
.nav-wide {
  display: none;
  align-items: center;
  gap: var(--space-10);
}

.nav-dropdown {
  position: relative;
}

.nav-dropdown-panel {
  position: absolute;
  top: 100%;
  left: 0;
  width: 12rem;
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  border-radius: var(--radius-lg);
  padding: var(--space-2) 0;
}

.nav-dropdown-panel .nav-link {
  display: block;
  padding: var(--space-2) var(--space-4);
}

.nav-cta {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  background-color: var(--primary);
  color: var(--text-inverse);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
  transition: background-color var(--transition-nav) var(--easing-standard);
}

.nav-cta:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

/* Narrow viewport menu */
.nav-toggle {
  display: inline-flex;
  background: none;
  border: none;
  cursor: pointer;
  transition: all var(--transition-nav) var(--easing-standard);
}

.nav-narrow {
  background-color: var(--surface);
  padding: var(--space-6) 0;
}

.nav-narrow-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-5);
}

.nav-narrow-list > .nav-link,
.nav-narrow-group {
  padding: 0 var(--space-4);
}

.nav-narrow-group > .nav-link {
  width: 100%;
  justify-content: space-between;
}

.nav-narrow-brands {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding-left: var(--space-4);
  margin-top: var(--space-2);
}

.nav-narrow-brands .nav-link {
  padding: var(--space-2) 0;
}

.nav-narrow .nav-cta {
  width: 100%;
  justify-content: center;
}

.nav-chevron {
  transition: transform var(--transition-nav) var(--easing-standard);
}

.nav-chevron-open {
  transform: rotate(180deg);
}

@media (min-width: 1024px) {
  .nav-wide {
    display: flex;
  }

  .nav-toggle,
  .nav-narrow {
    display: none;
  }
}
"#;

pub const PAGE_STYLES: &str = r#"
/* Page placeholders */

.page {
  min-height: 100vh;
}

.page-hero {
  padding: 10rem var(--space-4) var(--space-16);
  text-align: center;
}

.page-hero-dark {
  background: linear-gradient(135deg, #0F172A, var(--primary-dark));
  color: var(--text-inverse);
}

.page-hero-light {
  background-color: var(--neutral-50);
  color: var(--text-primary);
}

.page-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-4);
}

.page-subtitle {
  font-size: 1.25rem;
  opacity: 0.9;
}

.page-body {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-4);
  min-height: 150vh;
}
"#;

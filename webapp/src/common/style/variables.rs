pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Accent blue, current page and call to action */
  --primary-dark: #1D4ED8;     /* Call to action hover */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-inverse: #FFFFFF;

  /* Layout */
  --container-width: 1280px;
  --wide-breakpoint: 1024px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-10: 40px;
  --space-16: 64px;

  /* Border Radius */
  --radius-lg: 8px;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-nav: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;

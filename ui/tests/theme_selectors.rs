/*!
Theme selector lint.

Purpose:
- Ensure that the CSS selectors the page components rely on remain present in
  the shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames a class, preventing a
  silent styling regression.

How it works:
- We compile-time embed the theme using `include_str!`.
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".button {",
    ".button--primary",
    // Navbar & language toggle
    ".navbar {",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".lang-toggle",
    ".lang-toggle__button",
    ".lang-toggle__button--active",
    // Hero
    ".hero__title",
    ".hero__title-accent",
    ".hero__visual",
    ".hero__caption",
    // Sections & cards
    ".section__heading",
    ".section__grid--thirds",
    ".section__grid--halves",
    ".card__ordinal",
    ".vehicle-card",
    ".vehicle-card__badge",
    ".testimonial__quote",
    ".cta__panel",
    // Contact form
    ".contact__field",
    ".contact__field--wide",
    ".contact__input",
    ".contact__error",
    ".contact__notice",
    ".contact__dismiss",
    // Footer
    ".footer__rights",
    ".footer__tagline",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({} non-whitespace chars) - \
         did the file get truncated or path change?",
        non_ws_len
    );
}

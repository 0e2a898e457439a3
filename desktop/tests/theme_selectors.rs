#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared components rely on (shell, landing sections,
  demo dashboard, right-to-left overrides) remain present in the shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".site {",
    ".site__main",
    ".scheme-dark",
    ".scheme-light",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".section-badge",
    // Landing sections
    ".hero__preview-bar",
    ".feature-card",
    ".pricing__toggle-option--active",
    ".plan-card--featured",
    ".testimonial-card",
    ".cta__panel",
    // Blog
    ".post-card",
    ".page-post__frontmatter",
    // Demo dashboard
    ".metric-card",
    ".metric-card--skeleton",
    ".metric-card__change--up",
    ".metric-card__change--down",
    ".metric-card__change--neutral",
    ".demo-chart",
    ".demo-chart__bar",
    ".progress__fill",
    ".alert-list__item--warning",
    // Footer & 404
    ".footer__status-dot",
    ".page-not-found",
    // Right-to-left overrides
    "[dir=\"rtl\"]",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn shared_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in shared theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn shared_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn navbar_drawer_opens_from_either_edge() {
    // The drawer slides in from the reading-start edge in both directions.
    for token in [
        ".navbar__drawer--open",
        "[dir=\"rtl\"] .navbar__drawer",
        "inset-inline-start",
    ] {
        assert!(NAVBAR_CSS.contains(token), "navbar.css is missing `{token}`");
    }
}

//! Color scheme shared through context by the site root.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Modifier class applied to the site wrapper.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "scheme-dark",
            Self::Light => "scheme-light",
        }
    }
}

/// Install the color scheme signal for the subtree. Call once from the root component.
pub fn use_color_scheme_provider(initial: ColorScheme) -> Signal<ColorScheme> {
    let scheme = use_signal(|| initial);
    use_context_provider(|| scheme)
}

/// Read the color scheme signal, falling back to a local dark signal outside a provider.
pub fn use_color_scheme() -> Signal<ColorScheme> {
    let fallback = use_signal(ColorScheme::default);
    try_use_context::<Signal<ColorScheme>>().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::Dark.toggled().toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Light.css_class(), "scheme-light");
    }
}

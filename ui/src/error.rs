//! Error type shared across the site crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unsupported locale `{0}`")]
    UnknownLocale(String),

    #[error("no blog post `{slug}` for locale `{locale}`")]
    UnknownPost { slug: String, locale: String },

    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("localization bundle failed to load: {0}")]
    I18n(#[from] i18n_embed::I18nEmbedError),
}

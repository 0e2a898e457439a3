//! Internationalization (i18n) support for `nexora-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/nexora-ui.ftl   (fallback/reference)
//!   ar/nexora-ui.ftl
//! ```
//!
//! There is no process-wide "current language". Each [`Locale`] owns its own
//! loader, and callers pass the locale they are rendering for:
//! ```ignore
//! use crate::t;
//! let title = t!(locale, "blog-title");
//! let read = t!(locale, "blog-min-read", minutes = post.read_time_minutes);
//! ```
//!
//! The locale itself comes from the route (`/en/...`, `/ar/...`). Only the bare `/`
//! consults the platform requester (`navigator.languages` on web, the OS locale list
//! on desktop) to pick where to redirect.
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

use crate::core::locale::Locale;
use crate::error::SiteError;

/// Localized lookup for an explicit locale.
/// Examples:
///     t!(locale, "nav-blog")
///     t!(locale, "demo-updated", time = stamp)
///
/// Expands to `fl!(loader(locale), ...)` so every lookup is checked against the
/// fallback catalog at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; matches the crate name and the catalog filename.
const DOMAIN: &str = "nexora-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static EN: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::En));
static AR: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::Ar));

/// Loader for `locale`, built on first use.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::En.language_id());
    // Bidi isolation marks around arguments would leak into plain-text attributes.
    loader.set_use_isolating(false);
    if let Err(err) = select(&loader, locale) {
        warn!("[i18n] {err}; {locale} falls back to en");
    } else {
        debug!("[i18n] loaded catalog for {locale}");
    }
    loader
}

fn select(loader: &FluentLanguageLoader, locale: Locale) -> Result<(), SiteError> {
    i18n_embed::select(loader, &Localizations, &[locale.language_id()])?;
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Locale to redirect the bare root to: the first requested platform language we
/// support, else the configured default.
pub fn detect_locale() -> Locale {
    pick_locale(&requested_languages())
        .unwrap_or_else(|| crate::config::site().default_locale())
}

fn pick_locale(requested: &[LanguageIdentifier]) -> Option<Locale> {
    requested
        .iter()
        .find_map(|lang| Locale::parse(lang.language.as_str()).ok())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

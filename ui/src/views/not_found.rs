use dioxus::prelude::*;

use crate::config;
use crate::core::locale::Locale;
use crate::routes::Route;
use crate::t;

/// Catch-all route. Uses the leading path segment as the locale when it is one.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let locale = segments.first().and_then(|s| Locale::parse(s).ok());
    rsx! { NotFoundPage { locale } }
}

/// Localized 404 body. Without a locale it renders in the configured default.
#[component]
pub fn NotFoundPage(locale: Option<Locale>) -> Element {
    let locale = locale.unwrap_or_else(|| config::site().default_locale());

    rsx! {
        document::Title { {t!(locale, "not-found-title")} }
        section { class: "page page-not-found", lang: locale.code(), dir: locale.direction().as_str(),
            span { class: "page-not-found__code", "404" }
            h1 { {t!(locale, "not-found-title")} }
            p { {t!(locale, "not-found-description")} }
            Link { class: "button button--primary", to: Route::home(locale),
                {t!(locale, "not-found-cta")}
            }
        }
    }
}

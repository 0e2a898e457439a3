use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::locale::{Locale, SUPPORTED_LOCALES};
use crate::routes::Route;
use crate::t;

/// Locale picker. Switching replaces the current route with the same page under
/// the chosen locale prefix.
#[component]
pub fn LanguageSwitcher(locale: Locale) -> Element {
    let route = use_route::<Route>();

    let on_change = move |evt: FormEvent| match Locale::parse(&evt.value()) {
        Ok(next) if next != locale => {
            info!("[i18n] switching locale {locale} -> {next}");
            let _ = navigator().replace(route.with_locale(next));
        }
        Ok(_) => {}
        Err(err) => warn!("[i18n] ignoring locale selection: {err}"),
    };

    rsx! {
        div { class: "navbar__locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!(locale, "nav-language-label")}
            }
            select {
                id: "locale-select",
                value: "{locale.code()}",
                oninput: on_change,
                for option_locale in SUPPORTED_LOCALES.iter().copied() {
                    option {
                        key: "{option_locale.code()}",
                        value: "{option_locale.code()}",
                        selected: option_locale == locale,
                        "{option_locale.flag()} {option_locale.native_name()}"
                    }
                }
            }
        }
    }
}

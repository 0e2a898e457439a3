use dioxus::prelude::*;

use crate::core::locale::Locale;
use crate::core::theme::{use_color_scheme, ColorScheme};
use crate::t;

#[component]
pub fn ThemeToggle(locale: Locale) -> Element {
    let mut scheme = use_color_scheme();
    let current = scheme();
    let next = current.toggled();
    let next_name = match next {
        ColorScheme::Dark => t!(locale, "theme-dark"),
        ColorScheme::Light => t!(locale, "theme-light"),
    };
    let label = t!(locale, "nav-toggle-theme");

    rsx! {
        button {
            r#type: "button",
            class: "button button--ghost theme-toggle",
            aria_label: "{label}",
            title: "{next_name}",
            onclick: move |_| scheme.set(next),
            if current == ColorScheme::Dark { "☀" } else { "☾" }
        }
    }
}

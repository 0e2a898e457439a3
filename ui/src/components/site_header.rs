use dioxus::prelude::*;

use crate::components::{LanguageSwitcher, ThemeToggle};
use crate::config;
use crate::core::locale::Locale;
use crate::routes::Route;
use crate::t;

// Navbar stylesheet (linked on web, inlined for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header: brand, section links, locale and color-scheme controls, and a
/// drawer for narrow screens that opens from the reading-start edge.
#[component]
pub fn SiteHeader(locale: Locale) -> Element {
    let mut drawer_open = use_signal(|| false);
    let brand = config::site().brand.to_lowercase();

    let product = t!(locale, "nav-product");
    let pricing = t!(locale, "nav-pricing");
    let blog = t!(locale, "nav-blog");
    let demo = t!(locale, "nav-demo");
    let sign_in = t!(locale, "nav-sign-in");
    let get_started = t!(locale, "nav-get-started");

    let drawer_class = if drawer_open() {
        "navbar__drawer navbar__drawer--open"
    } else {
        "navbar__drawer"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                Link {
                    class: "navbar__brand",
                    to: Route::home(locale),
                    span { class: "visually-hidden", {t!(locale, "meta-home-label")} }
                    span { class: "navbar__brand-mark", aria_hidden: "true" }
                    span { class: "navbar__brand-name", "{brand}" }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "/{locale}#features", "{product}" }
                    a { class: "navbar__link", href: "/{locale}#pricing", "{pricing}" }
                    Link { class: "navbar__link", to: Route::blog(locale), "{blog}" }
                    Link { class: "navbar__link", to: Route::demo(locale), "{demo}" }
                }

                div { class: "navbar__actions",
                    LanguageSwitcher { locale }
                    ThemeToggle { locale }
                    a { class: "button button--ghost navbar__wide-only", href: "#", "{sign_in}" }
                    a { class: "button button--primary navbar__wide-only", href: "#", "{get_started}" }
                    button {
                        r#type: "button",
                        class: "navbar__burger",
                        aria_label: t!(locale, "nav-toggle-menu"),
                        aria_expanded: "{drawer_open()}",
                        onclick: move |_| drawer_open.toggle(),
                        "☰"
                    }
                }
            }

            div { class: "{drawer_class}",
                div { class: "navbar__drawer-title", "{brand}" }
                a { class: "navbar__drawer-link", href: "/{locale}#features", onclick: move |_| drawer_open.set(false), "{product}" }
                a { class: "navbar__drawer-link", href: "/{locale}#pricing", onclick: move |_| drawer_open.set(false), "{pricing}" }
                Link { class: "navbar__drawer-link", to: Route::blog(locale), onclick: move |_| drawer_open.set(false), "{blog}" }
                Link { class: "navbar__drawer-link", to: Route::demo(locale), onclick: move |_| drawer_open.set(false), "{demo}" }
                hr {}
                a { class: "button button--ghost", href: "#", "{sign_in}" }
                a { class: "button button--primary", href: "#", "{get_started}" }
            }
        }
    }
}

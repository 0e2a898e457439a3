use dioxus::prelude::*;
use tracing::debug;

use crate::components::{SiteFooter, SiteHeader};
use crate::core::theme::use_color_scheme;
use crate::routes::Route;

/// Layout around every localized page: header, routed content, footer. The
/// wrapper carries `lang`/`dir`, and the same values are mirrored onto the
/// document element so browser text handling follows the page locale.
#[component]
pub fn SiteShell() -> Element {
    let route = use_route::<Route>();
    let scheme = use_color_scheme();

    let locale = route.locale();

    let lang = locale.map(|l| l.code()).unwrap_or_default();
    let dir = locale.map(|l| l.direction().as_str()).unwrap_or_default();
    use_effect(use_reactive!(|(lang, dir)| {
        if lang.is_empty() {
            return;
        }
        let _ = document::eval(&format!(
            "document.documentElement.lang = '{lang}'; document.documentElement.dir = '{dir}';"
        ));
    }));

    let Some(locale) = locale else {
        return rsx! { Outlet::<Route> {} };
    };
    debug!(locale = %locale, route = %route, "shell render");

    rsx! {
        div {
            class: "site {scheme().css_class()}",
            lang: "{lang}",
            dir: "{dir}",
            SiteHeader { locale }
            main { key: "{lang}", class: "site__main", Outlet::<Route> {} }
            SiteFooter { locale }
        }
    }
}

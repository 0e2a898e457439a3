use dioxus::prelude::*;

use crate::demo::DemoDashboard;
use crate::t;

use super::{resolve_locale, NotFoundPage};

#[component]
pub fn Demo(locale: String) -> Element {
    let Some(locale) = resolve_locale(&locale) else {
        return rsx! { NotFoundPage { locale: None } };
    };
    let title = t!(locale, "demo-title");

    rsx! {
        document::Title { "{title}" }
        section { class: "page page-demo",
            header { class: "page-demo__header",
                h1 { "{title}" }
                p { class: "section__subheadline", {t!(locale, "demo-subtitle")} }
            }
            DemoDashboard { locale }
        }
    }
}

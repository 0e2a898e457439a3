use dioxus::prelude::*;

use crate::core::locale::Locale;
use crate::routes::Route;
use crate::t;

#[component]
pub fn CtaSection(locale: Locale) -> Element {
    rsx! {
        section { class: "section cta",
            div { class: "cta__panel",
                h2 { class: "cta__headline", {t!(locale, "cta-headline")} }
                p { class: "cta__subheadline", {t!(locale, "cta-subheadline")} }
                div { class: "cta__actions",
                    a { class: "button button--primary button--large", href: "#pricing",
                        {t!(locale, "cta-primary")}
                    }
                    Link { class: "button button--ghost button--large", to: Route::demo(locale),
                        {t!(locale, "cta-secondary")}
                    }
                }
            }
        }
    }
}

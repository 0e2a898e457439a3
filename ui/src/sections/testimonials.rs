use dioxus::prelude::*;

use crate::components::SectionBadge;
use crate::content::testimonials;
use crate::core::locale::Locale;
use crate::t;

#[component]
pub fn TestimonialsSection(locale: Locale) -> Element {
    rsx! {
        section { class: "section testimonials", id: "testimonials",
            header { class: "section__header",
                SectionBadge { {t!(locale, "testimonials-badge")} }
                h2 { class: "section__headline", {t!(locale, "testimonials-headline")} }
            }
            div { class: "testimonials__grid",
                for item in testimonials(locale).iter() {
                    figure { key: "{item.author}", class: "testimonial-card",
                        div { class: "testimonial-card__stars", aria_hidden: "true", "★★★★★" }
                        blockquote { class: "testimonial-card__quote", "“{item.quote}”" }
                        figcaption { class: "testimonial-card__author",
                            span { class: "testimonial-card__avatar", "{item.avatar}" }
                            div {
                                strong { "{item.author}" }
                                span { class: "testimonial-card__role", "{item.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::sections::{CtaSection, FeaturesSection, HeroSection, PricingSection, TestimonialsSection};
use crate::t;

use super::{resolve_locale, NotFoundPage};

#[component]
pub fn Home(locale: String) -> Element {
    let Some(locale) = resolve_locale(&locale) else {
        return rsx! { NotFoundPage { locale: None } };
    };

    rsx! {
        document::Title { {t!(locale, "meta-title")} }
        document::Meta { name: "description", content: t!(locale, "hero-subheadline") }
        HeroSection { locale }
        FeaturesSection { locale }
        PricingSection { locale }
        TestimonialsSection { locale }
        CtaSection { locale }
    }
}

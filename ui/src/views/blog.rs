use dioxus::prelude::*;

use crate::content::posts;
use crate::core::format::{format_post_date, truncate};
use crate::core::locale::Locale;
use crate::routes::Route;
use crate::t;

use super::{resolve_locale, NotFoundPage};

const EXCERPT_CHARS: usize = 180;

#[component]
pub fn Blog(locale: String) -> Element {
    let Some(locale) = resolve_locale(&locale) else {
        return rsx! { NotFoundPage { locale: None } };
    };
    let title = t!(locale, "blog-title");
    let brand = &crate::config::site().brand;

    rsx! {
        document::Title { "{title} · {brand}" }
        section { class: "page page-blog",
            header { class: "section__header",
                h1 { class: "section__headline", "{title}" }
                p { class: "section__subheadline", {t!(locale, "blog-subtitle")} }
            }
            div { class: "blog__grid",
                for post in posts(locale).iter() {
                    PostCard {
                        key: "{post.slug}",
                        locale,
                        slug: post.slug,
                        title: post.title,
                        excerpt: truncate(post.excerpt, EXCERPT_CHARS),
                        date: format_post_date(post.date, locale),
                        category: post.category,
                        minutes: post.read_time_minutes,
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(
    locale: Locale,
    slug: &'static str,
    title: &'static str,
    excerpt: String,
    date: String,
    category: &'static str,
    minutes: u32,
) -> Element {
    rsx! {
        article { class: "post-card",
            div { class: "post-card__meta",
                span { class: "post-card__category", "{category}" }
                span { class: "post-card__date", "{date}" }
            }
            h2 { class: "post-card__title",
                Link { to: Route::post(locale, slug), "{title}" }
            }
            p { class: "post-card__excerpt", "{excerpt}" }
            div { class: "post-card__footer",
                span { class: "post-card__read-time", {t!(locale, "blog-min-read", minutes = minutes)} }
                Link { class: "post-card__more", to: Route::post(locale, slug),
                    {t!(locale, "blog-read-more")}
                }
            }
        }
    }
}

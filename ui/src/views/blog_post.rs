use dioxus::prelude::*;
use tracing::info;

use crate::content::get_post;
use crate::core::format::format_post_date;
use crate::routes::Route;
use crate::t;

use super::{resolve_locale, NotFoundPage};

#[component]
pub fn BlogPost(locale: String, slug: String) -> Element {
    let Some(locale) = resolve_locale(&locale) else {
        return rsx! { NotFoundPage { locale: None } };
    };
    let post = match get_post(&slug, locale) {
        Ok(post) => post,
        Err(err) => {
            info!(%err, "blog post lookup failed");
            return rsx! { NotFoundPage { locale: Some(locale) } };
        }
    };
    let date = format_post_date(post.date, locale);
    let frontmatter = post.frontmatter();

    rsx! {
        document::Title { "{post.title}" }
        document::Meta { name: "description", content: post.excerpt.to_string() }
        article { class: "page page-post",
            Link { class: "page-post__back", to: Route::blog(locale),
                span { class: "page-post__back-arrow", aria_hidden: "true",
                    if locale.is_rtl() { "→" } else { "←" }
                }
                " "
                {t!(locale, "blog-back")}
            }
            header { class: "page-post__header",
                span { class: "post-card__category", "{post.category}" }
                h1 { class: "page-post__title", "{post.title}" }
                div { class: "page-post__meta",
                    span { "{date}" }
                    span { aria_hidden: "true", " · " }
                    span { {t!(locale, "blog-min-read", minutes = post.read_time_minutes)} }
                }
            }
            p { class: "page-post__lead", "{post.excerpt}" }
            p { {t!(locale, "blog-body-intro")} }
            figure { class: "page-post__frontmatter",
                figcaption { {t!(locale, "blog-frontmatter-label")} }
                pre { code { "{frontmatter}" } }
            }
            p { {t!(locale, "blog-body-outro")} }
        }
    }
}

//! Route-level views. Each one resolves the locale segment of its path and falls
//! back to the localized 404 page when the segment is not a locale we serve.

mod blog;
mod blog_post;
mod demo;
mod home;
mod not_found;
mod shell;

pub use blog::Blog;
pub use blog_post::BlogPost;
pub use demo::Demo;
pub use home::Home;
pub use not_found::{NotFound, NotFoundPage};
pub use shell::SiteShell;

use tracing::debug;

use crate::core::locale::Locale;

fn resolve_locale(segment: &str) -> Option<Locale> {
    match Locale::parse(segment) {
        Ok(locale) => Some(locale),
        Err(err) => {
            debug!(%err, "unresolved locale segment");
            None
        }
    }
}

//! Locale-prefixed routes shared by the web and desktop launchers.

use dioxus::prelude::*;

use crate::core::locale::Locale;
use crate::views::{Blog, BlogPost, Demo, Home, NotFound, SiteShell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteShell)]
        #[route("/:locale")]
        Home { locale: String },
        #[route("/:locale/blog")]
        Blog { locale: String },
        #[route("/:locale/blog/:slug")]
        BlogPost { locale: String, slug: String },
        #[route("/:locale/demo")]
        Demo { locale: String },
    #[end_layout]
    #[redirect("/", || Route::home(crate::i18n::detect_locale()))]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn home(locale: Locale) -> Self {
        Self::Home {
            locale: locale.code().to_string(),
        }
    }

    pub fn blog(locale: Locale) -> Self {
        Self::Blog {
            locale: locale.code().to_string(),
        }
    }

    pub fn post(locale: Locale, slug: &str) -> Self {
        Self::BlogPost {
            locale: locale.code().to_string(),
            slug: slug.to_string(),
        }
    }

    pub fn demo(locale: Locale) -> Self {
        Self::Demo {
            locale: locale.code().to_string(),
        }
    }

    /// Locale named by the path, if it is one we serve.
    pub fn locale(&self) -> Option<Locale> {
        let code = match self {
            Self::Home { locale }
            | Self::Blog { locale }
            | Self::BlogPost { locale, .. }
            | Self::Demo { locale } => locale.as_str(),
            Self::NotFound { segments } => segments.first().map(String::as_str).unwrap_or(""),
        };
        Locale::parse(code).ok()
    }

    /// Same page in another locale. Unmatched paths re-target their leading locale
    /// segment when there is one, else land on the locale's home page.
    pub fn with_locale(&self, locale: Locale) -> Self {
        let code = locale.code().to_string();
        match self {
            Self::Home { .. } => Self::Home { locale: code },
            Self::Blog { .. } => Self::Blog { locale: code },
            Self::BlogPost { slug, .. } => Self::BlogPost {
                locale: code,
                slug: slug.clone(),
            },
            Self::Demo { .. } => Self::Demo { locale: code },
            Self::NotFound { segments } if self.locale().is_some() => {
                let mut segments = segments.clone();
                segments[0] = code;
                Self::NotFound { segments }
            }
            Self::NotFound { .. } => Self::home(locale),
        }
    }
}

//! Supported site locales and their text direction.

use std::fmt;
use std::str::FromStr;

use unic_langid::{langid, LanguageIdentifier};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Ordered list of locales offered by the language switcher.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ar];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// Native-script name shown in the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Ar => "🇸🇦",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        match self {
            Self::En => langid!("en"),
            Self::Ar => langid!("ar"),
        }
    }

    /// The other locale; with two locales the switcher is a toggle.
    pub fn alternate(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Parse a locale code, case-insensitive and tolerant of region tags (`ar-SA`, `en_US`).
    pub fn parse(value: &str) -> Result<Self, SiteError> {
        let normalized = value.trim().to_ascii_lowercase();
        let language = normalized.split(['-', '_']).next().unwrap_or("");
        match language {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            _ => Err(SiteError::UnknownLocale(value.to_string())),
        }
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_with_region_tags() {
        assert_eq!(Locale::parse("en").unwrap(), Locale::En);
        assert_eq!(Locale::parse("AR").unwrap(), Locale::Ar);
        assert_eq!(Locale::parse("ar-SA").unwrap(), Locale::Ar);
        assert_eq!(Locale::parse(" en_US ").unwrap(), Locale::En);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!(
            Locale::parse("fr"),
            Err(SiteError::UnknownLocale(code)) if code == "fr"
        ));
        assert!(Locale::parse("").is_err());
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction().as_str(), "rtl");
        assert_eq!(Locale::En.direction().as_str(), "ltr");
        assert!(Locale::Ar.is_rtl());
    }

    #[test]
    fn alternate_round_trips() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(locale.alternate().alternate(), *locale);
            assert_ne!(locale.alternate(), *locale);
        }
    }
}

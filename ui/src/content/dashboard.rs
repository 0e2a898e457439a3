//! Sample alerts and traffic sources for the demo dashboard. Never mutated.

use crate::core::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Error,
    Success,
    Info,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Warning | Self::Error => "⚠",
            Self::Success => "✓",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertItem {
    pub id: &'static str,
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSource {
    pub source: &'static str,
    pub sessions: i64,
    /// Share of total sessions, percent.
    pub share: u8,
}

const ALERTS_EN: &[AlertItem] = &[
    AlertItem { id: "1", kind: AlertKind::Warning, message: "Event spike detected on /checkout endpoint", time: "2m ago" },
    AlertItem { id: "2", kind: AlertKind::Success, message: "Model retrain completed, accuracy +2.1%", time: "8m ago" },
    AlertItem { id: "3", kind: AlertKind::Info, message: "New integration connected: Snowflake", time: "15m ago" },
    AlertItem { id: "4", kind: AlertKind::Error, message: "Data pipeline latency exceeded 200ms threshold", time: "22m ago" },
];

const ALERTS_AR: &[AlertItem] = &[
    AlertItem { id: "1", kind: AlertKind::Warning, message: "رُصدت زيادة مفاجئة في الأحداث على نقطة /checkout", time: "قبل دقيقتين" },
    AlertItem { id: "2", kind: AlertKind::Success, message: "اكتملت إعادة تدريب النموذج، الدقة +2.1%", time: "قبل 8 دقائق" },
    AlertItem { id: "3", kind: AlertKind::Info, message: "تم ربط تكامل جديد: Snowflake", time: "قبل 15 دقيقة" },
    AlertItem { id: "4", kind: AlertKind::Error, message: "تجاوز زمن استجابة خط البيانات حد 200 مللي ثانية", time: "قبل 22 دقيقة" },
];

const SOURCES_EN: &[TrafficSource] = &[
    TrafficSource { source: "Organic Search", sessions: 18_420, share: 42 },
    TrafficSource { source: "Direct", sessions: 12_830, share: 29 },
    TrafficSource { source: "Referral", sessions: 7_210, share: 16 },
    TrafficSource { source: "Social Media", sessions: 4_560, share: 10 },
    TrafficSource { source: "Email", sessions: 1_290, share: 3 },
];

const SOURCES_AR: &[TrafficSource] = &[
    TrafficSource { source: "البحث العضوي", sessions: 18_420, share: 42 },
    TrafficSource { source: "مباشر", sessions: 12_830, share: 29 },
    TrafficSource { source: "الإحالات", sessions: 7_210, share: 16 },
    TrafficSource { source: "وسائل التواصل الاجتماعي", sessions: 4_560, share: 10 },
    TrafficSource { source: "البريد الإلكتروني", sessions: 1_290, share: 3 },
];

pub fn alerts(locale: Locale) -> &'static [AlertItem] {
    match locale {
        Locale::En => ALERTS_EN,
        Locale::Ar => ALERTS_AR,
    }
}

pub fn traffic_sources(locale: Locale) -> &'static [TrafficSource] {
    match locale {
        Locale::En => SOURCES_EN,
        Locale::Ar => SOURCES_AR,
    }
}

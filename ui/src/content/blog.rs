//! In-memory blog posts.

use crate::core::locale::Locale;
use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO `yyyy-mm-dd`.
    pub date: &'static str,
    pub read_time_minutes: u32,
    pub category: &'static str,
    pub locale: Locale,
}

const POSTS_EN: &[BlogPost] = &[
    BlogPost {
        slug: "building-realtime-analytics-pipeline",
        title: "Building a Real-Time Analytics Pipeline at Scale",
        excerpt: "How we process 50 billion events per day with sub-100ms latency using Kafka, Flink, and a purpose-built query layer.",
        date: "2024-09-12",
        read_time_minutes: 8,
        category: "Engineering",
        locale: Locale::En,
    },
    BlogPost {
        slug: "predictive-modeling-for-saas",
        title: "Predictive Modeling for SaaS: A Practical Guide",
        excerpt: "Moving beyond vanity metrics to build ML models that actually predict churn, expansion revenue, and customer health scores.",
        date: "2024-08-28",
        read_time_minutes: 6,
        category: "Product",
        locale: Locale::En,
    },
    BlogPost {
        slug: "rtl-support-data-products",
        title: "RTL Support in Data Products: Lessons Learned",
        excerpt: "Building bi-directional interfaces for Arabic and Hebrew markets taught us more about accessibility and design systems than we expected.",
        date: "2024-08-10",
        read_time_minutes: 5,
        category: "Design",
        locale: Locale::En,
    },
];

const POSTS_AR: &[BlogPost] = &[
    BlogPost {
        slug: "building-realtime-analytics-pipeline",
        title: "بناء خط أنابيب تحليلات في الوقت الفعلي على نطاق واسع",
        excerpt: "كيف نعالج 50 مليار حدث يومياً بزمن استجابة أقل من 100 مللي ثانية باستخدام Kafka وFlink وطبقة استعلام مصممة خصيصاً.",
        date: "2024-09-12",
        read_time_minutes: 8,
        category: "هندسة",
        locale: Locale::Ar,
    },
    BlogPost {
        slug: "predictive-modeling-for-saas",
        title: "النمذجة التنبؤية لـ SaaS: دليل عملي",
        excerpt: "تجاوز مقاييس الغرور لبناء نماذج تعلم آلي تتنبأ فعلياً بالاضطراب وإيرادات التوسع ودرجات صحة العملاء.",
        date: "2024-08-28",
        read_time_minutes: 6,
        category: "منتج",
        locale: Locale::Ar,
    },
    BlogPost {
        slug: "rtl-support-data-products",
        title: "دعم RTL في منتجات البيانات: دروس مستفادة",
        excerpt: "بناء واجهات ثنائية الاتجاه للأسواق العربية والعبرية علمنا الكثير عن إمكانية الوصول وأنظمة التصميم.",
        date: "2024-08-10",
        read_time_minutes: 5,
        category: "تصميم",
        locale: Locale::Ar,
    },
];

/// Posts for `locale`, newest first.
pub fn posts(locale: Locale) -> &'static [BlogPost] {
    match locale {
        Locale::En => POSTS_EN,
        Locale::Ar => POSTS_AR,
    }
}

pub fn get_post(slug: &str, locale: Locale) -> Result<&'static BlogPost, SiteError> {
    posts(locale)
        .iter()
        .find(|post| post.slug == slug)
        .ok_or_else(|| SiteError::UnknownPost {
            slug: slug.to_string(),
            locale: locale.code().to_string(),
        })
}

impl BlogPost {
    /// Frontmatter block shown on the post page.
    pub fn frontmatter(&self) -> String {
        format!(
            "---\ntitle: \"{}\"\ndate: \"{}\"\nreadTime: {}\ncategory: \"{}\"\n---",
            self.title, self.date, self.read_time_minutes, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::SUPPORTED_LOCALES;

    #[test]
    fn every_locale_has_the_same_slugs() {
        let en: Vec<_> = posts(Locale::En).iter().map(|p| p.slug).collect();
        let ar: Vec<_> = posts(Locale::Ar).iter().map(|p| p.slug).collect();
        assert_eq!(en, ar);
    }

    #[test]
    fn posts_are_tagged_with_their_locale() {
        for locale in SUPPORTED_LOCALES {
            assert!(posts(*locale).iter().all(|p| p.locale == *locale));
        }
    }

    #[test]
    fn posts_are_newest_first() {
        for locale in SUPPORTED_LOCALES {
            let dates: Vec<_> = posts(*locale).iter().map(|p| p.date).collect();
            let mut sorted = dates.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(dates, sorted);
        }
    }

    #[test]
    fn lookup_by_slug() {
        let post = get_post("predictive-modeling-for-saas", Locale::Ar).unwrap();
        assert_eq!(post.read_time_minutes, 6);
        assert_eq!(post.locale, Locale::Ar);
    }

    #[test]
    fn unknown_slug_is_an_error() {
        let err = get_post("nope", Locale::En).unwrap_err();
        assert_eq!(err.to_string(), "no blog post `nope` for locale `en`");
    }

    #[test]
    fn frontmatter_lists_fields() {
        let fm = posts(Locale::En)[0].frontmatter();
        assert!(fm.starts_with("---\ntitle: \"Building"));
        assert!(fm.contains("readTime: 8"));
        assert!(fm.ends_with("---"));
    }
}

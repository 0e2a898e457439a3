use crate::core::locale::Locale;

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Initials shown in the avatar bubble.
    pub avatar: &'static str,
}

const TESTIMONIALS_EN: &[Testimonial] = &[
    Testimonial {
        quote: "Nexora replaced three tools and a nightly batch job. Our team now spots revenue anomalies within minutes instead of days.",
        author: "Sarah Chen",
        role: "VP of Data, Lumina",
        avatar: "SC",
    },
    Testimonial {
        quote: "The churn forecasts were accurate enough that our customer success team reorganized around them in the first quarter.",
        author: "Omar Haddad",
        role: "Head of Growth, Orbitly",
        avatar: "OH",
    },
    Testimonial {
        quote: "Setup took an afternoon. The Arabic interface and RTL dashboards made rollout across our regional offices painless.",
        author: "Layla Mansour",
        role: "CTO, Souqify",
        avatar: "LM",
    },
];

const TESTIMONIALS_AR: &[Testimonial] = &[
    Testimonial {
        quote: "استبدلت نيكسورا ثلاث أدوات ومهمة معالجة ليلية. أصبح فريقنا يرصد انحرافات الإيرادات خلال دقائق بدلاً من أيام.",
        author: "سارة تشين",
        role: "نائبة رئيس البيانات، لومينا",
        avatar: "س ت",
    },
    Testimonial {
        quote: "كانت توقعات فقدان العملاء دقيقة لدرجة أن فريق نجاح العملاء أعاد تنظيم عمله حولها في الربع الأول.",
        author: "عمر حداد",
        role: "رئيس النمو، أوربيتلي",
        avatar: "ع ح",
    },
    Testimonial {
        quote: "استغرق الإعداد فترة بعد الظهر فقط. جعلت الواجهة العربية ولوحات المعلومات من اليمين لليسار النشر في مكاتبنا الإقليمية سهلاً.",
        author: "ليلى منصور",
        role: "المديرة التقنية، سوقيفاي",
        avatar: "ل م",
    },
];

pub fn testimonials(locale: Locale) -> &'static [Testimonial] {
    match locale {
        Locale::En => TESTIMONIALS_EN,
        Locale::Ar => TESTIMONIALS_AR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_testimonials_per_locale() {
        assert_eq!(testimonials(Locale::En).len(), 3);
        assert_eq!(testimonials(Locale::Ar).len(), 3);
    }
}

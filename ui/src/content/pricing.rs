//! Pricing plans and the monthly/yearly price rule.

use crate::core::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKey {
    Starter,
    Growth,
    Enterprise,
}

impl PlanKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Growth => "growth",
            Self::Enterprise => "enterprise",
        }
    }

    /// The highlighted "most popular" plan.
    pub fn is_featured(self) -> bool {
        self == Self::Growth
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Billing {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub key: PlanKey,
    /// Whole dollars per month; `None` for quote-based plans.
    pub monthly_price: Option<u32>,
    pub features: &'static [&'static str],
}

impl PricingPlan {
    /// Price shown for `billing`. Only the featured plan is discounted on yearly billing.
    pub fn price(&self, billing: Billing, yearly_discount: f64) -> Option<u32> {
        let base = self.monthly_price?;
        match billing {
            Billing::Yearly if self.key.is_featured() => {
                Some((f64::from(base) * yearly_discount).round() as u32)
            }
            _ => Some(base),
        }
    }
}

const PLANS_EN: &[PricingPlan] = &[
    PricingPlan {
        key: PlanKey::Starter,
        monthly_price: Some(0),
        features: &[
            "Up to 1M events / month",
            "3 dashboards",
            "7-day data retention",
            "Community support",
        ],
    },
    PricingPlan {
        key: PlanKey::Growth,
        monthly_price: Some(99),
        features: &[
            "Up to 100M events / month",
            "Unlimited dashboards",
            "Predictive models",
            "1-year data retention",
            "Priority support",
        ],
    },
    PricingPlan {
        key: PlanKey::Enterprise,
        monthly_price: None,
        features: &[
            "Unlimited events",
            "SSO & audit logs",
            "Dedicated infrastructure",
            "Custom retention",
            "24/7 support with SLA",
        ],
    },
];

const PLANS_AR: &[PricingPlan] = &[
    PricingPlan {
        key: PlanKey::Starter,
        monthly_price: Some(0),
        features: &[
            "حتى مليون حدث شهرياً",
            "3 لوحات معلومات",
            "الاحتفاظ بالبيانات 7 أيام",
            "دعم المجتمع",
        ],
    },
    PricingPlan {
        key: PlanKey::Growth,
        monthly_price: Some(99),
        features: &[
            "حتى 100 مليون حدث شهرياً",
            "لوحات معلومات غير محدودة",
            "نماذج تنبؤية",
            "الاحتفاظ بالبيانات سنة كاملة",
            "دعم ذو أولوية",
        ],
    },
    PricingPlan {
        key: PlanKey::Enterprise,
        monthly_price: None,
        features: &[
            "أحداث غير محدودة",
            "تسجيل دخول موحد وسجلات تدقيق",
            "بنية تحتية مخصصة",
            "مدة احتفاظ مخصصة",
            "دعم على مدار الساعة مع اتفاقية مستوى خدمة",
        ],
    },
];

pub fn plans(locale: Locale) -> &'static [PricingPlan] {
    match locale {
        Locale::En => PLANS_EN,
        Locale::Ar => PLANS_AR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(key: PlanKey) -> &'static PricingPlan {
        plans(Locale::En).iter().find(|p| p.key == key).unwrap()
    }

    #[test]
    fn yearly_discount_applies_to_growth_only() {
        assert_eq!(plan(PlanKey::Growth).price(Billing::Monthly, 0.8), Some(99));
        assert_eq!(plan(PlanKey::Growth).price(Billing::Yearly, 0.8), Some(79));
        assert_eq!(plan(PlanKey::Starter).price(Billing::Yearly, 0.8), Some(0));
        assert_eq!(plan(PlanKey::Enterprise).price(Billing::Yearly, 0.8), None);
    }

    #[test]
    fn plans_line_up_across_locales() {
        let en: Vec<_> = plans(Locale::En).iter().map(|p| (p.key, p.monthly_price, p.features.len())).collect();
        let ar: Vec<_> = plans(Locale::Ar).iter().map(|p| (p.key, p.monthly_price, p.features.len())).collect();
        assert_eq!(en, ar);
    }

    #[test]
    fn exactly_one_featured_plan() {
        assert_eq!(plans(Locale::En).iter().filter(|p| p.key.is_featured()).count(), 1);
    }
}

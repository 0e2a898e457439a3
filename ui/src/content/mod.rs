//! Locale-keyed static content. Every table is an ordered slice per locale.

pub mod blog;
pub mod dashboard;
pub mod pricing;
pub mod testimonials;

pub use blog::{get_post, posts, BlogPost};
pub use dashboard::{alerts, traffic_sources, AlertItem, AlertKind, TrafficSource};
pub use pricing::{plans, Billing, PlanKey, PricingPlan};
pub use testimonials::{testimonials, Testimonial};

/// Logos in the hero's "trusted by" strip.
pub const TRUSTED_LOGOS: &[&str] = &["Vercel", "Stripe", "Linear", "Notion", "Figma"];

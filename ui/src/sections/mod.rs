//! Landing page sections, rendered top to bottom by the home view.

mod cta;
mod features;
mod hero;
mod pricing;
mod testimonials;

pub use cta::CtaSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use pricing::PricingSection;
pub use testimonials::TestimonialsSection;

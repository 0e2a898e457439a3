//! Demo dashboard: synthetic revenue series, live metric refresher and the views
//! that render them.

pub mod chart;
pub mod engine;
pub mod series;
mod view;

pub use chart::{EventsBarChart, RevenueAreaChart};
pub use engine::{
    drive, initial_metrics, next_run_id, DashboardEngine, DashboardEvent, DashboardMetric,
    EventOutcome, MetricId, Phase, Trend,
};
pub use series::{generate_series, RevenuePoint};
pub use view::DemoDashboard;

mod transit_cost;
pub(crate) mod transit_metrics;
mod transit_mode;
mod transit_period;

pub use transit_cost::TransitCost;
pub use transit_metrics::TransitMetrics;
pub use transit_mode::TransitMode;
pub use transit_period::TransitPeriod;

mod activity_metrics;
mod class_activity;

pub use activity_metrics::ActivityMetrics;
pub use class_activity::ClassActivity;

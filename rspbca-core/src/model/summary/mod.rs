mod activity_summary;
mod bca_summary;
mod congestion_summary;
mod link_detail;
mod summary_ops;
mod transit_summary;

pub use activity_summary::ActivitySummaryRow;
pub use bca_summary::BcaSummaryRow;
pub use congestion_summary::CongestionRow;
pub use link_detail::LinkDetailRow;
pub use summary_ops::{tier_costs, tier_period_activity};
pub use transit_summary::{TransitSummaryRow, TransitTotals};

mod cost_breakdown;
mod cost_category;
mod cost_record;

pub use cost_breakdown::CostBreakdown;
pub use cost_category::CostCategory;
pub use cost_record::CostRecord;

mod vehicle_class;
mod volume_breakdown;

pub use vehicle_class::VehicleClass;
pub use volume_breakdown::{split_long_haul, VolumeBreakdown};

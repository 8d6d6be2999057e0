mod link_record;
mod network_ops;
mod network_table_error;
mod transit_segment_record;
mod vehicle_equivalent_volumes;

pub use link_record::LinkRecord;
pub use network_ops::{retain_in_region, DEFAULT_ZONE_CEILING};
pub use network_table_error::NetworkTableError;
pub use transit_segment_record::TransitSegmentRecord;
pub use vehicle_equivalent_volumes::VehicleEquivalentVolumes;

#[cfg(test)]
pub(crate) use link_record::test::mock_link;

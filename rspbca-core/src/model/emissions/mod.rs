mod emissions_bin_key;
mod emissions_engine;
mod emissions_error;
mod emissions_mode;
mod hourly_vmt;
mod pollutant;
mod rate_table;
mod road_type;
mod source_type;
mod speed_bin;

pub use emissions_bin_key::EmissionsBinKey;
pub use emissions_engine::{EmissionsEngine, EmissionsInventory};
pub use emissions_error::EmissionsError;
pub use emissions_mode::{EdaWeightedEmissions, EdaZoneShares, EmissionsMode, RegionEmissions};
pub use hourly_vmt::{disaggregate_hourly, HourlyVmt};
pub use pollutant::Pollutant;
pub use rate_table::{RateRow, RateTable, DEFAULT_DAY_ID};
pub use road_type::road_type_id;
pub use source_type::SourceType;
pub use speed_bin::avg_speed_bin_id;

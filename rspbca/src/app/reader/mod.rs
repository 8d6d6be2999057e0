//! csv loaders for every run input. each loader reads from any
//! `csv::Reader` so that tests can feed in-memory tables; the `*_file`
//! variants open a path.

mod eda_share_reader;
mod field_error;
mod geography_reader;
mod header_index;
mod link_reader;
mod parameter_reader;
mod rate_table_reader;
mod reader_ops;
mod transit_reader;

pub use eda_share_reader::{read_eda_zone_shares, read_eda_zone_shares_file};
pub use field_error::FieldError;
pub use geography_reader::{
    read_corridor_links, read_eda_geography, read_eda_link_volumes, read_geography,
    read_membership_table,
};
pub use header_index::HeaderIndex;
pub use link_reader::{read_links, read_links_file};
pub use parameter_reader::{read_parameter_table, read_parameter_table_file};
pub use rate_table_reader::{read_rate_table, read_rate_table_file, RATE_COLUMNS};
pub use reader_ops::{open_csv, read_to_string};
pub use transit_reader::{read_transit_segments, read_transit_segments_file};

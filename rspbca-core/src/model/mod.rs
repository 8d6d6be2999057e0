pub mod activity;
pub mod cost;
pub mod emissions;
pub mod geography;
mod link_evaluation;
pub mod network;
pub mod parameters;
pub mod rsp_mode;
pub mod speed;
pub mod summary;
mod time_period;
pub mod transit;
pub mod volume;

pub use link_evaluation::LinkEvaluation;
pub use time_period::TimePeriod;

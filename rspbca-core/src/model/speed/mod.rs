mod speed_ops;
mod speed_result;

pub use speed_ops::{
    congested_speed_mph, free_flow_speed_mph, is_congested, link_capacity, vdf1_speed_mph,
    DEFAULT_FREE_FLOW_MPH,
};
pub use speed_result::SpeedResult;

use serde::{Deserialize, Serialize};

/// join key between hourly link VMT and MOVES emission rates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmissionsBinKey {
    pub road_type_id: i64,
    pub avg_speed_bin_id: i64,
    /// hourID * 10 + dayID
    pub hour_day_id: i64,
    pub source_type_id: i64,
}

impl EmissionsBinKey {
    pub fn hour_day_id(hour_id: i64, day_id: i64) -> i64 {
        hour_id * 10 + day_id
    }
}

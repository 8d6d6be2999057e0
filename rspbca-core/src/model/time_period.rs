use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// one of the eight roadway assignment periods of the travel demand model.
///
/// periods are identified in the network punch by the integers 1-8, in
/// chronological order starting with the overnight period (8pm-6am).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TimePeriod {
    /// 8pm - 6am
    Overnight,
    /// 6am - 7am
    EarlyAm,
    /// 7am - 9am
    AmPeak,
    /// 9am - 10am
    LateAm,
    /// 10am - 2pm
    Midday,
    /// 2pm - 4pm
    EarlyPm,
    /// 4pm - 6pm
    PmPeak,
    /// 6pm - 8pm
    Evening,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 8] = [
        TimePeriod::Overnight,
        TimePeriod::EarlyAm,
        TimePeriod::AmPeak,
        TimePeriod::LateAm,
        TimePeriod::Midday,
        TimePeriod::EarlyPm,
        TimePeriod::PmPeak,
        TimePeriod::Evening,
    ];

    pub fn id(&self) -> i64 {
        match self {
            TimePeriod::Overnight => 1,
            TimePeriod::EarlyAm => 2,
            TimePeriod::AmPeak => 3,
            TimePeriod::LateAm => 4,
            TimePeriod::Midday => 5,
            TimePeriod::EarlyPm => 6,
            TimePeriod::PmPeak => 7,
            TimePeriod::Evening => 8,
        }
    }

    /// duration of the period used to scale hourly lane capacity. the overnight
    /// period is assigned with a 5-hour capacity even though it covers 10 clock hours.
    pub fn capacity_hours(&self) -> f64 {
        match self {
            TimePeriod::Overnight => 5.0,
            TimePeriod::EarlyAm | TimePeriod::LateAm => 1.0,
            TimePeriod::Midday => 4.0,
            TimePeriod::AmPeak | TimePeriod::EarlyPm | TimePeriod::PmPeak | TimePeriod::Evening => {
                2.0
            }
        }
    }

    /// number of clock hours actually covered by the period, used to turn period
    /// volumes into hourly volumes for emissions rate lookups.
    pub fn emissions_hours(&self) -> f64 {
        match self {
            TimePeriod::Overnight => 10.0,
            _ => self.capacity_hours(),
        }
    }

    /// the clock hours (1-24, hour ending) covered by this period. the overnight
    /// period wraps past midnight.
    pub fn clock_hours(&self) -> Vec<u8> {
        let (first, count): (u8, u8) = match self {
            TimePeriod::Overnight => (21, 10),
            TimePeriod::EarlyAm => (7, 1),
            TimePeriod::AmPeak => (8, 2),
            TimePeriod::LateAm => (10, 1),
            TimePeriod::Midday => (11, 4),
            TimePeriod::EarlyPm => (15, 2),
            TimePeriod::PmPeak => (17, 2),
            TimePeriod::Evening => (19, 2),
        };
        (first..first + count)
            .map(|hr| if hr > 24 { hr - 24 } else { hr })
            .collect()
    }
}

impl TryFrom<i64> for TimePeriod {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        TimePeriod::ALL
            .iter()
            .find(|tp| tp.id() == value)
            .copied()
            .ok_or_else(|| format!("unknown time period {value}, expected 1-8"))
    }
}

impl From<TimePeriod> for i64 {
    fn from(value: TimePeriod) -> Self {
        value.id()
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

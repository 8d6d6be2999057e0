use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// transit assignment periods. transit scenarios are numbered `x21`, `x23`,
/// `x25` and `x27` where `x` is the leading digit of the scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TransitPeriod {
    /// 6pm - 6am
    Night,
    /// 6am - 9am
    Am,
    /// 9am - 4pm
    Midday,
    /// 4pm - 6pm
    Pm,
}

impl TransitPeriod {
    pub const ALL: [TransitPeriod; 4] = [
        TransitPeriod::Night,
        TransitPeriod::Am,
        TransitPeriod::Midday,
        TransitPeriod::Pm,
    ];

    /// the last two digits of the period's scenario number
    pub fn suffix(&self) -> i64 {
        match self {
            TransitPeriod::Night => 21,
            TransitPeriod::Am => 23,
            TransitPeriod::Midday => 25,
            TransitPeriod::Pm => 27,
        }
    }

    pub fn hours(&self) -> f64 {
        match self {
            TransitPeriod::Night => 12.0,
            TransitPeriod::Am => 3.0,
            TransitPeriod::Midday => 7.0,
            TransitPeriod::Pm => 2.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransitPeriod::Night => "Night (6pm-6am)",
            TransitPeriod::Am => "AM (6am-9am)",
            TransitPeriod::Midday => "Midday (9am-4pm)",
            TransitPeriod::Pm => "PM (4pm-6pm)",
        }
    }
}

impl TryFrom<i64> for TransitPeriod {
    type Error = String;

    /// accepts a full scenario number (e.g. 721) or its two-digit suffix.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let suffix = value % 100;
        TransitPeriod::ALL
            .iter()
            .find(|tp| tp.suffix() == suffix)
            .copied()
            .ok_or_else(|| {
                format!("unknown transit period {value}, expected a scenario ending in 21, 23, 25 or 27")
            })
    }
}

impl From<TransitPeriod> for i64 {
    fn from(value: TransitPeriod) -> Self {
        value.suffix()
    }
}

impl Display for TransitPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    TravelTime,
    VehicleOperating,
    Safety,
    Noise,
    Reliability,
    Emissions,
}

impl CostCategory {
    /// categories in BCA summary column order
    pub const ALL: [CostCategory; 6] = [
        CostCategory::TravelTime,
        CostCategory::VehicleOperating,
        CostCategory::Safety,
        CostCategory::Noise,
        CostCategory::Reliability,
        CostCategory::Emissions,
    ];

    /// column heading in the BCA summary
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::TravelTime => "Total Travel Time Cost",
            CostCategory::VehicleOperating => {
                "Total Vehicle Operating Cost (based on vehicle miles)"
            }
            CostCategory::Safety => "Total Safety Cost (vehicular crashes and injuries)",
            CostCategory::Noise => "Total Noise Cost",
            CostCategory::Reliability => "Total Reliability Cost",
            CostCategory::Emissions => "Total Emissions Cost",
        }
    }
}

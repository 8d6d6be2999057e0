use serde::{Deserialize, Serialize};

/// assigned link volumes in vehicle equivalents, one value per assignment class.
/// trucks and buses are loaded onto the network with passenger-car equivalence
/// factors, so these are not vehicle counts.
///
/// the long-haul volumes are a subset of the medium and heavy truck volumes,
/// not an addition to them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleEquivalentVolumes {
    /// single-occupant auto (avauv)
    pub sov: f64,
    /// two-person auto (avh2v)
    pub hov2: f64,
    /// three-or-more-person auto (avh3v)
    pub hov3: f64,
    /// b-plate commercial vehicles (avbqv)
    pub bplate: f64,
    /// light trucks (avlqv)
    pub light_truck: f64,
    /// medium trucks (avmqv)
    pub medium_truck: f64,
    /// heavy trucks (avhqv)
    pub heavy_truck: f64,
    /// transit bus equivalents (busveq)
    pub bus: f64,
    /// medium trucks on trips over 200 miles (m200)
    pub medium_long_haul: f64,
    /// heavy trucks on trips over 200 miles (h200)
    pub heavy_long_haul: f64,
}

impl VehicleEquivalentVolumes {
    /// the link volume used for the volume/capacity ratio (volau).
    pub fn total(&self) -> f64 {
        self.sov
            + self.hov2
            + self.hov3
            + self.bplate
            + self.light_truck
            + self.medium_truck
            + self.heavy_truck
            + self.bus
    }
}

#[cfg(test)]
mod test {
    use super::VehicleEquivalentVolumes;

    #[test]
    fn test_total_excludes_long_haul_subsets() {
        let v = VehicleEquivalentVolumes {
            sov: 10.0,
            hov2: 1.0,
            hov3: 1.0,
            bplate: 2.0,
            light_truck: 3.0,
            medium_truck: 4.0,
            heavy_truck: 6.0,
            bus: 3.0,
            medium_long_haul: 2.0,
            heavy_long_haul: 3.0,
        };
        assert_eq!(v.total(), 30.0);
    }
}

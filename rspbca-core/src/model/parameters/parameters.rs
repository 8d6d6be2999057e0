use super::{ParameterError, ParameterTable};
use serde::{Deserialize, Serialize};

/// immutable set of BCA coefficients for one run. built once from the
/// parameter table and passed by reference to every stage that monetizes
/// or thresholds a quantity.
///
/// field names follow the parameter file naming, lower-cased.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Parameters {
    pub discount_rate: f64,
    /// volume/capacity ratio at or above which a link is considered congested
    pub vc_threshold: f64,
    /// converts a typical weekday into a year
    pub ann_factor: f64,
    /// average persons per vehicle for 3+ occupant autos
    pub occupancy_hov3: f64,
    /// K+A crashes per 100 million VMT on interstates
    pub safe_ikarate: f64,
    /// K+A crashes per 100 million VMT on non-interstates
    pub safe_nikarate: f64,
    /// crashes per 100 million VMT on interstates
    pub safe_icrashrate: f64,
    /// crashes per 100 million VMT on non-interstates
    pub safe_nicrashrate: f64,
    /// dollars per K+A crash
    pub safe_ka: f64,
    /// dollars per property-damage crash
    pub safe_pdo: f64,
    /// dollars per ton, by pollutant
    pub poll_ghg: f64,
    pub poll_pm25: f64,
    pub poll_voc: f64,
    pub poll_nox: f64,
    /// dollars per vehicle mile, by vehicle group and urban/rural setting
    pub n_allveh_urban: f64,
    pub n_allveh_rural: f64,
    pub n_ltruck_urban: f64,
    pub n_ltruck_rural: f64,
    pub n_bustruck_urban: f64,
    pub n_bustruck_rural: f64,
    /// operating cost per vehicle mile
    pub oc_auto: f64,
    pub oc_bplate: f64,
    pub oc_ltruck: f64,
    pub oc_mtruck: f64,
    pub oc_htruck: f64,
    pub oc_bus: f64,
    pub oc_rail: f64,
    /// value of in-vehicle time per person hour
    pub vot_inv_work: f64,
    pub vot_inv_nw: f64,
    /// value of time per vehicle hour for commercial vehicles
    pub vot_bplate: f64,
    pub vot_ltruck: f64,
    pub vot_mtruck: f64,
    pub vot_htruck: f64,
    /// present-value deflator, derived from `discount_rate` and the analysis years
    pub pv_deprec_rate: f64,
}

impl Parameters {
    /// reads every required coefficient from the table and derives the
    /// present-value deflator for a horizon year relative to a base year.
    ///
    /// `SAFE_icrashrate` is optional; when absent the non-interstate crash
    /// rate is applied to interstates as well.
    pub fn try_from_table(
        table: &ParameterTable,
        horizon_year: i32,
        base_year: i32,
    ) -> Result<Parameters, ParameterError> {
        let discount_rate = table.require("discount_rate")?;
        let safe_nicrashrate = table.require("SAFE_nicrashrate")?;
        let safe_icrashrate = match table.get("SAFE_icrashrate") {
            Some(rate) => rate,
            None => {
                log::warn!(
                    "SAFE_icrashrate not found in parameters, using SAFE_nicrashrate for interstate crashes"
                );
                safe_nicrashrate
            }
        };
        Ok(Parameters {
            discount_rate,
            vc_threshold: table.require("vc_threshold")?,
            ann_factor: table.require("ann_factor")?,
            occupancy_hov3: table.require("occupancy_hov3")?,
            safe_ikarate: table.require("SAFE_ikarate")?,
            safe_nikarate: table.require("SAFE_nikarate")?,
            safe_icrashrate,
            safe_nicrashrate,
            safe_ka: table.require("SAFE_ka")?,
            safe_pdo: table.require("SAFE_pdo")?,
            poll_ghg: table.require("POLL_ghg")?,
            poll_pm25: table.require("POLL_pm25")?,
            poll_voc: table.require("POLL_voc")?,
            poll_nox: table.require("POLL_nox")?,
            n_allveh_urban: table.require("N_allveh_urban")?,
            n_allveh_rural: table.require("N_allveh_rural")?,
            n_ltruck_urban: table.require("N_ltruck_urban")?,
            n_ltruck_rural: table.require("N_ltruck_rural")?,
            n_bustruck_urban: table.require("N_bustruck_urban")?,
            n_bustruck_rural: table.require("N_bustruck_rural")?,
            oc_auto: table.require("OC_auto")?,
            oc_bplate: table.require("OC_bplate")?,
            oc_ltruck: table.require("OC_ltruck")?,
            oc_mtruck: table.require("OC_mtruck")?,
            oc_htruck: table.require("OC_htruck")?,
            oc_bus: table.require("OC_bus")?,
            oc_rail: table.require("OC_rail")?,
            vot_inv_work: table.require("VOT_inv_work")?,
            vot_inv_nw: table.require("VOT_inv_nw")?,
            vot_bplate: table.require("VOT_bplate")?,
            vot_ltruck: table.require("VOT_ltruck")?,
            vot_mtruck: table.require("VOT_mtruck")?,
            vot_htruck: table.require("VOT_htruck")?,
            pv_deprec_rate: present_value_deflator(discount_rate, horizon_year, base_year),
        })
    }

    /// scales a daily dollar amount to an annual present value.
    pub fn annual_present_value(&self, daily_dollars: f64) -> f64 {
        daily_dollars * self.ann_factor * self.pv_deprec_rate
    }
}

/// `1 / (1 + r)^(horizon - base)`
pub fn present_value_deflator(discount_rate: f64, horizon_year: i32, base_year: i32) -> f64 {
    1.0 / (1.0 + discount_rate).powi(horizon_year - base_year)
}

#[cfg(test)]
pub(crate) mod test {
    use super::{present_value_deflator, Parameters};
    use crate::model::parameters::{ParameterError, ParameterTable};

    /// a complete parameter listing with round numbers, shared by tests across the crate.
    pub(crate) const TEST_PARAMETERS: [(&str, f64); 33] = [
        ("discount_rate", 0.0),
        ("vc_threshold", 0.8),
        ("ann_factor", 300.0),
        ("occupancy_hov3", 3.5),
        ("SAFE_ikarate", 2.0),
        ("SAFE_nikarate", 5.0),
        ("SAFE_icrashrate", 80.0),
        ("SAFE_nicrashrate", 200.0),
        ("SAFE_ka", 1_000_000.0),
        ("SAFE_pdo", 10_000.0),
        ("POLL_ghg", 50.0),
        ("POLL_pm25", 400_000.0),
        ("POLL_voc", 2_000.0),
        ("POLL_nox", 15_000.0),
        ("N_allveh_urban", 0.002),
        ("N_allveh_rural", 0.001),
        ("N_ltruck_urban", 0.02),
        ("N_ltruck_rural", 0.01),
        ("N_bustruck_urban", 0.04),
        ("N_bustruck_rural", 0.03),
        ("OC_auto", 0.4),
        ("OC_bplate", 0.5),
        ("OC_ltruck", 0.6),
        ("OC_mtruck", 0.9),
        ("OC_htruck", 1.1),
        ("OC_bus", 2.0),
        ("OC_rail", 5.0),
        ("VOT_inv_work", 30.0),
        ("VOT_inv_nw", 15.0),
        ("VOT_bplate", 35.0),
        ("VOT_ltruck", 40.0),
        ("VOT_mtruck", 45.0),
        ("VOT_htruck", 50.0),
    ];

    pub(crate) fn test_table() -> ParameterTable {
        ParameterTable::from_rows(
            TEST_PARAMETERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .expect("test parameters should parse")
    }

    /// parameters with a zero discount rate, so the deflator is exactly 1.
    pub(crate) fn test_parameters() -> Parameters {
        Parameters::try_from_table(&test_table(), 2050, 2023).expect("test parameters complete")
    }

    #[test]
    fn test_deflator() {
        let pv = present_value_deflator(0.07, 2050, 2023);
        let expected = 1.0 / 1.07_f64.powi(27);
        assert!((pv - expected).abs() < 1e-15);
        assert_eq!(present_value_deflator(0.07, 2023, 2023), 1.0);
    }

    #[test]
    fn test_deflator_derived_once_on_build() {
        let mut rows = TEST_PARAMETERS
            .iter()
            .filter(|(k, _)| *k != "discount_rate")
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>();
        rows.push((String::from("discount_rate"), String::from("0.03")));
        let table = ParameterTable::from_rows(rows).expect("parse");
        let params = Parameters::try_from_table(&table, 2050, 2023).expect("build");
        assert_eq!(params.pv_deprec_rate, present_value_deflator(0.03, 2050, 2023));
        assert!(params.pv_deprec_rate < 1.0);
    }

    #[test]
    fn test_missing_required_parameter() {
        let rows = TEST_PARAMETERS
            .iter()
            .filter(|(k, _)| *k != "OC_rail")
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let table = ParameterTable::from_rows(rows).expect("parse");
        match Parameters::try_from_table(&table, 2050, 2023) {
            Err(ParameterError::MissingParameter(name)) => assert_eq!(name, "OC_rail"),
            other => panic!("expected MissingParameter, found {other:?}"),
        }
    }

    #[test]
    fn test_interstate_crash_rate_falls_back() {
        let rows = TEST_PARAMETERS
            .iter()
            .filter(|(k, _)| *k != "SAFE_icrashrate")
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let table = ParameterTable::from_rows(rows).expect("parse");
        let params = Parameters::try_from_table(&table, 2050, 2023).expect("build");
        assert_eq!(params.safe_icrashrate, params.safe_nicrashrate);
    }
}

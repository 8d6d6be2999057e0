use super::BcaAppError;
use config::{Config, Environment};
use rspbca_core::model::{
    emissions::{EmissionsMode, Pollutant},
    network::DEFAULT_ZONE_CEILING,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// prefix of environment variables that override file values, such as
/// `RSPBCA_OUTPUT_DIRECTORY` or `RSPBCA_OVERWRITE`.
const ENV_PREFIX: &str = "RSPBCA";

/// everything needed to run one RSP benefit-cost analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfiguration {
    /// scenario identifier, e.g. "RSP35". identifiers containing "RSP00" are no-build runs.
    pub rsp_id: String,
    /// model run directory holding Database/Select_Link and Database/Select_Line.
    /// when absent the mode follows `rsp_id` and `geography`.
    pub run_directory: Option<PathBuf>,
    pub parameters_file: PathBuf,
    /// roadway link punch, one row per link and time period
    pub roadway_file: PathBuf,
    /// transit segment punch. transit metrics are skipped when absent.
    pub transit_file: Option<PathBuf>,
    #[serde(default)]
    pub geography: GeographySource,
    /// MOVES rate tables. emissions are skipped when absent.
    pub rate_tables: Option<RateTableFiles>,
    /// zone EDA population shares, required by the eda_weighted emissions mode
    pub eda_zone_share_file: Option<PathBuf>,
    #[serde(default)]
    pub emissions_mode: EmissionsMode,
    #[serde(default = "default_horizon_year")]
    pub horizon_year: i32,
    #[serde(default = "default_base_year")]
    pub base_year: i32,
    #[serde(default = "default_zone_ceiling")]
    pub zone_ceiling: i64,
    pub output_directory: PathBuf,
    #[serde(default)]
    pub write_link_details: bool,
    #[serde(default)]
    pub overwrite: bool,
}

/// where project, corridor and EDA link membership comes from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeographySource {
    /// a csv with columns i_node, j_node, project, corridor and eda
    MembershipTable { file: PathBuf },
    /// the assignment model's selection outputs
    SelectionFiles {
        /// select-link file of project links
        project_links_file: Option<PathBuf>,
        /// csv of corridor links (INODE, JNODE)
        corridor_links_file: Option<PathBuf>,
        /// csv of EDA trip volumes by link (inode, jnode, ejvol)
        eda_link_volume_file: Option<PathBuf>,
    },
    /// no link belongs to a project geography
    #[default]
    None,
}

/// one MOVES running-rate query output per pollutant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateTableFiles {
    pub co2e: Option<PathBuf>,
    pub pm25: Option<PathBuf>,
    pub voc: Option<PathBuf>,
    pub nox: Option<PathBuf>,
}

impl RateTableFiles {
    /// the configured files, paired with their pollutant
    pub fn files(&self) -> Vec<(Pollutant, &Path)> {
        [
            (Pollutant::Co2e, &self.co2e),
            (Pollutant::Pm25, &self.pm25),
            (Pollutant::Voc, &self.voc),
            (Pollutant::Nox, &self.nox),
        ]
        .into_iter()
        .filter_map(|(p, f)| f.as_deref().map(|f| (p, f)))
        .collect()
    }
}

fn default_horizon_year() -> i32 {
    2050
}

fn default_base_year() -> i32 {
    2023
}

fn default_zone_ceiling() -> i64 {
    DEFAULT_ZONE_CEILING
}

impl RunConfiguration {
    /// reads a .toml or .json run configuration, applying any `RSPBCA_`
    /// environment overrides.
    pub fn from_file(filepath: &Path) -> Result<RunConfiguration, BcaAppError> {
        let filename = filepath.to_string_lossy().to_string();
        let config = Config::builder()
            .add_source(config::File::from(filepath))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| BcaAppError::ConfigReadError {
                msg: format!("failed reading '{filename}'"),
                source: e,
            })?;
        let conf = config
            .try_deserialize::<RunConfiguration>()
            .map_err(|e| BcaAppError::ConfigReadError {
                msg: format!("failed deserializing '{filename}'"),
                source: e,
            })?;
        conf.validate()?;
        Ok(conf)
    }

    /// checks for settings that can never produce a run.
    pub fn validate(&self) -> Result<(), BcaAppError> {
        if self.rsp_id.trim().is_empty() {
            return Err(BcaAppError::InvalidConfiguration(String::from(
                "rsp_id must not be empty",
            )));
        }
        if self.horizon_year < self.base_year {
            return Err(BcaAppError::InvalidConfiguration(format!(
                "horizon_year {} precedes base_year {}",
                self.horizon_year, self.base_year
            )));
        }
        if self.zone_ceiling < 1 {
            return Err(BcaAppError::InvalidConfiguration(format!(
                "zone_ceiling must be positive, found {}",
                self.zone_ceiling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{GeographySource, RunConfiguration};
    use rspbca_core::model::emissions::{EmissionsMode, Pollutant};
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("rspbca_run_configuration_test")
            .join(name.replace('.', "_"));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_toml_with_defaults() {
        let path = write_config(
            "defaults.toml",
            r#"
            rsp_id = "RSP35"
            parameters_file = "parameters.csv"
            roadway_file = "punchlink.csv"
            output_directory = "out"

            [geography]
            type = "selection_files"
            project_links_file = "RSP35_proj_links.txt"

            [rate_tables]
            co2e = "ghg.csv"
            pm25 = "pm.csv"
            "#,
        );
        let conf = RunConfiguration::from_file(&path).expect("valid configuration");
        assert_eq!(conf.rsp_id, "RSP35");
        assert_eq!(conf.horizon_year, 2050);
        assert_eq!(conf.base_year, 2023);
        assert_eq!(conf.zone_ceiling, 2926);
        assert_eq!(conf.emissions_mode, EmissionsMode::RegionTotals);
        assert!(!conf.overwrite);
        assert!(!conf.write_link_details);
        match conf.geography {
            GeographySource::SelectionFiles {
                project_links_file,
                corridor_links_file,
                ..
            } => {
                assert_eq!(project_links_file, Some(PathBuf::from("RSP35_proj_links.txt")));
                assert!(corridor_links_file.is_none());
            }
            other => panic!("expected selection files, found {other:?}"),
        }
        let rates = conf.rate_tables.expect("rate tables");
        let pollutants = rates.files().iter().map(|(p, _)| *p).collect::<Vec<_>>();
        assert_eq!(pollutants, vec![Pollutant::Co2e, Pollutant::Pm25]);
    }

    #[test]
    fn test_json_configuration() {
        let path = write_config(
            "eda.json",
            r#"{
                "rsp_id": "RSP00",
                "parameters_file": "parameters.csv",
                "roadway_file": "punchlink.csv",
                "output_directory": "out",
                "emissions_mode": "eda_weighted",
                "horizon_year": 2030
            }"#,
        );
        let conf = RunConfiguration::from_file(&path).expect("valid configuration");
        assert_eq!(conf.emissions_mode, EmissionsMode::EdaWeighted);
        assert_eq!(conf.horizon_year, 2030);
        assert!(matches!(conf.geography, GeographySource::None));
    }

    #[test]
    fn test_horizon_before_base_is_invalid() {
        let path = write_config(
            "invalid.toml",
            r#"
            rsp_id = "RSP35"
            parameters_file = "parameters.csv"
            roadway_file = "punchlink.csv"
            output_directory = "out"
            horizon_year = 2020
            "#,
        );
        assert!(RunConfiguration::from_file(&path).is_err());
    }
}

use super::{bca, mode_ops, BcaAppError, RunConfiguration};
use clap::{Parser, Subcommand};
use rspbca_core::model::emissions::avg_speed_bin_id;
use std::path::PathBuf;

/// benefit-cost analysis of Regionally Significant Project scenarios
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BcaApp {
    #[command(subcommand)]
    pub op: BcaOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BcaOperation {
    /// run the full analysis for one scenario
    Run {
        #[arg(long, help = "path to .toml or .json run configuration")]
        config: PathBuf,
    },
    /// print the RSP mode detected from a model run directory
    Mode {
        #[arg(long, help = "model run directory containing Database/Select_Link and Database/Select_Line")]
        run_directory: PathBuf,
        #[arg(long, help = "scenario identifier, e.g. RSP35")]
        rsp_id: String,
    },
    /// print the MOVES avgSpeedBinID of a speed in mph
    SpeedBin { mph: f64 },
}

impl BcaOperation {
    pub fn run(&self) -> Result<(), BcaAppError> {
        match self {
            BcaOperation::Run { config } => {
                log::info!("reading run configuration from {config:?}");
                let conf = RunConfiguration::from_file(config)?;
                let results = bca::run(&conf)?;
                for row in results.bca.iter() {
                    println!("{}: {:.2}", row.geog, row.costs.total());
                }
                Ok(())
            }
            BcaOperation::Mode {
                run_directory,
                rsp_id,
            } => {
                let mode = mode_ops::detect_mode(run_directory, rsp_id)?;
                let tiers = mode
                    .tiers()
                    .iter()
                    .map(|t| t.label(rsp_id))
                    .collect::<Vec<_>>();
                println!("{mode} ({})", tiers.join(", "));
                Ok(())
            }
            BcaOperation::SpeedBin { mph } => {
                println!("{}", avg_speed_bin_id(*mph));
                Ok(())
            }
        }
    }
}

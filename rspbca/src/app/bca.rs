//! the full benefit-cost pipeline for one RSP scenario: load inputs, carry
//! every link through the link pipeline, add transit and emissions, then
//! summarize by geography tier and write the outputs.

use super::{
    mode_ops,
    reader::{
        read_eda_geography, read_eda_zone_shares_file, read_geography, read_links_file,
        read_parameter_table_file, read_rate_table_file, read_transit_segments_file,
    },
    writer::{create_dirs, write_records, write_rows, OutputFile},
    BcaAppError, RunConfiguration,
};
use kdam::tqdm;
use rspbca_core::model::{
    cost::CostRecord,
    emissions::{
        EdaWeightedEmissions, EmissionsEngine, EmissionsInventory, EmissionsMode, RegionEmissions,
    },
    geography::GeographyTagger,
    network::{retain_in_region, LinkRecord},
    parameters::Parameters,
    rsp_mode::RspMode,
    summary::{ActivitySummaryRow, BcaSummaryRow, CongestionRow, LinkDetailRow, TransitTotals},
    LinkEvaluation,
};

/// regional emissions in the form of the configured emissions mode.
#[derive(Clone, Debug, PartialEq)]
pub enum EmissionsSummary {
    RegionTotals(RegionEmissions),
    EdaWeighted(EdaWeightedEmissions),
}

impl EmissionsSummary {
    /// the monetized emissions cost added to the region's BCA row. EDA
    /// weighted emissions are reported in grams only.
    pub fn cost_record(&self) -> CostRecord {
        match self {
            EmissionsSummary::RegionTotals(r) => CostRecord {
                emissions: r.total_r_emissions,
                ..Default::default()
            },
            EmissionsSummary::EdaWeighted(_) => CostRecord::default(),
        }
    }
}

/// everything a run computed, before writing.
#[derive(Clone, Debug)]
pub struct BcaResults {
    pub mode: RspMode,
    pub evaluations: Vec<LinkEvaluation>,
    pub activity: Vec<ActivitySummaryRow>,
    pub congestion: Vec<CongestionRow>,
    pub transit: Option<TransitTotals>,
    pub emissions: Option<EmissionsSummary>,
    pub bca: Vec<BcaSummaryRow>,
}

/// runs the analysis described by `conf` and writes its outputs.
pub fn run(conf: &RunConfiguration) -> Result<BcaResults, BcaAppError> {
    let start = chrono::Local::now();
    log::info!("starting benefit-cost analysis of {} at {start}", conf.rsp_id);
    log::debug!("{}", serde_json::to_string_pretty(conf)?);

    let results = compute(conf)?;
    write_outputs(conf, &results)?;

    let elapsed = chrono::Local::now() - start;
    log::info!(
        "finished {} ({} mode) in {:.1} seconds",
        conf.rsp_id,
        results.mode,
        elapsed.num_milliseconds() as f64 / 1000.0
    );
    Ok(results)
}

/// loads the inputs and computes every summary without writing anything.
pub fn compute(conf: &RunConfiguration) -> Result<BcaResults, BcaAppError> {
    let mode = match &conf.run_directory {
        Some(dir) => mode_ops::detect_mode(dir, &conf.rsp_id)?,
        None => mode_ops::mode_from_geography(&conf.rsp_id, &conf.geography),
    };
    log::info!("{} is a {mode} scenario", conf.rsp_id);

    let table = read_parameter_table_file(&conf.parameters_file)?;
    let parameters = Parameters::try_from_table(&table, conf.horizon_year, conf.base_year)?;
    log::debug!(
        "present value deflator {:.6} for {} from {}",
        parameters.pv_deprec_rate,
        conf.horizon_year,
        conf.base_year
    );

    let mut links = read_links_file(&conf.roadway_file)?;
    retain_in_region(&mut links, conf.zone_ceiling);

    // no-build runs carry EDA volumes but no project or corridor links
    let tagger: Box<dyn GeographyTagger> = match mode {
        RspMode::NoBuild => read_eda_geography(&conf.geography)?,
        RspMode::Roadway | RspMode::Transit => read_geography(&conf.geography)?,
    };
    let evaluations = evaluate_links(links, tagger.as_ref(), &parameters);

    let transit = match &conf.transit_file {
        Some(file) => {
            let segments = read_transit_segments_file(file)?;
            Some(TransitTotals::compute(&segments, &parameters))
        }
        None => {
            log::warn!("no transit_file configured, transit metrics and costs are skipped");
            None
        }
    };

    let emissions = compute_emissions(conf, &evaluations, &parameters)?;

    let tiers = mode.tiers();
    let activity = ActivitySummaryRow::build(&evaluations, &tiers, &conf.rsp_id);
    let congestion = CongestionRow::build(&evaluations, &tiers);
    let mut region_extra = vec![];
    if let Some(t) = &transit {
        region_extra.push(t.cost.cost_record());
    }
    if let Some(e) = &emissions {
        region_extra.push(e.cost_record());
    }
    let bca = BcaSummaryRow::build(&evaluations, &tiers, &conf.rsp_id, &region_extra);

    Ok(BcaResults {
        mode,
        evaluations,
        activity,
        congestion,
        transit,
        emissions,
        bca,
    })
}

/// tags each link and runs it through the link pipeline. links the tagger
/// does not know are outside of every project geography.
pub fn evaluate_links(
    links: Vec<LinkRecord>,
    tagger: &dyn GeographyTagger,
    parameters: &Parameters,
) -> Vec<LinkEvaluation> {
    let total = links.len();
    let mut misses: usize = 0;
    let mut evaluations = Vec::with_capacity(total);
    for link in tqdm!(links.into_iter(), total = total, desc = "evaluate links") {
        let membership = match tagger.membership(link.i_node, link.j_node) {
            Some(m) => m,
            None => {
                misses += 1;
                Default::default()
            }
        };
        evaluations.push(LinkEvaluation::evaluate(link, membership, parameters));
    }
    if !tagger.is_empty() {
        log::info!(
            "{} of {total} link rows have a geography membership",
            total - misses
        );
    }
    evaluations
}

/// joins link activity against the rate tables in the configured mode. runs
/// without rate tables have no emissions.
fn compute_emissions(
    conf: &RunConfiguration,
    evaluations: &[LinkEvaluation],
    parameters: &Parameters,
) -> Result<Option<EmissionsSummary>, BcaAppError> {
    let Some(files) = &conf.rate_tables else {
        log::warn!("no rate_tables configured, emissions are skipped");
        return Ok(None);
    };
    let mode = conf.emissions_mode;
    let tables = files
        .files()
        .into_iter()
        .filter(|(p, _)| mode.required_pollutants().contains(p))
        .map(|(p, f)| read_rate_table_file(f, p))
        .collect::<Result<Vec<_>, _>>()?;
    let zone_shares = match (&conf.eda_zone_share_file, mode) {
        (Some(file), EmissionsMode::EdaWeighted) => Some(read_eda_zone_shares_file(file)?),
        _ => None,
    };
    let engine = EmissionsEngine::new(mode, tables, zone_shares)?;

    let mut inventory = EmissionsInventory::default();
    for e in tqdm!(evaluations.iter(), desc = "emissions") {
        engine.add_link(&mut inventory, &e.link, &e.speed, &e.activity);
    }
    inventory.log_misses(mode);
    log::info!(
        "binned {:.0} VMT into {} hourly rows for {mode} emissions",
        inventory.vmt,
        inventory.rows
    );
    let summary = match mode {
        EmissionsMode::RegionTotals => {
            EmissionsSummary::RegionTotals(RegionEmissions::new(&inventory, parameters))
        }
        EmissionsMode::EdaWeighted => {
            EmissionsSummary::EdaWeighted(EdaWeightedEmissions::new(&inventory))
        }
    };
    Ok(Some(summary))
}

/// writes every output of a run into the output directory.
pub fn write_outputs(conf: &RunConfiguration, results: &BcaResults) -> Result<(), BcaAppError> {
    let dir = conf.output_directory.as_path();
    let overwrite = conf.overwrite;
    create_dirs(dir)?;

    write_records(
        dir,
        OutputFile::RoadwaySummary,
        &ActivitySummaryRow::header(),
        results.activity.iter().map(|r| r.record()),
        overwrite,
    )?;
    if let Some(transit) = &results.transit {
        write_rows(dir, OutputFile::TransitSummary, &transit.rows, overwrite)?;
    }
    write_records(
        dir,
        OutputFile::BcaSummary,
        &BcaSummaryRow::header(),
        results.bca.iter().map(|r| r.record()),
        overwrite,
    )?;
    write_rows(dir, OutputFile::Congestion, &results.congestion, overwrite)?;
    match &results.emissions {
        Some(EmissionsSummary::RegionTotals(r)) => {
            write_rows(dir, OutputFile::Emissions, [r], overwrite)?;
        }
        Some(EmissionsSummary::EdaWeighted(e)) => {
            write_rows(dir, OutputFile::Emissions, [e], overwrite)?;
        }
        None => {}
    }
    if conf.write_link_details {
        let details = results
            .evaluations
            .iter()
            .map(LinkDetailRow::from)
            .collect::<Vec<_>>();
        write_rows(dir, OutputFile::LinkDetails, &details, overwrite)?;
    }
    Ok(())
}

use std::fmt::Display;

/// the files a run writes into its output directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFile {
    RoadwaySummary,
    TransitSummary,
    BcaSummary,
    Congestion,
    Emissions,
    LinkDetails,
}

impl OutputFile {
    pub fn filename(&self) -> &'static str {
        match self {
            OutputFile::RoadwaySummary => "hwysummary_out.csv",
            OutputFile::TransitSummary => "trntsummary_out.csv",
            OutputFile::BcaSummary => "bcasummary_out.csv",
            OutputFile::Congestion => "congestion_factors.csv",
            OutputFile::Emissions => "emissions.csv",
            OutputFile::LinkDetails => "link_details.csv",
        }
    }
}

impl Display for OutputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename())
    }
}

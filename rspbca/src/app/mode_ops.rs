use super::{BcaAppError, GeographySource};
use rspbca_core::model::rsp_mode::{RspMode, RunModeError};
use std::path::Path;

/// counts the select-link and select-line files of a model run and decides the RSP mode.
pub fn detect_mode(run_directory: &Path, rsp_id: &str) -> Result<RspMode, BcaAppError> {
    let database = run_directory.join("Database");
    let links = count_selection_files(&database.join("Select_Link"))?;
    let lines = count_selection_files(&database.join("Select_Line"))?;
    log::debug!("found {links} select-link and {lines} select-line files in {database:?}");
    let mode = RspMode::from_selection_counts(rsp_id, links, lines)?;
    Ok(mode)
}

/// mode of a run without a run directory: no-build ids and runs without any
/// project geography are no-build, everything else is a roadway project.
pub fn mode_from_geography(rsp_id: &str, geography: &GeographySource) -> RspMode {
    match geography {
        _ if RspMode::is_no_build_id(rsp_id) => RspMode::NoBuild,
        GeographySource::None => RspMode::NoBuild,
        GeographySource::MembershipTable { .. } | GeographySource::SelectionFiles { .. } => {
            RspMode::Roadway
        }
    }
}

/// number of `.txt` files in `directory`. a missing directory holds none.
fn count_selection_files(directory: &Path) -> Result<usize, RunModeError> {
    if !directory.is_dir() {
        return Ok(0);
    }
    let to_error = |e: std::io::Error| RunModeError::SelectionDirectory {
        path: directory.to_string_lossy().to_string(),
        msg: e.to_string(),
    };
    let mut count = 0;
    for entry in std::fs::read_dir(directory).map_err(to_error)? {
        let path = entry.map_err(to_error)?.path();
        let is_txt = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or_default();
        if path.is_file() && is_txt {
            count += 1;
        }
    }
    Ok(count)
}

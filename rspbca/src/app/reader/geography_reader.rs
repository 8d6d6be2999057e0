use super::{
    open_csv, read_to_string,
    reader_ops::{csv_error, headers},
    HeaderIndex,
};
use crate::app::{BcaAppError, GeographySource};
use rspbca_core::model::geography::{
    select_link::parse_select_link_file, GeographyError, GeographyMembership, GeographyTagger,
    LinkSetTagger, NoGeography,
};
use std::{io::Read, path::Path};

/// builds the link membership lookup from the configured source.
pub fn read_geography(source: &GeographySource) -> Result<Box<dyn GeographyTagger>, BcaAppError> {
    match source {
        GeographySource::None => {
            log::info!("no project geography configured, only the region is tagged");
            Ok(Box::new(NoGeography))
        }
        GeographySource::MembershipTable { file } => {
            let reader = open_csv(file)?;
            let tagger = read_membership_table(reader, &file.to_string_lossy())?;
            Ok(Box::new(tagger))
        }
        GeographySource::SelectionFiles {
            project_links_file,
            corridor_links_file,
            eda_link_volume_file,
        } => {
            let mut tagger = LinkSetTagger::new();
            if let Some(file) = project_links_file {
                read_project_links(file, &mut tagger)?;
            }
            if let Some(file) = corridor_links_file {
                let reader = open_csv(file)?;
                read_corridor_links(reader, &file.to_string_lossy(), &mut tagger)?;
            }
            if let Some(file) = eda_link_volume_file {
                let reader = open_csv(file)?;
                read_eda_link_volumes(reader, &file.to_string_lossy(), &mut tagger)?;
            }
            log::info!(
                "tagged {} project links and {} corridor links",
                tagger.project_link_count(),
                tagger.corridor_link_count()
            );
            Ok(Box::new(tagger))
        }
    }
}

/// builds the lookup for a no-build run, which reports only the region. the
/// project and corridor selections are skipped and only EDA link volumes are
/// kept.
pub fn read_eda_geography(
    source: &GeographySource,
) -> Result<Box<dyn GeographyTagger>, BcaAppError> {
    let tagger = match source {
        GeographySource::None => return Ok(Box::new(NoGeography)),
        GeographySource::MembershipTable { file } => {
            let reader = open_csv(file)?;
            let mut tagger = read_membership_table(reader, &file.to_string_lossy())?;
            tagger.retain_eda();
            tagger
        }
        GeographySource::SelectionFiles {
            eda_link_volume_file,
            ..
        } => {
            let mut tagger = LinkSetTagger::new();
            if let Some(file) = eda_link_volume_file {
                let reader = open_csv(file)?;
                read_eda_link_volumes(reader, &file.to_string_lossy(), &mut tagger)?;
            }
            tagger
        }
    };
    log::info!("tagged {} EDA links for the region", tagger.len());
    Ok(Box::new(tagger))
}

fn read_project_links(file: &Path, tagger: &mut LinkSetTagger) -> Result<(), BcaAppError> {
    let filename = file.to_string_lossy();
    let contents = read_to_string(file)?;
    let links = parse_select_link_file(&contents, &filename)?;
    if links.is_empty() {
        log::warn!("select-link file {filename} selects no links");
    }
    for (i_node, j_node) in links {
        tagger.add_project_link(i_node, j_node);
    }
    Ok(())
}

/// reads a membership table with columns i_node, j_node, project, corridor
/// and optionally eda and ejvol. flags are 0/1 or true/false.
pub fn read_membership_table<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
) -> Result<LinkSetTagger, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let mut tagger = LinkSetTagger::new();
    let cols = MembershipColumns::new(&index)?;
    for (idx, row) in reader.records().enumerate() {
        let record = row.map_err(csv_error(file))?;
        let (i_node, j_node, membership) = cols.read(&index, &record, idx + 1)?;
        tagger.insert(i_node, j_node, membership);
    }
    log::info!("read {} link memberships from {file}", tagger.len());
    Ok(tagger)
}

struct MembershipColumns {
    i_node: usize,
    j_node: usize,
    project: usize,
    corridor: usize,
    eda: Option<usize>,
    eda_volume: Option<usize>,
}

impl MembershipColumns {
    fn new(index: &HeaderIndex) -> Result<MembershipColumns, GeographyError> {
        Ok(MembershipColumns {
            i_node: index.require(&["i_node", "inode"])?,
            j_node: index.require(&["j_node", "jnode"])?,
            project: index.require(&["project", "projlink"])?,
            corridor: index.require(&["corridor", "corrlink"])?,
            eda: index.find(&["eda"]),
            eda_volume: index.find(&["ejvol", "eda_volume"]),
        })
    }

    fn read(
        &self,
        index: &HeaderIndex,
        record: &csv::StringRecord,
        row: usize,
    ) -> Result<(i64, i64, GeographyMembership), GeographyError> {
        let eda_volume = index.optional_f64_at(record, row, self.eda_volume)?;
        let eda = match self.eda {
            Some(idx) => index.bool_at(record, row, idx)?,
            None => eda_volume > 0.0,
        };
        let membership = GeographyMembership {
            project: index.bool_at(record, row, self.project)?,
            corridor: index.bool_at(record, row, self.corridor)?,
            eda,
            eda_volume,
        };
        Ok((
            index.i64_at(record, row, self.i_node)?,
            index.i64_at(record, row, self.j_node)?,
            membership,
        ))
    }
}

/// reads the corridor link listing (INODE, JNODE) into `tagger`.
pub fn read_corridor_links<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
    tagger: &mut LinkSetTagger,
) -> Result<usize, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let (i_col, j_col) = link_columns(&index)?;
    let mut count = 0;
    for (idx, row) in reader.records().enumerate() {
        let record = row.map_err(csv_error(file))?;
        let (i_node, j_node) = link_at(&index, &record, idx + 1, i_col, j_col)?;
        tagger.add_corridor_link(i_node, j_node);
        count += 1;
    }
    log::debug!("read {count} corridor links from {file}");
    Ok(count)
}

/// reads daily EDA trip volumes by link (inode, jnode, ejvol) into `tagger`.
/// links with no EDA volume are not EDA links.
pub fn read_eda_link_volumes<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
    tagger: &mut LinkSetTagger,
) -> Result<usize, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let (i_col, j_col) = link_columns(&index)?;
    let vol_col = index
        .require(&["ejvol", "eda_volume"])
        .map_err(GeographyError::from)?;
    let mut count = 0;
    for (idx, row) in reader.records().enumerate() {
        let record = row.map_err(csv_error(file))?;
        let row = idx + 1;
        let (i_node, j_node) = link_at(&index, &record, row, i_col, j_col)?;
        let volume = index
            .f64_at(&record, row, vol_col)
            .map_err(GeographyError::from)?;
        if volume > 0.0 {
            tagger.add_eda_volume(i_node, j_node, volume);
            count += 1;
        }
    }
    log::debug!("read {count} links with EDA volume from {file}");
    Ok(count)
}

fn link_columns(index: &HeaderIndex) -> Result<(usize, usize), GeographyError> {
    Ok((
        index.require(&["inode", "i_node"])?,
        index.require(&["jnode", "j_node"])?,
    ))
}

fn link_at(
    index: &HeaderIndex,
    record: &csv::StringRecord,
    row: usize,
    i_col: usize,
    j_col: usize,
) -> Result<(i64, i64), GeographyError> {
    Ok((
        index.i64_at(record, row, i_col)?,
        index.i64_at(record, row, j_col)?,
    ))
}

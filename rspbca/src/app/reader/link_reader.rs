use super::{
    reader_ops::{csv_error, headers, open_csv},
    HeaderIndex,
};
use crate::app::BcaAppError;
use kdam::tqdm;
use rspbca_core::model::{
    network::{LinkRecord, NetworkTableError, VehicleEquivalentVolumes},
    TimePeriod,
};
use std::{io::Read, path::Path};
use uom::si::f64::{Length, Time};
use uom::si::{length::mile, time::minute};

/// column positions of the roadway link punch
struct LinkColumns {
    i_node: usize,
    j_node: usize,
    time_period: usize,
    length: usize,
    lanes: usize,
    vdf: usize,
    zone: usize,
    area_type: usize,
    emcap: usize,
    timau: usize,
    ftime: usize,
    sov: usize,
    hov2: usize,
    hov3: usize,
    bplate: usize,
    light_truck: usize,
    medium_truck: usize,
    heavy_truck: usize,
    bus: usize,
    medium_long_haul: Option<usize>,
    heavy_long_haul: Option<usize>,
}

impl LinkColumns {
    fn new(index: &HeaderIndex) -> Result<LinkColumns, NetworkTableError> {
        Ok(LinkColumns {
            i_node: index.require(&["i_node", "inode"])?,
            j_node: index.require(&["j_node", "jnode"])?,
            time_period: index.require(&["timeperiod", "time_period"])?,
            length: index.require(&["length", "len"])?,
            lanes: index.require(&["lanes", "lan"])?,
            vdf: index.require(&["vdf"])?,
            zone: index.require(&["zone"])?,
            area_type: index.require(&["area_type", "atype"])?,
            emcap: index.require(&["emcap"])?,
            timau: index.require(&["timau"])?,
            ftime: index.require(&["ftime"])?,
            sov: index.require(&["avauv", "sov"])?,
            hov2: index.require(&["avh2v", "hov2"])?,
            hov3: index.require(&["avh3v", "hov3"])?,
            bplate: index.require(&["avbqv", "bplate"])?,
            light_truck: index.require(&["avlqv", "light_truck"])?,
            medium_truck: index.require(&["avmqv", "medium_truck"])?,
            heavy_truck: index.require(&["avhqv", "heavy_truck"])?,
            bus: index.require(&["busveq", "bus"])?,
            medium_long_haul: index.find(&["m200", "medium_long_haul"]),
            heavy_long_haul: index.find(&["h200", "heavy_long_haul"]),
        })
    }
}

/// reads the roadway link punch: one row per directed link and time period,
/// with volumes in vehicle equivalents. long-haul truck columns are optional.
pub fn read_links<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
) -> Result<Vec<LinkRecord>, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let cols = LinkColumns::new(&index)?;
    if cols.medium_long_haul.is_none() || cols.heavy_long_haul.is_none() {
        log::warn!("{file} has no long-haul truck columns (m200, h200), all trucks are short-haul");
    }
    let mut links = vec![];
    for (idx, row) in tqdm!(reader.records().enumerate(), desc = "read links") {
        let record = row.map_err(csv_error(file))?;
        let row = idx + 1;
        links.push(read_link(&index, &cols, &record, row)?);
    }
    if links.is_empty() {
        return Err(NetworkTableError::EmptyTable {
            file: file.to_string(),
        }
        .into());
    }
    log::info!("read {} link rows from {file}", links.len());
    Ok(links)
}

pub fn read_links_file(path: &Path) -> Result<Vec<LinkRecord>, BcaAppError> {
    let reader = open_csv(path)?;
    read_links(reader, &path.to_string_lossy())
}

fn read_link(
    index: &HeaderIndex,
    cols: &LinkColumns,
    record: &csv::StringRecord,
    row: usize,
) -> Result<LinkRecord, NetworkTableError> {
    let f = |idx: usize| index.f64_at(record, row, idx);
    let i = |idx: usize| index.i64_at(record, row, idx);
    let time_period = TimePeriod::try_from(i(cols.time_period)?).map_err(|msg| {
        NetworkTableError::UnknownTimePeriod {
            file: index.file().to_string(),
            row,
            msg,
        }
    })?;
    let volumes = VehicleEquivalentVolumes {
        sov: f(cols.sov)?,
        hov2: f(cols.hov2)?,
        hov3: f(cols.hov3)?,
        bplate: f(cols.bplate)?,
        light_truck: f(cols.light_truck)?,
        medium_truck: f(cols.medium_truck)?,
        heavy_truck: f(cols.heavy_truck)?,
        bus: f(cols.bus)?,
        medium_long_haul: index.optional_f64_at(record, row, cols.medium_long_haul)?,
        heavy_long_haul: index.optional_f64_at(record, row, cols.heavy_long_haul)?,
    };
    Ok(LinkRecord {
        i_node: i(cols.i_node)?,
        j_node: i(cols.j_node)?,
        time_period,
        length: Length::new::<mile>(f(cols.length)?),
        lanes: i(cols.lanes)?,
        vdf: i(cols.vdf)?,
        zone: i(cols.zone)?,
        area_type: i(cols.area_type)?,
        emcap: f(cols.emcap)?,
        congested_time: Time::new::<minute>(f(cols.timau)?),
        free_flow_time: Time::new::<minute>(f(cols.ftime)?),
        volumes,
    })
}

#[cfg(test)]
mod test {
    use super::read_links;
    use crate::app::BcaAppError;
    use rspbca_core::model::{network::NetworkTableError, TimePeriod};

    const HEADER: &str = "i_node,j_node,timeperiod,len,lan,vdf,@zone,@emcap,timau,@ftime,@avauv,@avh2v,@avh3v,@avbqv,@avlqv,@avmqv,@avhqv,@busveq,@atype,@m200,@h200";

    #[test]
    fn test_reads_punch_with_model_headers() {
        let text = format!(
            "{HEADER}\n\
             1001,1002,2,1.0,2.0,1,100,900,3,2,100,0,0,0,0,0,0,0,5,0,0\n\
             1002,1003,5,0.5,3,2,2000,1800,1.0,0.8,1000,200,50,40,30,60,90,9,2,12,30\n"
        );
        let links = read_links(csv::Reader::from_reader(text.as_bytes()), "punchlink.csv")
            .expect("valid punch");
        assert_eq!(links.len(), 2);
        let first = &links[0];
        assert_eq!(first.time_period, TimePeriod::EarlyAm);
        assert_eq!(first.lanes, 2);
        assert_eq!(first.area_type, 5);
        assert_eq!(first.length_miles(), 1.0);
        assert_eq!(first.volumes.sov, 100.0);
        let second = &links[1];
        assert_eq!(second.time_period, TimePeriod::Midday);
        assert_eq!(second.volumes.heavy_long_haul, 30.0);
        assert_eq!(second.volumes.bus, 9.0);
    }

    #[test]
    fn test_long_haul_columns_are_optional() {
        let header = "i_node,j_node,timeperiod,length,lanes,vdf,zone,emcap,timau,ftime,avauv,avh2v,avh3v,avbqv,avlqv,avmqv,avhqv,busveq,atype";
        let text = format!("{header}\n1,2,1,1,1,1,1,900,1,1,10,0,0,0,0,0,20,0,1\n");
        let links = read_links(csv::Reader::from_reader(text.as_bytes()), "punch.csv")
            .expect("valid punch");
        assert_eq!(links[0].volumes.heavy_long_haul, 0.0);
        assert_eq!(links[0].volumes.heavy_truck, 20.0);
    }

    #[test]
    fn test_missing_column() {
        let text = "i_node,j_node,timeperiod\n1,2,1\n";
        let result = read_links(csv::Reader::from_reader(text.as_bytes()), "punch.csv");
        assert!(matches!(
            result,
            Err(BcaAppError::NetworkTableError {
                source: NetworkTableError::MissingColumn { .. }
            })
        ));
    }

    #[test]
    fn test_unknown_time_period() {
        let text = format!("{HEADER}\n1,2,9,1,1,1,1,900,1,1,10,0,0,0,0,0,0,0,1,0,0\n");
        let result = read_links(csv::Reader::from_reader(text.as_bytes()), "punch.csv");
        assert!(matches!(
            result,
            Err(BcaAppError::NetworkTableError {
                source: NetworkTableError::UnknownTimePeriod { row: 1, .. }
            })
        ));
    }

    #[test]
    fn test_empty_table() {
        let text = format!("{HEADER}\n");
        let result = read_links(csv::Reader::from_reader(text.as_bytes()), "punch.csv");
        assert!(matches!(
            result,
            Err(BcaAppError::NetworkTableError {
                source: NetworkTableError::EmptyTable { .. }
            })
        ));
    }
}

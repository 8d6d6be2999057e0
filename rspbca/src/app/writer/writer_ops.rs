use super::OutputFile;
use crate::app::BcaAppError;
use kdam::tqdm;
use serde::Serialize;
use std::{fs::File, path::Path};

/// helper function to "mkdir -p path"
pub fn create_dirs(path: &Path) -> Result<(), BcaAppError> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|e| BcaAppError::FileWriteError {
        file: path.to_string_lossy().to_string(),
        source: e,
    })
}

/// builds a csv writer for an output file while respecting the user's
/// overwrite preference. returns None when the file exists and may not be
/// overwritten.
pub fn create_writer(
    directory: &Path,
    output: OutputFile,
    overwrite: bool,
) -> Result<Option<csv::Writer<File>>, BcaAppError> {
    let filepath = directory.join(output.filename());
    if filepath.exists() && !overwrite {
        log::warn!("{filepath:?} exists and overwrite is disabled, skipping");
        return Ok(None);
    }
    let file = File::create(&filepath).map_err(|e| BcaAppError::FileWriteError {
        file: filepath.to_string_lossy().to_string(),
        source: e,
    })?;
    Ok(Some(csv::Writer::from_writer(file)))
}

/// serializes `rows` to an output file with a header taken from the row
/// type's field names. returns false if the file was left untouched.
pub fn write_rows<'a, T, I>(
    directory: &Path,
    output: OutputFile,
    rows: I,
    overwrite: bool,
) -> Result<bool, BcaAppError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(mut writer) = create_writer(directory, output, overwrite)? else {
        return Ok(false);
    };
    let to_error = |e: csv::Error| BcaAppError::CsvWriteError {
        file: output.filename().to_string(),
        source: e,
    };
    let mut count = 0;
    for row in tqdm!(rows.into_iter(), desc = output.filename()) {
        writer.serialize(row).map_err(to_error)?;
        count += 1;
    }
    writer.flush().map_err(|e| BcaAppError::FileWriteError {
        file: output.filename().to_string(),
        source: e,
    })?;
    log::info!("wrote {count} rows to {output}");
    Ok(true)
}

/// writes pre-built string records under an explicit header.
pub fn write_records<I>(
    directory: &Path,
    output: OutputFile,
    header: &[String],
    records: I,
    overwrite: bool,
) -> Result<bool, BcaAppError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let Some(mut writer) = create_writer(directory, output, overwrite)? else {
        return Ok(false);
    };
    let to_error = |e: csv::Error| BcaAppError::CsvWriteError {
        file: output.filename().to_string(),
        source: e,
    };
    writer.write_record(header).map_err(to_error)?;
    let mut count = 0;
    for record in records {
        writer.write_record(&record).map_err(to_error)?;
        count += 1;
    }
    writer.flush().map_err(|e| BcaAppError::FileWriteError {
        file: output.filename().to_string(),
        source: e,
    })?;
    log::info!("wrote {count} rows to {output}");
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::{write_records, write_rows};
    use crate::app::writer::OutputFile;
    use serde::Serialize;
    use std::path::PathBuf;

    #[derive(Serialize)]
    struct Row {
        geog: String,
        vmt: f64,
    }

    fn output_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("rspbca_writer_ops_test").join(name);
        if dir.exists() {
            std::fs::remove_dir_all(&dir).expect("clear temp dir");
        }
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    #[test]
    fn test_respects_overwrite() {
        let dir = output_dir("overwrite");
        let rows = vec![Row {
            geog: String::from("region"),
            vmt: 10.0,
        }];
        assert!(write_rows(&dir, OutputFile::Emissions, &rows, false).expect("write"));
        let written = std::fs::read_to_string(dir.join("emissions.csv")).expect("read");
        assert_eq!(written, "geog,vmt\nregion,10.0\n");

        // an existing file is left alone unless overwrite is set
        assert!(!write_rows(&dir, OutputFile::Emissions, &rows, false).expect("skip"));
        assert!(write_rows(&dir, OutputFile::Emissions, &rows, true).expect("overwrite"));
    }

    #[test]
    fn test_records_with_header() {
        let dir = output_dir("records");
        let header = vec![String::from("geog"), String::from("Total Costs")];
        let records = vec![vec![String::from("region"), String::from("12.5")]];
        assert!(write_records(&dir, OutputFile::BcaSummary, &header, records, false).expect("write"));
        let written = std::fs::read_to_string(dir.join("bcasummary_out.csv")).expect("read");
        assert_eq!(written, "geog,Total Costs\nregion,12.5\n");
    }
}

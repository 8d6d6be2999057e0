use super::FieldError;
use csv::StringRecord;
use std::collections::HashMap;

/// column positions of a csv header, looked up by any of several aliases.
///
/// header names are normalized before lookup: the '@' prefix of extra
/// attributes and any whitespace are removed, and case is ignored.
#[derive(Clone, Debug)]
pub struct HeaderIndex {
    file: String,
    lookup: HashMap<String, usize>,
    names: Vec<String>,
}

impl HeaderIndex {
    pub fn new(file: &str, headers: &StringRecord) -> HeaderIndex {
        let names = headers.iter().map(String::from).collect::<Vec<_>>();
        let mut lookup = HashMap::new();
        for (idx, name) in names.iter().enumerate() {
            // first occurrence wins on duplicate headers
            lookup.entry(normalize(name)).or_insert(idx);
        }
        HeaderIndex {
            file: file.to_string(),
            lookup,
            names,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn find(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|a| self.lookup.get(&normalize(a)).copied())
    }

    /// position of a required column. the first alias names the column in errors.
    pub fn require(&self, aliases: &[&str]) -> Result<usize, FieldError> {
        self.find(aliases).ok_or_else(|| FieldError::MissingColumn {
            file: self.file.clone(),
            column: aliases.first().copied().unwrap_or_default().to_string(),
        })
    }

    /// parses a numeric cell. empty cells read as 0.
    pub fn f64_at(&self, record: &StringRecord, row: usize, idx: usize) -> Result<f64, FieldError> {
        let text = record.get(idx).unwrap_or_default().trim();
        if text.is_empty() {
            return Ok(0.0);
        }
        text.parse::<f64>().map_err(|_| FieldError::InvalidValue {
            file: self.file.clone(),
            row,
            column: self.names.get(idx).cloned().unwrap_or_default(),
            value: text.to_string(),
        })
    }

    /// parses an integer cell. model punches often write integers as
    /// floats ("12.0"), so the value is parsed as a float and truncated.
    pub fn i64_at(&self, record: &StringRecord, row: usize, idx: usize) -> Result<i64, FieldError> {
        let value = self.f64_at(record, row, idx)?;
        if !value.is_finite() {
            return Err(FieldError::InvalidValue {
                file: self.file.clone(),
                row,
                column: self.names.get(idx).cloned().unwrap_or_default(),
                value: value.to_string(),
            });
        }
        Ok(value.trunc() as i64)
    }

    /// like [`HeaderIndex::f64_at`] for a column that may be absent, which reads as 0.
    pub fn optional_f64_at(
        &self,
        record: &StringRecord,
        row: usize,
        idx: Option<usize>,
    ) -> Result<f64, FieldError> {
        match idx {
            Some(idx) => self.f64_at(record, row, idx),
            None => Ok(0.0),
        }
    }

    /// parses a 0/1 or true/false flag. empty cells are false.
    pub fn bool_at(&self, record: &StringRecord, row: usize, idx: usize) -> Result<bool, FieldError> {
        let text = record.get(idx).unwrap_or_default().trim();
        match text.to_lowercase().as_str() {
            "" | "false" => Ok(false),
            "true" => Ok(true),
            _ => self.f64_at(record, row, idx).map(|v| v != 0.0),
        }
    }

    pub fn str_at<'a>(&self, record: &'a StringRecord, idx: usize) -> &'a str {
        record.get(idx).unwrap_or_default().trim()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '@' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

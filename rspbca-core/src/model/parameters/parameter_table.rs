use super::ParameterError;
use std::collections::BTreeMap;

/// the raw name -> value listing of BCA coefficients as supplied by the
/// parameter file. names are kept verbatim (case-sensitive).
#[derive(Clone, Debug, Default)]
pub struct ParameterTable {
    values: BTreeMap<String, f64>,
}

impl ParameterTable {
    /// builds a table from (name, value) string pairs. surrounding whitespace
    /// is trimmed; a repeated name replaces the earlier entry.
    pub fn from_rows<I>(rows: I) -> Result<ParameterTable, ParameterError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = BTreeMap::new();
        for (name, value) in rows {
            let name = name.trim().to_string();
            let parsed = value
                .trim()
                .parse::<f64>()
                .map_err(|_| ParameterError::InvalidValue {
                    name: name.clone(),
                    value: value.clone(),
                })?;
            if values.insert(name.clone(), parsed).is_some() {
                log::debug!("parameter '{name}' listed more than once, using last value");
            }
        }
        Ok(ParameterTable { values })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<f64, ParameterError> {
        self.get(name)
            .ok_or_else(|| ParameterError::MissingParameter(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod test {
    use super::ParameterTable;
    use crate::model::parameters::ParameterError;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_and_lookup() {
        let table =
            ParameterTable::from_rows(rows(&[("discount_rate", "0.07"), (" ann_factor", " 290 ")]))
                .expect("should parse");
        assert_eq!(table.get("discount_rate"), Some(0.07));
        assert_eq!(table.get("ann_factor"), Some(290.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let result = ParameterTable::from_rows(rows(&[("vc_threshold", "high")]));
        match result {
            Err(ParameterError::InvalidValue { name, .. }) => assert_eq!(name, "vc_threshold"),
            other => panic!("expected InvalidValue, found {other:?}"),
        }
    }

    #[test]
    fn test_require_missing() {
        let table = ParameterTable::default();
        assert!(matches!(
            table.require("OC_auto"),
            Err(ParameterError::MissingParameter(_))
        ));
    }
}

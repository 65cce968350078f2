//! Opt-in record checks.
//!
//! The merge never calls these; keyed records with mismatched or non-finite
//! data pass through it untouched.

use std::collections::HashSet;

use crate::core::types::{ChartCollection, ChartRecord};
use crate::error::{DatasetError, DatasetResult};

pub fn validate_record(record: &ChartRecord) -> DatasetResult<()> {
    if !record.is_keyed() {
        return Err(DatasetError::Validation {
            id: String::new(),
            reason: "chart id must not be empty".to_owned(),
        });
    }
    if record.labels.len() != record.values.len() {
        return Err(DatasetError::Validation {
            id: record.id.clone(),
            reason: format!(
                "labels/values length mismatch: {} labels, {} values",
                record.labels.len(),
                record.values.len()
            ),
        });
    }
    if let Some(index) = record.values.iter().position(|value| !value.is_finite()) {
        return Err(DatasetError::Validation {
            id: record.id.clone(),
            reason: format!("value at index {index} is not finite"),
        });
    }
    Ok(())
}

/// Validates every record and rejects repeated ids. Stops at the first issue.
pub fn validate_charts(charts: &[ChartRecord]) -> DatasetResult<()> {
    let mut seen = HashSet::with_capacity(charts.len());
    for record in charts {
        validate_record(record)?;
        if !seen.insert(record.id.as_str()) {
            return Err(DatasetError::Validation {
                id: record.id.clone(),
                reason: "duplicate chart id".to_owned(),
            });
        }
    }
    Ok(())
}

impl ChartCollection {
    pub fn validate(&self) -> DatasetResult<()> {
        validate_charts(&self.charts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ChartType;

    #[test]
    fn length_mismatch_is_reported_with_id() {
        let record = ChartRecord::new("r", "R", ChartType::line(), ["a", "b"], vec![1.0]);
        let err = validate_record(&record).expect_err("mismatch");
        assert!(matches!(err, DatasetError::Validation { ref id, .. } if id == "r"));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let record = ChartRecord::new("r", "R", ChartType::line(), ["a"], vec![f64::NAN]);
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let record = ChartRecord::new("r", "R", ChartType::line(), ["a"], vec![1.0]);
        assert!(validate_charts(&[record.clone(), record]).is_err());
    }
}

use serde::Deserialize;

use crate::core::{ChartCollection, ChartRecord};
use crate::error::{DatasetError, DatasetResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsPayload {
    Records(Vec<Option<ChartRecord>>),
    Collection(CollectionPayload),
}

/// Collection-shaped input; unlike [`ChartCollection`], `charts` is required.
#[derive(Deserialize)]
struct CollectionPayload {
    charts: Vec<Option<ChartRecord>>,
}

impl ChartCollection {
    pub fn from_json_str(input: &str) -> DatasetResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DatasetError::InvalidData(format!("failed to parse chart collection json: {e}"))
        })
    }

    pub fn to_json(&self) -> DatasetResult<String> {
        serde_json::to_string(self).map_err(|e| {
            DatasetError::InvalidData(format!("failed to serialize chart collection: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> DatasetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DatasetError::InvalidData(format!("failed to serialize chart collection: {e}"))
        })
    }
}

/// Reads chart records from either a bare JSON array or a full collection object.
///
/// An object without a `charts` array is rejected. `null` entries are dropped.
pub fn records_from_json_str(input: &str) -> DatasetResult<Vec<ChartRecord>> {
    let payload: RecordsPayload = serde_json::from_str(input).map_err(|e| {
        DatasetError::InvalidData(format!(
            "expected a chart array or chart collection object: {e}"
        ))
    })?;
    let records = match payload {
        RecordsPayload::Records(records) => records,
        RecordsPayload::Collection(collection) => collection.charts,
    };
    Ok(records.into_iter().flatten().collect())
}

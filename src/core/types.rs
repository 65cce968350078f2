use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::primitives::parse_generated_at;
use crate::error::DatasetResult;

/// Informational origin metadata (source URLs, repo refs) in insertion order.
pub type SourceMeta = IndexMap<String, String>;

/// Opaque chart kind tag.
///
/// Consumers decide what a tag means; any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartType(String);

impl ChartType {
    pub const LINE: &'static str = "line";
    pub const BAR: &'static str = "bar";
    pub const DOUGHNUT: &'static str = "doughnut";

    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn line() -> Self {
        Self::new(Self::LINE)
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(Self::BAR)
    }

    #[must_use]
    pub fn doughnut() -> Self {
        Self::new(Self::DOUGHNUT)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_well_known(&self) -> bool {
        matches!(self.as_str(), Self::LINE | Self::BAR | Self::DOUGHNUT)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChartType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ChartType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// One chart definition.
///
/// `labels` and `values` are expected to have the same length; nothing in the
/// merge path checks it (see [`crate::core::validation`]). Unknown JSON fields
/// are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chart_type: ChartType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ChartRecord {
    #[must_use]
    pub fn new<L, S>(
        id: impl Into<String>,
        title: impl Into<String>,
        chart_type: impl Into<ChartType>,
        labels: L,
        values: Vec<f64>,
    ) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            chart_type: chart_type.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            values,
            extra: IndexMap::new(),
        }
    }

    /// Records with an empty id never take part in a merge.
    #[must_use]
    pub fn is_keyed(&self) -> bool {
        !self.id.is_empty()
    }
}

/// The published dataset: metadata plus an ordered chart list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub generated_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_meta: Option<SourceMeta>,
    #[serde(default, deserialize_with = "charts_without_nulls")]
    pub charts: Vec<ChartRecord>,
}

impl ChartCollection {
    #[must_use]
    pub fn new(
        generated_at: impl Into<String>,
        description: impl Into<String>,
        charts: Vec<ChartRecord>,
    ) -> Self {
        Self {
            generated_at: generated_at.into(),
            description: description.into(),
            source_meta: None,
            charts,
        }
    }

    #[must_use]
    pub fn with_source_meta(mut self, source_meta: SourceMeta) -> Self {
        self.source_meta = Some(source_meta);
        self
    }

    #[must_use]
    pub fn chart(&self, id: &str) -> Option<&ChartRecord> {
        self.charts.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn chart_ids(&self) -> Vec<&str> {
        self.charts.iter().map(|record| record.id.as_str()).collect()
    }

    /// Parses `generated_at` as an RFC 3339 timestamp.
    pub fn generated_at_time(&self) -> DatasetResult<DateTime<Utc>> {
        parse_generated_at(&self.generated_at)
    }
}

/// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn charts_without_nulls<'de, D>(deserializer: D) -> Result<Vec<ChartRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<ChartRecord>>>::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_keeps_unknown_tags() {
        let radar = ChartType::from("radar");
        assert_eq!(radar.as_str(), "radar");
        assert!(!radar.is_well_known());
        assert!(ChartType::doughnut().is_well_known());
    }

    #[test]
    fn record_with_null_id_decodes_as_unkeyed() {
        let record: ChartRecord = serde_json::from_str(
            r#"{"id":null,"title":"t","chartType":"bar","labels":["a"],"values":[1]}"#,
        )
        .expect("decode");
        assert!(!record.is_keyed());
        assert_eq!(record.chart_type, ChartType::bar());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let record: ChartRecord = serde_json::from_str(
            r#"{"id":"k","title":null,"chartType":null,"labels":null,"values":null}"#,
        )
        .expect("decode");
        assert_eq!(record.id, "k");
        assert_eq!(record.chart_type, ChartType::default());
        assert!(record.labels.is_empty());
        assert!(record.values.is_empty());
    }

    #[test]
    fn collection_drops_null_chart_entries() {
        let collection: ChartCollection = serde_json::from_str(
            r#"{"generatedAt":"2025-11-04T15:27:21.945Z","description":"d","charts":[null,{"id":"a"}]}"#,
        )
        .expect("decode");
        assert_eq!(collection.chart_ids(), vec!["a"]);
        assert!(collection.source_meta.is_none());
    }
}

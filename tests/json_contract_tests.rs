use chart_data::api::records_from_json_str;
use chart_data::core::{ChartCollection, ChartType};
use chart_data::datasets::{GENERATED_AT, generated_dataset};
use chart_data::error::DatasetError;
use serde_json::Value;

#[test]
fn collection_serializes_with_wire_field_names() {
    let json = generated_dataset().to_json_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["generatedAt"], GENERATED_AT);
    assert_eq!(value["sourceMeta"]["repoRef"], "latest");
    let first = &value["charts"][0];
    assert_eq!(first["id"], "revenue_trend");
    assert_eq!(first["chartType"], "line");
    assert_eq!(first["labels"][0], "Jan");
    assert_eq!(first["values"][0].as_f64(), Some(12000.0));
    assert!(first.get("chart_type").is_none());
}

#[test]
fn collection_json_round_trip_preserves_order_and_meta() {
    let dataset = generated_dataset();

    let parsed = ChartCollection::from_json_str(&dataset.to_json().expect("serialize"))
        .expect("parse");

    assert_eq!(parsed, dataset);
    let meta_keys: Vec<&str> = parsed
        .source_meta
        .as_ref()
        .expect("meta")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(meta_keys, vec!["jsonSource", "csvSource", "repoRef"]);
}

#[test]
fn absent_source_meta_is_omitted() {
    let collection = ChartCollection::new("2025-01-01T00:00:00.000Z", "d", Vec::new());
    let json = collection.to_json().expect("serialize");
    assert!(!json.contains("sourceMeta"));
}

#[test]
fn unknown_record_fields_survive_decode_and_encode() {
    let input = r##"[{"id":"a","title":"A","chartType":"radar","labels":["x"],"values":[1],"color":"#ff0000"}]"##;

    let records = records_from_json_str(input).expect("records");

    assert_eq!(records[0].chart_type, ChartType::from("radar"));
    assert_eq!(records[0].extra["color"], "#ff0000");
    let encoded = serde_json::to_value(&records[0]).expect("encode");
    assert_eq!(encoded["color"], "#ff0000");
}

#[test]
fn records_can_be_read_from_collection_object() {
    let input = r#"{"generatedAt":"x","description":"d","charts":[{"id":"only"}]}"#;

    let records = records_from_json_str(input).expect("records");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "only");
    assert!(records[0].labels.is_empty());
}

#[test]
fn records_array_drops_null_entries_and_keeps_unkeyed() {
    let records =
        records_from_json_str(r#"[null,{"id":""},{"title":"no id"}]"#).expect("records");

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| !record.is_keyed()));
}

#[test]
fn single_record_object_is_not_a_record_list() {
    let err = records_from_json_str(
        r#"{"id":"a","title":"A","chartType":"bar","labels":["x"],"values":[1]}"#,
    )
    .expect_err("record object without charts");

    assert!(matches!(err, DatasetError::InvalidData(_)));
    assert!(records_from_json_str(r#"{"foo":1}"#).is_err());
}

#[test]
fn integer_values_are_written_back_as_floats() {
    let collection = ChartCollection::from_json_str(
        r#"{"generatedAt":"x","description":"d","charts":[{"id":"a","values":[12000]}]}"#,
    )
    .expect("parse");

    let json = collection.to_json().expect("serialize");

    assert!(json.contains(r#""values":[12000.0]"#));
}

#[test]
fn malformed_json_is_invalid_data() {
    assert!(ChartCollection::from_json_str("{not json").is_err());
    assert!(records_from_json_str("42").is_err());
}

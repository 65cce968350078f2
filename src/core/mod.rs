pub mod merge;
pub mod primitives;
pub mod types;
pub mod validation;

pub use merge::{
    MergeStats, OVERRIDE_ONLY_DESCRIPTION, dedupe_charts, merge_charts, merge_charts_with_stats,
    merge_into_collection,
};
pub use primitives::{format_generated_at, parse_generated_at};
pub use types::{ChartCollection, ChartRecord, ChartType, SourceMeta};
pub use validation::{validate_charts, validate_record};

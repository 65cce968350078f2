//! chart-data: chart dataset model and keyed dataset merge.
//!
//! A generated [`crate::core::ChartCollection`] is published into an explicit
//! [`crate::api::ChartDataRegistry`]; hand-authored overrides are then merged into it
//! by chart id, last writer wins, first-seen order kept. The registry notifies
//! an attached consumer or broadcasts a readiness event to listeners.

pub mod api;
pub mod core;
pub mod datasets;
pub mod error;
pub mod telemetry;

pub use api::{ChartDataRegistry, DatasetConfig};
pub use error::{DatasetError, DatasetResult};

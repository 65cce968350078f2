//! Registry-facing API: configuration, notification seams and JSON I/O.

mod config;
mod consumer;
mod json_contract;
mod registry;

pub use config::DatasetConfig;
pub use consumer::{
    ChartConsumer, DataReadyEvent, DataReadyListener, NotificationOutcome, RefreshOptions,
};
pub use json_contract::records_from_json_str;
pub use registry::ChartDataRegistry;

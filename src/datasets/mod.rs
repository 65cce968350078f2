//! Datasets shipped with the crate.
//!
//! `generated` mirrors the last automated build; `custom` holds the
//! hand-maintained additions and overrides applied on top of it.

mod custom;
mod generated;

pub use custom::custom_overrides;
pub use generated::{GENERATED_AT, generated_dataset};

use crate::api::{ChartDataRegistry, NotificationOutcome};

/// Publishes the generated dataset, then applies the custom overrides.
///
/// Returns the outcome of the override notification.
pub fn load_bundled(registry: &mut ChartDataRegistry) -> NotificationOutcome {
    registry.publish(generated_dataset());
    registry.apply_overrides(custom_overrides())
}

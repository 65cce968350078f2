use serde::{Deserialize, Serialize};

use crate::core::ChartCollection;
use crate::error::DatasetResult;

/// Options handed to a consumer's refresh hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOptions {
    /// Re-read the whole collection instead of applying an incremental update.
    pub force_global_reload: bool,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            force_global_reload: true,
        }
    }
}

/// Consumer attached to the registry before data arrives.
///
/// Errors returned from `refresh` are discarded by the registry; the data it
/// was notified about stays applied.
pub trait ChartConsumer {
    fn refresh(
        &mut self,
        options: RefreshOptions,
        collection: &ChartCollection,
    ) -> DatasetResult<()>;
}

impl<F> ChartConsumer for F
where
    F: FnMut(RefreshOptions, &ChartCollection) -> DatasetResult<()>,
{
    fn refresh(
        &mut self,
        options: RefreshOptions,
        collection: &ChartCollection,
    ) -> DatasetResult<()> {
        self(options, collection)
    }
}

/// Payload-free signal that new chart data is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataReadyEvent;

impl DataReadyEvent {
    pub const NAME: &'static str = "ChartModuleDataReady";

    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAME
    }
}

/// Listener for [`DataReadyEvent`], used when no consumer is attached.
pub trait DataReadyListener {
    fn id(&self) -> &str;
    fn on_data_ready(&mut self, event: DataReadyEvent);
}

/// How the registry signalled a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    Refreshed,
    RefreshFailed,
    ReadinessBroadcast { listeners: usize },
}

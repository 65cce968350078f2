use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::core::{ChartCollection, ChartRecord, merge_charts_with_stats, merge_into_collection};
use crate::error::{DatasetError, DatasetResult};

use super::{
    ChartConsumer, DataReadyEvent, DataReadyListener, DatasetConfig, NotificationOutcome,
};

/// Shared rendezvous point between a dataset generator, an override step and
/// a chart consumer.
///
/// The registry owns the current [`ChartCollection`]. Every mutation leaves
/// `charts` free of empty and repeated ids, then notifies: the attached
/// consumer's refresh hook when there is one, otherwise every registered
/// [`DataReadyListener`].
#[derive(Default)]
pub struct ChartDataRegistry {
    config: DatasetConfig,
    collection: Option<ChartCollection>,
    consumer: Option<Box<dyn ChartConsumer>>,
    listeners: Vec<Box<dyn DataReadyListener>>,
}

impl fmt::Debug for ChartDataRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartDataRegistry")
            .field("config", &self.config)
            .field("collection", &self.collection)
            .field("has_consumer", &self.consumer.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChartDataRegistry {
    #[must_use]
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    #[must_use]
    pub fn collection(&self) -> Option<&ChartCollection> {
        self.collection.as_ref()
    }

    #[must_use]
    pub fn charts(&self) -> &[ChartRecord] {
        self.collection
            .as_ref()
            .map_or(&[], |collection| collection.charts.as_slice())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.collection.is_some()
    }

    #[must_use]
    pub fn into_collection(self) -> Option<ChartCollection> {
        self.collection
    }

    /// Stores a generated collection, replacing any previous one.
    pub fn publish(&mut self, mut collection: ChartCollection) -> NotificationOutcome {
        let charts = std::mem::take(&mut collection.charts);
        let (charts, stats) = merge_charts_with_stats(charts, Vec::new());
        debug!(
            original_count = stats.base_len,
            canonical_count = stats.merged_len,
            "publish chart collection"
        );
        collection.charts = charts;
        self.collection = Some(collection);
        self.notify()
    }

    /// Merges `overrides` into the current collection, stamping a fresh
    /// collection with the current time when nothing was published yet.
    pub fn apply_overrides(&mut self, overrides: Vec<ChartRecord>) -> NotificationOutcome {
        self.apply_overrides_at(overrides, Utc::now())
    }

    pub fn apply_overrides_at(
        &mut self,
        overrides: Vec<ChartRecord>,
        now: DateTime<Utc>,
    ) -> NotificationOutcome {
        let (collection, stats) = merge_into_collection(
            self.collection.take(),
            overrides,
            now,
            &self.config.override_only_description,
        );
        trace!(
            merged_len = stats.merged_len,
            skipped_unkeyed = stats.skipped_unkeyed,
            "apply chart overrides"
        );
        self.collection = Some(collection);
        self.notify()
    }

    /// Attaches the refresh-hook consumer, returning the one it replaces.
    pub fn attach_consumer(
        &mut self,
        consumer: Box<dyn ChartConsumer>,
    ) -> Option<Box<dyn ChartConsumer>> {
        self.consumer.replace(consumer)
    }

    pub fn detach_consumer(&mut self) -> Option<Box<dyn ChartConsumer>> {
        self.consumer.take()
    }

    #[must_use]
    pub fn has_consumer(&self) -> bool {
        self.consumer.is_some()
    }

    /// Registers a readiness listener with a unique, non-empty identifier.
    pub fn register_listener(&mut self, listener: Box<dyn DataReadyListener>) -> DatasetResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(DatasetError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(DatasetError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }

    fn notify(&mut self) -> NotificationOutcome {
        let Self {
            config,
            collection,
            consumer,
            listeners,
        } = self;

        if let (Some(consumer), Some(collection)) = (consumer.as_mut(), collection.as_ref()) {
            return match consumer.refresh(config.refresh_options, collection) {
                Ok(()) => NotificationOutcome::Refreshed,
                Err(err) => {
                    debug!(error = %err, "ignoring chart consumer refresh failure");
                    NotificationOutcome::RefreshFailed
                }
            };
        }

        let event = DataReadyEvent;
        for listener in listeners.iter_mut() {
            listener.on_data_ready(event);
        }
        trace!(
            event = event.name(),
            listeners = listeners.len(),
            "broadcast data ready"
        );
        NotificationOutcome::ReadinessBroadcast {
            listeners: listeners.len(),
        }
    }
}

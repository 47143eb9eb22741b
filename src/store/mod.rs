//! Dashboard state store.
//!
//! This module provides the single authoritative [`DashboardData`] value and
//! the two mutations that change it. State lives behind `Arc<RwLock>` so the
//! whole validate-then-update transition of a mutation happens under one
//! write guard; readers only ever see complete states.
//!
//! Every mutation call, accepted or rejected, sends exactly one
//! [`DashboardUpdate`] on a broadcast channel.

use crate::notification::Notification;
use crate::{DashboardData, DashboardError, SeedError, Widget};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

#[cfg(test)]
mod tests;

mod ids;
mod mutations;

pub use ids::WidgetIdGenerator;

/// Default capacity for the subscriber notification channel.
/// This allows for bursty update scenarios without dropping notifications.
const DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY: usize = 256;

/// What a mutation call did to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A widget was appended to the category.
    WidgetAdded(Widget),
    /// A remove request was processed. `removed` is `false` when nothing matched.
    WidgetRemoved { widget_id: String, removed: bool },
    /// The request was rejected and state is unchanged.
    Rejected(DashboardError),
}

/// Broadcast to subscribers after every mutation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardUpdate {
    /// Store revision after the call.
    pub revision: u64,
    /// Category the call targeted.
    pub category_id: String,
    pub change: Change,
    /// The one notification this call produced.
    pub notification: Notification,
}

/// State guarded by the store lock.
#[derive(Debug)]
struct StoreState {
    data: Arc<DashboardData>,
    revision: u64,
    ids: WidgetIdGenerator,
}

/// Thread-safe dashboard store wrapping [`DashboardData`] with `Arc<RwLock>`.
///
/// Cloning the store yields another handle to the same state and the same
/// subscriber channel.
///
/// # Example
///
/// ```
/// use cnapp_dashboard::store::DashboardStore;
/// use cnapp_dashboard::NewWidget;
///
/// let store = DashboardStore::with_default_seed();
/// let mut rx = store.subscribe();
///
/// let widget = store
///     .add_widget("cwpp", NewWidget::new("New Panel", "<Foo />"))
///     .expect("cwpp exists");
/// assert_eq!(store.snapshot().category("cwpp").unwrap().widgets.len(), 2);
///
/// let update = rx.try_recv().expect("one update per call");
/// assert_eq!(update.notification.message, "Widget added successfully");
///
/// store.remove_widget("cwpp", &widget.id);
/// ```
#[derive(Clone)]
pub struct DashboardStore {
    state: Arc<RwLock<StoreState>>,
    /// Subscribers receive a [`DashboardUpdate`] per mutation call.
    update_tx: broadcast::Sender<DashboardUpdate>,
}

impl std::fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardStore")
            .field("state", &self.state)
            .field("subscriber_count", &self.update_tx.receiver_count())
            .finish()
    }
}

impl DashboardStore {
    /// Creates a store seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the seed has duplicate category ids, or
    /// duplicate widget names or ids within a category.
    pub fn new(seed: DashboardData) -> Result<Self, SeedError> {
        seed.validate()?;
        let (update_tx, _rx) = broadcast::channel(DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY);
        tracing::debug!(
            "Dashboard store seeded with {} categories, {} widgets",
            seed.categories.len(),
            seed.widget_count()
        );
        Ok(Self {
            state: Arc::new(RwLock::new(StoreState {
                data: Arc::new(seed),
                revision: 0,
                ids: WidgetIdGenerator::new(),
            })),
            update_tx,
        })
    }

    /// Creates a store seeded with [`crate::seed::default_dashboard`].
    pub fn with_default_seed() -> Self {
        Self::new(crate::seed::default_dashboard()).expect("built-in seed is valid")
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current dashboard.
    ///
    /// The snapshot is immutable. Calls that leave state unchanged keep the
    /// same `Arc`, so `Arc::ptr_eq` on two snapshots tells whether anything
    /// changed in between.
    pub fn snapshot(&self) -> Arc<DashboardData> {
        Arc::clone(&self.read_state().data)
    }

    /// Returns a copy of one category, if it exists.
    pub fn category(&self, id: &str) -> Option<crate::Category> {
        self.read_state().data.category(id).cloned()
    }

    /// Number of state changes applied since construction.
    ///
    /// Rejected and no-op calls do not advance the revision.
    pub fn revision(&self) -> u64 {
        self.read_state().revision
    }

    /// Subscribes to mutation updates.
    ///
    /// The receiver gets one [`DashboardUpdate`] per `add_widget` or
    /// `remove_widget` call made after subscribing.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardUpdate> {
        self.update_tx.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.update_tx.receiver_count()
    }

    /// Sends an update to all subscribers. Logs the result at trace/debug level.
    fn broadcast(&self, update: DashboardUpdate) {
        match self.update_tx.send(update) {
            Ok(count) => {
                tracing::trace!("Broadcast update sent to {} subscribers", count);
            }
            Err(_) => {
                tracing::debug!("No subscribers for dashboard update broadcast");
            }
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

//! User-facing notifications for dashboard mutations.
//!
//! The store never shows anything itself. Every mutation result is mapped to
//! exactly one [`Notification`], carried on the store's broadcast channel
//! inside a [`DashboardUpdate`](crate::store::DashboardUpdate). A presentation
//! layer drains its receiver into a [`Notifier`] (toast sink).

use crate::store::DashboardUpdate;
use crate::{DashboardError, Widget};
use std::fmt;
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Message shown after a widget was appended to a category.
pub const WIDGET_ADDED: &str = "Widget added successfully";

/// Message shown after a remove request, whether or not anything matched.
pub const WIDGET_REMOVED: &str = "Widget removed successfully";

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Maps an `add_widget` result to its notification.
    ///
    /// Rejections use the error's display text as the message.
    pub fn for_add(result: &Result<Widget, DashboardError>) -> Self {
        match result {
            Ok(_) => Self::success(WIDGET_ADDED),
            Err(e) => Self::error(e.to_string()),
        }
    }

    /// Notification for `remove_widget`. Always a success.
    pub fn for_remove() -> Self {
        Self::success(WIDGET_REMOVED)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Sink for notifications, e.g. a toast area.
pub trait Notifier {
    /// Presents one notification to the user.
    fn notify(&mut self, notification: &Notification);
}

/// Collects notifications in arrival order.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

/// Delivers every pending update's notification to `notifier` without blocking.
///
/// Returns the number of notifications delivered. A lagged receiver skips the
/// overwritten updates and keeps draining.
pub fn drain<N: Notifier + ?Sized>(
    rx: &mut broadcast::Receiver<DashboardUpdate>,
    notifier: &mut N,
) -> usize {
    let mut delivered = 0;
    loop {
        match rx.try_recv() {
            Ok(update) => {
                notifier.notify(&update.notification);
                delivered += 1;
            }
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!("Notification receiver lagged, skipped {} updates", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    delivered
}

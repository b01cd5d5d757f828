//! Listener registration and synchronous change fan-out.
//!
//! Every field and element embeds an [`Observable`]. Mutations build a
//! [`ChangeEvent`] after releasing their own locks and hand it to
//! [`Observable::notify`], which calls each listener in registration order.
//!
//! # Delivery policy
//!
//! - The listener list is copied when a notification starts. A listener that
//!   registers or removes listeners from inside its callback affects the next
//!   notification, not the one in progress.
//! - A listener returning `Err` is logged and skipped; the remaining
//!   listeners still receive the event. Panics are not caught.

mod event;
mod keys;

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::error::{ErrorSeverity, PastureError};
use crate::sync;

pub use event::{ChangeEvent, EventSource, Value};
pub use keys::PropertyKey;

/// Receiver of change events.
///
/// Any `Fn(&ChangeEvent) + Send + Sync` closure is a listener that never
/// fails.
pub trait Listener: Send + Sync {
    fn on_change(&self, event: &ChangeEvent) -> Result<(), ListenerError>;
}

impl<F> Listener for F
where
    F: Fn(&ChangeEvent) + Send + Sync,
{
    fn on_change(&self, event: &ChangeEvent) -> Result<(), ListenerError> {
        self(event);
        Ok(())
    }
}

/// Failure reported by a listener while handling an event.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("listener failed: {reason}")]
pub struct ListenerError {
    pub reason: String,
}

impl ListenerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PastureError for ListenerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "LISTENER_FAILED"
    }
}

/// Thread-safe listener registry with ordered, synchronous delivery.
#[derive(Default)]
pub struct Observable {
    listeners: RwLock<Vec<Arc<dyn Listener>>>,
}

impl Observable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Registering the same listener twice delivers
    /// every event to it twice.
    pub fn add_listener(&self, listener: Arc<dyn Listener>) {
        let mut listeners = sync::write(&self.listeners);
        listeners.push(listener);
        debug!(listeners = listeners.len(), "listener registered");
    }

    /// Removes the first registration of `listener`.
    ///
    /// Returns false if it was not registered.
    pub fn remove_listener(&self, listener: &Arc<dyn Listener>) -> bool {
        let mut listeners = sync::write(&self.listeners);
        let found = listeners
            .iter()
            .position(|registered| std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(listener)));
        match found {
            Some(index) => {
                listeners.remove(index);
                debug!(listeners = listeners.len(), "listener removed");
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        sync::read(&self.listeners).len()
    }

    /// Delivers `event` to every registered listener, in registration order.
    ///
    /// Returns the number of listeners that handled the event without error.
    pub fn notify(&self, event: &ChangeEvent) -> usize {
        let listeners: Vec<Arc<dyn Listener>> = sync::read(&self.listeners).clone();
        if listeners.is_empty() {
            return 0;
        }

        debug!(
            source = %event.source,
            key = %event.key,
            listeners = listeners.len(),
            "notifying listeners"
        );

        let mut delivered = 0;
        for listener in &listeners {
            match listener.on_change(event) {
                Ok(()) => delivered += 1,
                Err(error) => warn!(
                    source = %event.source,
                    key = %event.key,
                    code = error.error_code(),
                    %error,
                    "listener failed; continuing with remaining listeners"
                ),
            }
        }
        delivered
    }
}

impl std::fmt::Debug for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

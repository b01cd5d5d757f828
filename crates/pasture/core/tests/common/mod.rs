//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use pasture_core::{ChangeEvent, Listener, PropertyKey};

/// Listener that keeps a copy of every event it receives.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<ChangeEvent>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<PropertyKey> {
        self.events().iter().map(|event| event.key).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Listener for Recorder {
    fn on_change(&self, event: &ChangeEvent) -> Result<(), pasture_core::ListenerError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Upcasts a recorder for registration.
pub fn as_listener(recorder: &Arc<Recorder>) -> Arc<dyn Listener> {
    Arc::clone(recorder) as Arc<dyn Listener>
}

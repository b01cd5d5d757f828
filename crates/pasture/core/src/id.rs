//! Element identities and the generator that mints them.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

use crate::config::PastureConfig;

/// Unique identifier of a positioned element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic identity counter shared by every element it creates.
///
/// Ids start at 1 and increase by one per call. Once the ceiling has been
/// handed out the counter wraps to 1, never to 0, so ids are unique within
/// one wrap period only. Safe to share between threads: advancing the
/// counter is a compare-and-swap retry loop, not a lock.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU32,
    ceiling: u32,
}

static GLOBAL: OnceLock<Arc<IdGenerator>> = OnceLock::new();

impl IdGenerator {
    pub const fn new() -> Self {
        Self::with_ceiling(PastureConfig::MAX_ELEMENT_ID)
    }

    /// Creates a generator that wraps after `ceiling`.
    ///
    /// # Panics
    ///
    /// Panics if `ceiling` is 0.
    pub const fn with_ceiling(ceiling: u32) -> Self {
        assert!(ceiling >= 1, "id ceiling must be at least 1");
        Self {
            next: AtomicU32::new(1),
            ceiling,
        }
    }

    /// Process-wide generator backing the convenience constructors.
    pub fn global() -> Arc<IdGenerator> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(IdGenerator::new())))
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Returns the current counter value and advances it.
    pub fn next_id(&self) -> ElementId {
        let ceiling = self.ceiling;
        let previous = self
            .next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(if current >= ceiling { 1 } else { current + 1 })
            })
            .unwrap_or_else(|current| current);
        ElementId(previous)
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) would hand out.
    pub fn peek(&self) -> ElementId {
        ElementId(self.next.load(Ordering::Acquire))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

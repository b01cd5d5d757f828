//! Grid simulation and change-notification engine for a cattle pasture.
//!
//! `pasture-core` models a bounded [`Field`] populated with [`Cattle`],
//! [`Calf`] markers and [`Grass`] patches. Every mutation validates against
//! the field, updates state, and then synchronously notifies registered
//! [`Listener`]s with immutable before/after snapshots. Rendering layers sit
//! on the other side of that notification contract and never reach into the
//! model except through its public operations.
pub mod cattle;
pub mod config;
pub mod element;
pub mod error;
pub mod field;
pub mod id;
pub mod observer;
pub mod state;

mod sync;

pub use cattle::{Cattle, CattleAttrs, ComparableCattle};
pub use config::{AnimationMode, PastureConfig};
pub use element::{
    Attributes, Bucket, BucketAttrs, Calf, CalfAttrs, Decoration, Element, ElementError, Grass,
    GrassAttrs,
};
pub use error::{ErrorSeverity, PastureError};
pub use field::{Field, FieldError};
pub use id::{ElementId, IdGenerator};
pub use observer::{
    ChangeEvent, EventSource, Listener, ListenerError, Observable, PropertyKey, Value,
};
pub use state::{
    Axis, CattleSnapshot, Dimensions, Direction, ElementKind, ElementSnapshot, Message, Notice,
    Position, Status,
};

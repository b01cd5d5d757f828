//! Value types shared by the field, its elements and their listeners.
mod common;
mod message;
mod snapshot;

pub use common::{Direction, Position};
pub use message::{Message, Notice};
pub use snapshot::{Axis, CattleSnapshot, Dimensions, ElementKind, ElementSnapshot, Status};

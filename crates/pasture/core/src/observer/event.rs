use std::fmt;

use super::PropertyKey;
use crate::config::AnimationMode;
use crate::id::ElementId;
use crate::state::{CattleSnapshot, Dimensions, ElementKind, ElementSnapshot, Position};

/// Emitter of a change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventSource {
    Field,
    Element { id: ElementId, kind: ElementKind },
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSource::Field => f.write_str("field"),
            EventSource::Element { id, kind } => write!(f, "{kind}{id}"),
        }
    }
}

/// Payload on either side of a change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Dimensions(Dimensions),
    Animation(AnimationMode),
    Element(ElementSnapshot),
    Cattle(CattleSnapshot),
}

impl Value {
    /// Common element state, for both plain elements and cattle.
    pub fn as_element(&self) -> Option<&ElementSnapshot> {
        match self {
            Value::Element(element) => Some(element),
            Value::Cattle(cattle) => Some(&cattle.element),
            _ => None,
        }
    }

    pub fn as_cattle(&self) -> Option<&CattleSnapshot> {
        match self {
            Value::Cattle(cattle) => Some(cattle),
            _ => None,
        }
    }

    pub fn as_dimensions(&self) -> Option<Dimensions> {
        match self {
            Value::Dimensions(dimensions) => Some(*dimensions),
            _ => None,
        }
    }

    pub fn as_animation(&self) -> Option<AnimationMode> {
        match self {
            Value::Animation(mode) => Some(*mode),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.as_element().map(|element| element.position)
    }
}

/// A single property change delivered to listeners.
///
/// Collection membership changes carry `old: None` on insertion and
/// `new: None` on removal. Element attribute changes carry full snapshots of
/// the element on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeEvent {
    pub source: EventSource,
    pub key: PropertyKey,
    pub old: Option<Value>,
    pub new: Option<Value>,
}

impl ChangeEvent {
    pub fn new(
        source: EventSource,
        key: PropertyKey,
        old: Option<Value>,
        new: Option<Value>,
    ) -> Self {
        Self {
            source,
            key,
            old,
            new,
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.old.is_none() && self.new.is_some()
    }

    pub fn is_removal(&self) -> bool {
        self.old.is_some() && self.new.is_none()
    }
}

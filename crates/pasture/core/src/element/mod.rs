//! Positioned, observable elements.
//!
//! [`Element`] is a shared handle over an identity, a position, a message
//! slot and a weak back-reference to the owning [`Field`]. The type
//! parameter carries whatever extra state a concrete element has: nothing
//! for grass, calves and buckets, direction/status/milk for cattle.
//!
//! Every setter goes through one path: take the write lock, snapshot, mutate,
//! snapshot again, release the lock, then notify. Listeners therefore always
//! see complete before/after copies and may call back into the element.

mod decoration;

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, Weak};

use crate::error::{ErrorSeverity, PastureError};
use crate::field::{Field, FieldShared};
use crate::id::{ElementId, IdGenerator};
use crate::observer::{ChangeEvent, EventSource, Listener, Observable, PropertyKey, Value};
use crate::state::{ElementKind, ElementSnapshot, Message, Notice, Position};
use crate::sync;

pub use decoration::Decoration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementError {
    #[error("element {id} has not been placed on a field")]
    Unplaced { id: ElementId },

    #[error("the field owning element {id} no longer exists")]
    FieldDropped { id: ElementId },
}

impl PastureError for ElementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unplaced { .. } => ErrorSeverity::Validation,
            Self::FieldDropped { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unplaced { .. } => "ELEMENT_UNPLACED",
            Self::FieldDropped { .. } => "ELEMENT_FIELD_DROPPED",
        }
    }
}

/// Element-specific state stored next to the common element state.
pub trait Attributes: Send + Sync + 'static {
    const KIND: ElementKind;

    /// Display name of the element, if it has one of its own.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Builds the event payload for an element carrying these attributes.
    fn snapshot(&self, element: ElementSnapshot) -> Value;
}

/// Attributes of a grass patch (none).
#[derive(Clone, Copy, Debug, Default)]
pub struct GrassAttrs;

/// Attributes of a calf (none).
#[derive(Clone, Copy, Debug, Default)]
pub struct CalfAttrs;

/// Attributes of a bucket (none).
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketAttrs;

impl Attributes for GrassAttrs {
    const KIND: ElementKind = ElementKind::Grass;

    fn snapshot(&self, element: ElementSnapshot) -> Value {
        Value::Element(element)
    }
}

impl Attributes for CalfAttrs {
    const KIND: ElementKind = ElementKind::Calf;

    fn snapshot(&self, element: ElementSnapshot) -> Value {
        Value::Element(element)
    }
}

impl Attributes for BucketAttrs {
    const KIND: ElementKind = ElementKind::Bucket;

    fn snapshot(&self, element: ElementSnapshot) -> Value {
        Value::Element(element)
    }
}

/// Consumable marker; a cattle on the same cell can eat or smoke it.
pub type Grass = Element<GrassAttrs>;

/// Stationary marker enabling milking on its cell.
pub type Calf = Element<CalfAttrs>;

/// Decorative element that positions itself without joining a field's
/// collections.
pub type Bucket = Element<BucketAttrs>;

pub(crate) struct ElementState<A> {
    pub(crate) field: Option<Weak<FieldShared>>,
    pub(crate) position: Position,
    pub(crate) message: Message,
    pub(crate) attrs: A,
}

struct Inner<A> {
    id: ElementId,
    observable: Observable,
    state: RwLock<ElementState<A>>,
}

/// Shared handle to a positioned element.
///
/// Cloning the handle does not copy the element; equality is identity.
pub struct Element<A: Attributes> {
    inner: Arc<Inner<A>>,
}

impl<A: Attributes> Element<A> {
    pub(crate) fn with_attrs(attrs: A, ids: &IdGenerator) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: ids.next_id(),
                observable: Observable::new(),
                state: RwLock::new(ElementState {
                    field: None,
                    position: Position::ORIGIN,
                    message: Message::Empty,
                    attrs,
                }),
            }),
        }
    }

    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    pub fn kind(&self) -> ElementKind {
        A::KIND
    }

    /// The element's own name, or its kind when it has none.
    pub fn name(&self) -> String {
        self.read()
            .attrs
            .name()
            .map_or_else(|| A::KIND.to_string(), str::to_owned)
    }

    pub fn position(&self) -> Position {
        self.read().position
    }

    pub fn set_position(&self, position: Position) {
        self.update(PropertyKey::Position, |state| state.position = position);
    }

    pub fn message(&self) -> Message {
        self.read().message.clone()
    }

    /// Replaces the message slot with free text.
    pub fn show_message(&self, text: impl Into<String>) {
        let message = Message::Text(text.into());
        self.update(PropertyKey::Message, |state| state.message = message);
    }

    pub(crate) fn show_notice(&self, notice: Notice) {
        self.update(PropertyKey::Message, |state| {
            state.message = Message::Notice(notice)
        });
    }

    /// Returns the field this element was placed on.
    pub fn field(&self) -> Result<Field, ElementError> {
        let id = self.id();
        let weak = self
            .read()
            .field
            .clone()
            .ok_or(ElementError::Unplaced { id })?;
        weak.upgrade()
            .map(Field::from_shared)
            .ok_or(ElementError::FieldDropped { id })
    }

    pub fn is_placed(&self) -> bool {
        self.read().field.is_some()
    }

    /// Current state as an event payload.
    pub fn snapshot(&self) -> Value {
        self.snapshot_of(&self.read())
    }

    pub fn add_listener(&self, listener: Arc<dyn Listener>) {
        self.inner.observable.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn Listener>) -> bool {
        self.inner.observable.remove_listener(listener)
    }

    /// Binds the element to `field` without notifying anyone.
    pub(crate) fn attach(&self, field: &Field) {
        sync::write(&self.inner.state).field = Some(field.downgrade());
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, ElementState<A>> {
        sync::read(&self.inner.state)
    }

    /// Applies `mutate` and notifies listeners under `key` with full
    /// before/after snapshots.
    pub(crate) fn update<R>(
        &self,
        key: PropertyKey,
        mutate: impl FnOnce(&mut ElementState<A>) -> R,
    ) -> R {
        let (old, new, result) = {
            let mut state = sync::write(&self.inner.state);
            let old = self.snapshot_of(&*state);
            let result = mutate(&mut *state);
            let new = self.snapshot_of(&*state);
            (old, new, result)
        };
        self.inner.observable.notify(&ChangeEvent::new(
            self.source(),
            key,
            Some(old),
            Some(new),
        ));
        result
    }

    fn snapshot_of(&self, state: &ElementState<A>) -> Value {
        state.attrs.snapshot(ElementSnapshot {
            id: self.inner.id,
            kind: A::KIND,
            position: state.position,
            message: state.message.clone(),
        })
    }

    fn source(&self) -> EventSource {
        EventSource::Element {
            id: self.inner.id,
            kind: A::KIND,
        }
    }
}

impl Element<GrassAttrs> {
    pub(crate) fn grass(ids: &IdGenerator) -> Self {
        Self::with_attrs(GrassAttrs, ids)
    }
}

impl Element<CalfAttrs> {
    pub(crate) fn calf(ids: &IdGenerator) -> Self {
        Self::with_attrs(CalfAttrs, ids)
    }
}

impl Element<BucketAttrs> {
    pub fn new() -> Self {
        Self::with_generator(&IdGenerator::global())
    }

    pub fn with_generator(ids: &IdGenerator) -> Self {
        Self::with_attrs(BucketAttrs, ids)
    }

    /// Binds the bucket to `field` and moves it to `position`.
    ///
    /// The bucket does not join any of the field's collections.
    pub fn place_on(&self, field: &Field, position: Position) {
        self.attach(field);
        self.set_position(position);
    }
}

impl Default for Element<BucketAttrs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Attributes> Clone for Element<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Attributes> PartialEq for Element<A> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A: Attributes> Eq for Element<A> {}

impl<A: Attributes> fmt::Debug for Element<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("kind", &A::KIND)
            .field("position", &self.position())
            .finish()
    }
}

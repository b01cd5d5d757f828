//! The field: bounded grid, entity registry and spatial authority.
//!
//! A [`Field`] owns the membership of its cattle, calf and grass collections
//! and answers every spatial question the elements ask. [`Field::is_valid`]
//! is the only place grid bounds are checked.
//!
//! Placement through [`Field::grow_grass`] and [`Field::place_calf`] is not
//! bounds-checked: scenery may sit outside the nominal grid. Resizing never
//! evicts or moves existing entities.

use std::fmt;
use std::sync::{Arc, RwLock, Weak};

use tracing::{debug, trace};

use crate::cattle::Cattle;
use crate::config::{AnimationMode, PastureConfig};
use crate::element::{Calf, Grass};
use crate::error::{ErrorSeverity, PastureError};
use crate::id::IdGenerator;
use crate::observer::{ChangeEvent, EventSource, Listener, Observable, PropertyKey, Value};
use crate::state::{Axis, Dimensions, Position};
use crate::sync;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    #[error("a field needs at least one cell along its {axis}")]
    EmptyDimension { axis: Axis },
}

impl PastureError for FieldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDimension { .. } => "FIELD_EMPTY_DIMENSION",
        }
    }
}

struct FieldState {
    dimensions: Dimensions,
    animation: AnimationMode,
    cattle: Vec<Cattle>,
    calves: Vec<Calf>,
    grass: Vec<Grass>,
}

pub(crate) struct FieldShared {
    observable: Observable,
    ids: Arc<IdGenerator>,
    state: RwLock<FieldState>,
}

/// Shared handle to a field.
///
/// Clones refer to the same grid. Elements hold only weak references back,
/// so the grid lives as long as some `Field` handle does.
#[derive(Clone)]
pub struct Field {
    shared: Arc<FieldShared>,
}

impl Field {
    /// Creates an empty field drawing element ids from the global generator.
    pub fn new(columns: u32, rows: u32) -> Result<Self, FieldError> {
        Self::with_generator(columns, rows, IdGenerator::global())
    }

    /// Creates an empty field whose elements take ids from `ids`.
    pub fn with_generator(
        columns: u32,
        rows: u32,
        ids: Arc<IdGenerator>,
    ) -> Result<Self, FieldError> {
        validate(Axis::Columns, columns)?;
        validate(Axis::Rows, rows)?;
        Ok(Self::build(Dimensions::new(columns, rows), ids))
    }

    pub fn from_config(config: &PastureConfig) -> Result<Self, FieldError> {
        let field = Self::new(config.columns, config.rows)?;
        sync::write(&field.shared.state).animation = config.animation;
        Ok(field)
    }

    fn build(dimensions: Dimensions, ids: Arc<IdGenerator>) -> Self {
        Self {
            shared: Arc::new(FieldShared {
                observable: Observable::new(),
                ids,
                state: RwLock::new(FieldState {
                    dimensions,
                    animation: PastureConfig::DEFAULT_ANIMATION,
                    cattle: Vec::new(),
                    calves: Vec::new(),
                    grass: Vec::new(),
                }),
            }),
        }
    }

    pub(crate) fn from_shared(shared: Arc<FieldShared>) -> Self {
        Self { shared }
    }

    pub(crate) fn downgrade(&self) -> Weak<FieldShared> {
        Arc::downgrade(&self.shared)
    }

    // ===== size & mode =====

    pub fn columns(&self) -> u32 {
        self.dimensions().columns
    }

    pub fn rows(&self) -> u32 {
        self.dimensions().rows
    }

    pub fn dimensions(&self) -> Dimensions {
        sync::read(&self.shared.state).dimensions
    }

    pub fn set_columns(&self, columns: u32) -> Result<(), FieldError> {
        validate(Axis::Columns, columns)?;
        self.resize(|dimensions| dimensions.columns = columns);
        Ok(())
    }

    pub fn set_rows(&self, rows: u32) -> Result<(), FieldError> {
        validate(Axis::Rows, rows)?;
        self.resize(|dimensions| dimensions.rows = rows);
        Ok(())
    }

    fn resize(&self, change: impl FnOnce(&mut Dimensions)) {
        let (old, new) = {
            let mut state = sync::write(&self.shared.state);
            let old = state.dimensions;
            change(&mut state.dimensions);
            (old, state.dimensions)
        };
        if old != new {
            self.emit(
                PropertyKey::Size,
                Some(Value::Dimensions(old)),
                Some(Value::Dimensions(new)),
            );
        }
    }

    pub fn animation(&self) -> AnimationMode {
        sync::read(&self.shared.state).animation
    }

    /// Stores the animation mode for rendering layers to pick up.
    pub fn set_animation(&self, mode: AnimationMode) {
        let old = std::mem::replace(&mut sync::write(&self.shared.state).animation, mode);
        if old != mode {
            self.emit(
                PropertyKey::Animation,
                Some(Value::Animation(old)),
                Some(Value::Animation(mode)),
            );
        }
    }

    // ===== registration =====

    /// Grows a grass patch at `position`.
    pub fn grow_grass(&self, position: Position) -> Grass {
        let grass = Grass::grass(&self.shared.ids);
        grass.attach(self);
        grass.set_position(position);
        sync::write(&self.shared.state).grass.push(grass.clone());
        self.emit(PropertyKey::Grass, None, Some(grass.snapshot()));
        grass
    }

    /// Creates a cattle called `name` at the origin and lets it graze here.
    pub fn let_cattle_graze(&self, name: impl Into<String>) -> Cattle {
        self.let_graze(Cattle::with_generator(name, &self.shared.ids))
    }

    /// Lets an existing cattle graze here, keeping its current position.
    ///
    /// A cattle grazing on another live field leaves that herd first, with a
    /// removal event there. Adding the same cattle to this field twice
    /// registers it twice.
    pub fn let_graze(&self, cattle: Cattle) -> Cattle {
        if let Ok(previous) = cattle.field() {
            if previous != *self {
                while previous.remove_cattle(&cattle) {}
                debug!(id = %cattle.id(), "cattle changed fields");
            }
        }
        cattle.attach(self);
        sync::write(&self.shared.state).cattle.push(cattle.clone());
        self.emit(PropertyKey::Cattle, None, Some(cattle.snapshot()));
        cattle
    }

    /// Places a calf at `position`.
    pub fn place_calf(&self, position: Position) -> Calf {
        let calf = Calf::calf(&self.shared.ids);
        calf.attach(self);
        calf.set_position(position);
        sync::write(&self.shared.state).calves.push(calf.clone());
        self.emit(PropertyKey::Calves, None, Some(calf.snapshot()));
        calf
    }

    // ===== spatial queries =====

    /// Returns true iff `position` lies inside the grid.
    pub fn is_valid(&self, position: Position) -> bool {
        let valid = self.dimensions().contains(position);
        trace!(%position, valid, "bounds check");
        valid
    }

    pub fn is_grass_at(&self, position: Position) -> bool {
        sync::read(&self.shared.state)
            .grass
            .iter()
            .any(|grass| grass.position() == position)
    }

    pub fn is_calf_at(&self, position: Position) -> bool {
        sync::read(&self.shared.state)
            .calves
            .iter()
            .any(|calf| calf.position() == position)
    }

    // ===== removal =====

    /// Removes the first grass patch at `position`, if any.
    pub fn remove_grass_at(&self, position: Position) -> Option<Grass> {
        let removed = {
            let mut state = sync::write(&self.shared.state);
            let index = state
                .grass
                .iter()
                .position(|grass| grass.position() == position)?;
            state.grass.remove(index)
        };
        debug!(id = %removed.id(), %position, "grass removed");
        self.emit(PropertyKey::Grass, Some(removed.snapshot()), None);
        Some(removed)
    }

    /// Removes `cattle` from the herd. Returns false if it was not grazing here.
    pub fn remove_cattle(&self, cattle: &Cattle) -> bool {
        let removed = {
            let mut state = sync::write(&self.shared.state);
            match state.cattle.iter().position(|member| member == cattle) {
                Some(index) => state.cattle.remove(index),
                None => return false,
            }
        };
        debug!(id = %removed.id(), "cattle removed");
        self.emit(PropertyKey::Cattle, Some(removed.snapshot()), None);
        true
    }

    /// Removes every cattle, one notification each. Returns how many left.
    pub fn remove_all_cattle(&self) -> usize {
        let herd = self.cattle();
        herd.iter().filter(|cattle| self.remove_cattle(cattle)).count()
    }

    // ===== membership views =====

    pub fn cattle(&self) -> Vec<Cattle> {
        sync::read(&self.shared.state).cattle.clone()
    }

    pub fn calves(&self) -> Vec<Calf> {
        sync::read(&self.shared.state).calves.clone()
    }

    pub fn grass(&self) -> Vec<Grass> {
        sync::read(&self.shared.state).grass.clone()
    }

    // ===== observation =====

    pub fn add_listener(&self, listener: Arc<dyn Listener>) {
        self.shared.observable.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn Listener>) -> bool {
        self.shared.observable.remove_listener(listener)
    }

    fn emit(&self, key: PropertyKey, old: Option<Value>, new: Option<Value>) {
        self.shared
            .observable
            .notify(&ChangeEvent::new(EventSource::Field, key, old, new));
    }
}

impl Default for Field {
    /// An empty 3×4 field.
    fn default() -> Self {
        Self::build(
            Dimensions::new(PastureConfig::DEFAULT_COLUMNS, PastureConfig::DEFAULT_ROWS),
            IdGenerator::global(),
        )
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for Field {}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = sync::read(&self.shared.state);
        f.debug_struct("Field")
            .field("dimensions", &state.dimensions)
            .field("animation", &state.animation)
            .field("cattle", &state.cattle.len())
            .field("calves", &state.calves.len())
            .field("grass", &state.grass.len())
            .finish()
    }
}

fn validate(axis: Axis, extent: u32) -> Result<(), FieldError> {
    if extent == 0 {
        Err(FieldError::EmptyDimension { axis })
    } else {
        Ok(())
    }
}

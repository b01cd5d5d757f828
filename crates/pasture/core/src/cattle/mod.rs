//! Cattle: the only mobile element on a field.
//!
//! A cattle faces one [`Direction`], walks one cell at a time, eats or smokes
//! the grass it stands on, and gives milk to a calf on the same cell. Moves
//! are validated through [`Field::is_valid`](crate::Field::is_valid); when a
//! move or action cannot happen the cattle says so through its message slot
//! and nothing else changes.
//!
//! Operations that need the field return `Err` only when the cattle is not
//! grazing on a live field. Refused moves and missing grass are not errors.

mod comparable;
mod dance;

pub use comparable::ComparableCattle;

use crate::element::{Attributes, Element, ElementError};
use crate::id::IdGenerator;
use crate::observer::{PropertyKey, Value};
use crate::state::{CattleSnapshot, Direction, ElementKind, ElementSnapshot, Notice, Status};

/// State a cattle carries on top of the common element state.
#[derive(Clone, Debug)]
pub struct CattleAttrs {
    name: String,
    direction: Direction,
    status: Status,
    milk: u32,
}

impl CattleAttrs {
    fn new(name: String) -> Self {
        Self {
            name,
            direction: Direction::default(),
            status: Status::default(),
            milk: 0,
        }
    }
}

impl Attributes for CattleAttrs {
    const KIND: ElementKind = ElementKind::Cattle;

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn snapshot(&self, element: ElementSnapshot) -> Value {
        Value::Cattle(CattleSnapshot {
            element,
            name: self.name.clone(),
            direction: self.direction,
            status: self.status,
            milk: self.milk,
        })
    }
}

pub type Cattle = Element<CattleAttrs>;

impl Element<CattleAttrs> {
    /// Creates a waiting, east-facing cattle with an empty udder.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_generator(name, &IdGenerator::global())
    }

    pub fn with_generator(name: impl Into<String>, ids: &IdGenerator) -> Self {
        Self::with_attrs(CattleAttrs::new(name.into()), ids)
    }

    pub fn direction(&self) -> Direction {
        self.read().attrs.direction
    }

    pub fn set_direction(&self, direction: Direction) {
        self.update(PropertyKey::Direction, |state| {
            state.attrs.direction = direction
        });
    }

    pub fn status(&self) -> Status {
        self.read().attrs.status
    }

    fn set_status(&self, status: Status) {
        self.update(PropertyKey::Status, |state| state.attrs.status = status);
    }

    /// Amount of milk currently held.
    pub fn milk_held(&self) -> u32 {
        self.read().attrs.milk
    }

    pub fn has_milk(&self) -> bool {
        self.milk_held() > 0
    }

    // ===== movement =====

    /// Steps one cell forward if the field continues there.
    pub fn move_forward(&self) -> Result<(), ElementError> {
        self.step_towards(self.direction(), Notice::NoFieldAhead)
    }

    /// Steps one cell backward, keeping the current facing.
    pub fn move_backward(&self) -> Result<(), ElementError> {
        self.step_towards(self.direction().opposite(), Notice::NoFieldBehind)
    }

    pub fn can_move_forward(&self) -> Result<bool, ElementError> {
        self.can_step_towards(self.direction())
    }

    pub fn can_move_backward(&self) -> Result<bool, ElementError> {
        self.can_step_towards(self.direction().opposite())
    }

    pub fn rotate_left(&self) {
        self.update(PropertyKey::Direction, |state| {
            state.attrs.direction = state.attrs.direction.left()
        });
    }

    pub fn rotate_right(&self) {
        self.update(PropertyKey::Direction, |state| {
            state.attrs.direction = state.attrs.direction.right()
        });
    }

    fn step_towards(&self, direction: Direction, refusal: Notice) -> Result<(), ElementError> {
        let field = self.field()?;
        let target = self.position().stepped(direction);
        if field.is_valid(target) {
            self.set_position(target);
        } else {
            self.show_notice(refusal);
        }
        Ok(())
    }

    fn can_step_towards(&self, direction: Direction) -> Result<bool, ElementError> {
        let field = self.field()?;
        Ok(field.is_valid(self.position().stepped(direction)))
    }

    // ===== grass & milk =====

    /// Smokes the grass on the current cell.
    pub fn smoke_grass(&self) -> Result<(), ElementError> {
        let field = self.field()?;
        let position = self.position();
        if !field.is_grass_at(position) {
            self.show_notice(Notice::NothingToSmoke);
            return Ok(());
        }
        self.set_status(Status::Smoking);
        if field.remove_grass_at(position).is_none() {
            self.show_notice(Notice::NothingToSmoke);
        }
        self.set_status(Status::Waiting);
        Ok(())
    }

    /// Eats the grass on the current cell, gaining one unit of milk.
    ///
    /// If the patch is gone by the time it would be removed, the milk is
    /// taken back and the cattle complains as if there had been no grass.
    pub fn eat_grass(&self) -> Result<(), ElementError> {
        let field = self.field()?;
        let position = self.position();
        if !field.is_grass_at(position) {
            self.show_notice(Notice::NoGrass);
            return Ok(());
        }
        self.set_status(Status::Eating);
        self.update(PropertyKey::Milk, |state| {
            state.attrs.milk = state.attrs.milk.saturating_add(1)
        });
        if field.remove_grass_at(position).is_none() {
            self.update(PropertyKey::Milk, |state| {
                state.attrs.milk = state.attrs.milk.saturating_sub(1)
            });
            self.show_notice(Notice::NoGrass);
        }
        self.set_status(Status::Waiting);
        Ok(())
    }

    /// Hands all held milk to a calf on the current cell.
    ///
    /// Returns the amount given; 0 when there is no calf here or nothing to
    /// give, in which case the cattle says why.
    pub fn milk(&self) -> Result<u32, ElementError> {
        let field = self.field()?;
        if !field.is_calf_at(self.position()) {
            self.show_notice(Notice::NoCalf);
            return Ok(0);
        }
        if !self.has_milk() {
            self.show_notice(Notice::MustEatFirst);
            return Ok(0);
        }
        Ok(self.update(PropertyKey::Milk, |state| {
            std::mem::take(&mut state.attrs.milk)
        }))
    }
}

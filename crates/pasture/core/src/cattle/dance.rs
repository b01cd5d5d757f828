//! Sidesteps and the cha-cha-cha.

use super::Cattle;
use crate::element::ElementError;
use crate::state::Notice;

impl Cattle {
    /// Steps one cell to the left of the current facing without turning.
    pub fn step_left(&self) -> Result<(), ElementError> {
        self.step_towards(self.direction().left(), Notice::NoFieldLeft)
    }

    /// Steps one cell to the right of the current facing without turning.
    pub fn step_right(&self) -> Result<(), ElementError> {
        self.step_towards(self.direction().right(), Notice::NoFieldRight)
    }

    pub fn can_step_left(&self) -> Result<bool, ElementError> {
        self.can_step_towards(self.direction().left())
    }

    pub fn can_step_right(&self) -> Result<bool, ElementError> {
        self.can_step_towards(self.direction().right())
    }

    /// Forward, back, left, left, back, forward, right, right.
    ///
    /// With room on every side the dancer ends where it started.
    pub fn cha_cha_cha(&self) -> Result<(), ElementError> {
        self.move_forward()?;
        self.move_backward()?;
        self.step_left()?;
        self.step_left()?;
        self.move_backward()?;
        self.move_forward()?;
        self.step_right()?;
        self.step_right()
    }
}

//! Scripted herd management, the controller side of the model.
use pasture_core::{ElementError, Field, Position};

/// A script that prepares a field and then drives its herd.
pub trait HerdManager {
    /// Prepares the field before any cattle act. Does nothing by default.
    fn set_up_field(&self, _field: &Field) -> Result<(), ElementError> {
        Ok(())
    }

    fn manage_herd(&self, field: &Field) -> Result<(), ElementError>;
}

/// Lets one cattle graze, walk forward and eat whatever it finds.
#[derive(Clone, Debug)]
pub struct WalkingHerd {
    pub name: String,
    pub grass_at: Option<Position>,
    pub calf_at: Option<Position>,
}

impl Default for WalkingHerd {
    fn default() -> Self {
        Self {
            name: "Vera".to_owned(),
            grass_at: Some(Position::new(1, 0)),
            calf_at: Some(Position::new(2, 0)),
        }
    }
}

impl HerdManager for WalkingHerd {
    fn set_up_field(&self, field: &Field) -> Result<(), ElementError> {
        if let Some(position) = self.grass_at {
            field.grow_grass(position);
        }
        if let Some(position) = self.calf_at {
            field.place_calf(position);
        }
        Ok(())
    }

    fn manage_herd(&self, field: &Field) -> Result<(), ElementError> {
        let cattle = field.let_cattle_graze(self.name.clone());
        while cattle.can_move_forward()? {
            cattle.move_forward()?;
            if field.is_grass_at(cattle.position()) {
                cattle.eat_grass()?;
            }
            if field.is_calf_at(cattle.position()) {
                let milk = cattle.milk()?;
                tracing::info!(cattle = %cattle.name(), milk, "milked");
            }
        }
        tracing::info!(cattle = %cattle.name(), position = %cattle.position(), "walk finished");
        Ok(())
    }
}

//! Frozen copies of model state carried by change events.
//!
//! Snapshots are plain values detached from the live objects: mutating an
//! element after a notification never alters a snapshot a listener kept.

use super::{Direction, Message, Position};
use crate::id::ElementId;

/// Concrete type of a positioned element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    Grass,
    Calf,
    Bucket,
    Cattle,
}

/// Activity of a cattle.
///
/// `Eating` and `Smoking` are transient: the operation entering them returns
/// to `Waiting` before it completes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    #[default]
    Waiting,
    Eating,
    Smoking,
}

/// One of the two grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    Columns,
    Rows,
}

/// Size of a field in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub columns: u32,
    pub rows: u32,
}

impl Dimensions {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Returns true if `position` lies inside a grid of this size.
    pub fn contains(&self, position: Position) -> bool {
        let inside = |coordinate: i32, extent: u32| {
            u32::try_from(coordinate).is_ok_and(|coordinate| coordinate < extent)
        };
        inside(position.x, self.columns) && inside(position.y, self.rows)
    }
}

/// State shared by every positioned element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub kind: ElementKind,
    pub position: Position,
    pub message: Message,
}

/// Complete state of a cattle at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CattleSnapshot {
    pub element: ElementSnapshot,
    pub name: String,
    pub direction: Direction,
    pub status: Status,
    pub milk: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_contain_exactly_the_half_open_ranges() {
        let size = Dimensions::new(3, 2);
        for x in -2..5 {
            for y in -2..4 {
                let expected = (0..3).contains(&x) && (0..2).contains(&y);
                assert_eq!(size.contains(Position::new(x, y)), expected, "({x}, {y})");
            }
        }
    }
}

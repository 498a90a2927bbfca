//! Ship placement and hit tracking.

use core::fmt;

use crate::common::Position;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends to the right of the start cell.
    Horizontal,
    /// Extends downward from the start cell.
    Vertical,
}

impl Orientation {
    /// Cells covered by a ship of `size` starting at `start`, or `None` if a
    /// coordinate would overflow.
    ///
    /// Positions may fall outside the grid; the board validates them.
    pub fn cells(self, start: Position, size: usize) -> Option<Vec<Position>> {
        (0..size)
            .map(|i| match self {
                Orientation::Horizontal => {
                    start.col.checked_add(i).map(|col| Position::new(start.row, col))
                }
                Orientation::Vertical => {
                    start.row.checked_add(i).map(|row| Position::new(row, start.col))
                }
            })
            .collect()
    }
}

/// A ship placed on the board, with the subset of its cells that were hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    positions: Vec<Position>,
    hits: Vec<Position>,
}

impl Ship {
    pub fn new(name: impl Into<String>, positions: Vec<Position>) -> Self {
        Ship {
            name: name.into(),
            positions,
            hits: Vec::new(),
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn hits(&self) -> &[Position] {
        &self.hits
    }

    /// Returns `true` if `pos` is one of the ship's cells.
    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Register a hit at `pos`. Returns `true` if it was newly recorded.
    ///
    /// Positions the ship does not occupy and repeated hits are ignored, so
    /// the hit set never grows past the ship's length.
    pub fn register_hit(&mut self, pos: Position) -> bool {
        if !self.occupies(pos) || self.hits.contains(&pos) {
            return false;
        }
        self.hits.push(pos);
        true
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.positions.len()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", positions: {:?}, hits: {}, sunk: {} }}",
            self.name,
            self.positions,
            self.hits.len(),
            self.is_sunk(),
        )
    }
}

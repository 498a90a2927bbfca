//! Common types for Battleship: grid coordinates, cell states, attack results
//! and board errors.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A (row, col) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Water,
    /// Never shown on an opponent's view.
    ShipPresent,
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// Returns `true` once the cell has been resolved by an attack.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }
}

/// Outcome of a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackResult {
    /// Attack landed on open water.
    Miss,
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack sank a ship, but the fleet survives.
    Sunk,
    /// Cell was already resolved; nothing changed.
    AlreadyTried,
    /// Attack sank the last ship of the fleet.
    Win,
}

impl AttackResult {
    /// Knowledge an attacker gains about the target cell, if any.
    pub fn revealed_state(self) -> Option<CellState> {
        match self {
            AttackResult::Hit => Some(CellState::Hit),
            AttackResult::Sunk | AttackResult::Win => Some(CellState::Sunk),
            AttackResult::Miss => Some(CellState::Miss),
            AttackResult::AlreadyTried => None,
        }
    }
}

/// Errors returned by Board and Player operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Position),
    /// Random placement could not fit a ship within the attempt budget.
    PlacementExhausted { ship: String, attempts: usize },
    /// The board has no unresolved cell left to fire at.
    NoLegalShot,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(p) => {
                write!(f, "Position out of bounds: row={}, col={}", p.row, p.col)
            }
            BoardError::PlacementExhausted { ship, attempts } => {
                write!(f, "Failed to place {} after {} attempts", ship, attempts)
            }
            BoardError::NoLegalShot => write!(f, "No untried position left on the board"),
        }
    }
}

impl std::error::Error for BoardError {}

//! Game board state: a grid of cell states plus the ships placed on it.

use crate::common::{AttackResult, BoardError, CellState, Position};
use crate::config::{PlacementRule, BOARD_SIZE};
use crate::ship::{Orientation, Ship};
use core::fmt;

type Grid = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// A player's fleet board, or a ship-less tracking board of revealed knowledge.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    rule: PlacementRule,
}

impl Board {
    /// Create an all-water board with permissive placement.
    pub fn new() -> Self {
        Self::with_rule(PlacementRule::Permissive)
    }

    pub fn with_rule(rule: PlacementRule) -> Self {
        Board {
            grid: [[CellState::Water; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            rule,
        }
    }

    pub fn rule(&self) -> PlacementRule {
        self.rule
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < BOARD_SIZE && pos.col < BOARD_SIZE
    }

    /// Returns `true` if `positions` is non-empty and every position is on the
    /// grid and still water.
    ///
    /// Under [`PlacementRule::NoTouching`] the positions must also keep clear
    /// of the eight neighbours of every placed ship cell.
    pub fn can_place_ship(&self, positions: &[Position]) -> bool {
        let fits = !positions.is_empty()
            && positions
                .iter()
                .all(|&p| self.in_bounds(p) && self.grid[p.row][p.col] == CellState::Water);
        match self.rule {
            PlacementRule::Permissive => fits,
            PlacementRule::NoTouching => {
                fits && positions.iter().all(|&p| !self.touches_ship(p))
            }
        }
    }

    fn touches_ship(&self, pos: Position) -> bool {
        let rows = pos.row.saturating_sub(1)..=(pos.row + 1).min(BOARD_SIZE - 1);
        rows.flat_map(|r| {
            let cols = pos.col.saturating_sub(1)..=(pos.col + 1).min(BOARD_SIZE - 1);
            cols.map(move |c| (r, c))
        })
        .any(|(r, c)| {
            matches!(
                self.grid[r][c],
                CellState::ShipPresent | CellState::Hit | CellState::Sunk
            )
        })
    }

    /// Place a ship of `size` cells starting at `start`.
    ///
    /// Returns `false` and leaves the board untouched if the placement is
    /// rejected, including zero-length ships.
    pub fn place_ship(
        &mut self,
        name: &str,
        size: usize,
        start: Position,
        orientation: Orientation,
    ) -> bool {
        let Some(positions) = orientation.cells(start, size) else {
            return false;
        };
        if size == 0 || !self.can_place_ship(&positions) {
            return false;
        }
        for p in &positions {
            self.grid[p.row][p.col] = CellState::ShipPresent;
        }
        self.ships.push(Ship::new(name, positions));
        true
    }

    /// Resolve an attack at `pos`.
    pub fn receive_attack(&mut self, pos: Position) -> Result<AttackResult, BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        match self.grid[pos.row][pos.col] {
            CellState::Hit | CellState::Miss | CellState::Sunk => Ok(AttackResult::AlreadyTried),
            CellState::Water => {
                self.grid[pos.row][pos.col] = CellState::Miss;
                Ok(AttackResult::Miss)
            }
            CellState::ShipPresent => {
                self.grid[pos.row][pos.col] = CellState::Hit;
                let Some(ship) = self.ships.iter_mut().find(|s| s.occupies(pos)) else {
                    // every ShipPresent cell is owned by a ship
                    return Ok(AttackResult::Hit);
                };
                ship.register_hit(pos);
                if !ship.is_sunk() {
                    return Ok(AttackResult::Hit);
                }
                for p in ship.positions() {
                    self.grid[p.row][p.col] = CellState::Sunk;
                }
                if self.all_ships_sunk() {
                    Ok(AttackResult::Win)
                } else {
                    Ok(AttackResult::Sunk)
                }
            }
        }
    }

    /// State of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Result<CellState, BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(self.grid[pos.row][pos.col])
    }

    /// Record what an attacker has learned about `pos`. Intended for tracking
    /// boards, which hold no ships.
    pub fn mark_knowledge(&mut self, pos: Position, state: CellState) -> Result<(), BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        self.grid[pos.row][pos.col] = state;
        Ok(())
    }

    /// Returns `true` when ships were placed and all of them are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Positions that have not been resolved by an attack yet, in row-major order.
    pub fn untried_positions(&self) -> Vec<Position> {
        let mut out = Vec::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_resolved() {
                    out.push(Position::new(r, c));
                }
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  rule: {:?},\n  ships: {:?},\n  untried: {}\n}}",
            self.rule,
            self.ships,
            self.untried_positions().len(),
        )
    }
}

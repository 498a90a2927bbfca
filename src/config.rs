//! Fleet and board configuration.

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 10;

/// Attempts allowed per ship during random placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

/// Definition of a ship: name and length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDef {
    name: String,
    size: usize,
}

impl ShipDef {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// How closely ships may be packed during placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRule {
    /// Only exact-cell overlap is rejected; ships may touch.
    #[default]
    Permissive,
    /// Ships may not share an edge or a corner.
    NoTouching,
}

/// The list of ships each player places at setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfig {
    ships: Vec<ShipDef>,
}

impl FleetConfig {
    pub fn new(ships: Vec<ShipDef>) -> Self {
        Self { ships }
    }

    /// Carrier, Battleship, Cruiser, Submarine and Destroyer.
    pub fn standard() -> Self {
        Self::new(vec![
            ShipDef::new("Carrier", 5),
            ShipDef::new("Battleship", 4),
            ShipDef::new("Cruiser", 3),
            ShipDef::new("Submarine", 3),
            ShipDef::new("Destroyer", 2),
        ])
    }

    pub fn ships(&self) -> &[ShipDef] {
        &self.ships
    }

    /// Total number of ship segments in the fleet.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(ShipDef::size).sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet_covers_seventeen_cells() {
        let fleet = FleetConfig::standard();
        assert_eq!(fleet.ships().len(), 5);
        assert_eq!(fleet.total_cells(), 17);
        assert_eq!(fleet.ships()[0].name(), "Carrier");
        assert_eq!(fleet.ships()[4].size(), 2);
    }
}

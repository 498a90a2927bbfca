use log::{debug, trace};

use crate::{
    board::Board,
    common::{AttackResult, BoardError, Position},
    config::{FleetConfig, PlacementRule, BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS},
    random::RandomSource,
    ship::Orientation,
};

/// A named participant owning a fleet board.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rule(name, PlacementRule::Permissive)
    }

    pub fn with_rule(name: impl Into<String>, rule: PlacementRule) -> Self {
        Self {
            name: name.into(),
            board: Board::with_rule(rule),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable reference to the board for manual ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Place every ship of `fleet` at a random legal start and orientation.
    ///
    /// Each ship gets [`MAX_PLACEMENT_ATTEMPTS`] tries; running out is fatal.
    pub fn auto_place_ships<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &FleetConfig,
    ) -> Result<(), BoardError> {
        for def in fleet.ships() {
            let size = def.size();
            let mut attempts = 0;
            let mut placed = false;
            while !placed && attempts < MAX_PLACEMENT_ATTEMPTS {
                attempts += 1;
                if size == 0 || size > BOARD_SIZE {
                    continue;
                }
                let orient = if rng.next_bool() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_r, max_c) = match orient {
                    Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - size),
                    Orientation::Vertical => (BOARD_SIZE - size, BOARD_SIZE - 1),
                };
                let start = Position::new(rng.next_int(0, max_r), rng.next_int(0, max_c));
                placed = self.board.place_ship(def.name(), size, start, orient);
                if placed {
                    debug!(
                        "{}: placed {} at {:?} {:?}",
                        self.name,
                        def.name(),
                        start,
                        orient
                    );
                }
            }
            if !placed {
                return Err(BoardError::PlacementExhausted {
                    ship: def.name().to_string(),
                    attempts,
                });
            }
            trace!("{}: {} took {} attempt(s)", self.name, def.name(), attempts);
        }
        Ok(())
    }

    /// Resolve an incoming attack against this player's board.
    pub fn receive_attack(&mut self, pos: Position) -> Result<AttackResult, BoardError> {
        self.board.receive_attack(pos)
    }

    /// Returns `true` once the whole fleet is sunk.
    pub fn defeated(&self) -> bool {
        self.board.all_ships_sunk()
    }

    /// Pick a uniformly random position on this player's board that has not
    /// been attacked yet.
    pub fn random_legal_target<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Position, BoardError> {
        let untried = self.board.untried_positions();
        if untried.is_empty() {
            return Err(BoardError::NoLegalShot);
        }
        Ok(untried[rng.next_int(0, untried.len() - 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShipDef;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Always answers the same orientation and the lowest index.
    struct Fixed;

    impl RandomSource for Fixed {
        fn next_int(&mut self, min: usize, _max: usize) -> usize {
            min
        }
        fn next_bool(&mut self) -> bool {
            true
        }
    }

    #[test]
    fn fixed_source_exhausts_on_second_ship() {
        let fleet = FleetConfig::new(vec![ShipDef::new("A", 2), ShipDef::new("B", 2)]);
        let mut player = Player::new("P");
        let err = player.auto_place_ships(&mut Fixed, &fleet).unwrap_err();
        assert_eq!(
            err,
            BoardError::PlacementExhausted {
                ship: "B".to_string(),
                attempts: MAX_PLACEMENT_ATTEMPTS,
            }
        );
        // the first ship stays placed
        assert_eq!(player.board().ships().len(), 1);
    }

    #[test]
    fn oversized_ship_cannot_be_placed() {
        let fleet = FleetConfig::new(vec![ShipDef::new("Leviathan", BOARD_SIZE + 1)]);
        let mut player = Player::new("P");
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(matches!(
            player.auto_place_ships(&mut rng, &fleet),
            Err(BoardError::PlacementExhausted { .. })
        ));
        assert!(player.board().ships().is_empty());
    }

    #[test]
    fn random_target_skips_resolved_cells() {
        let mut player = Player::new("P");
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if (r, c) != (4, 7) {
                    player.receive_attack(Position::new(r, c)).unwrap();
                }
            }
        }
        let mut rng = SmallRng::seed_from_u64(9);
        assert_eq!(player.random_legal_target(&mut rng).unwrap(), Position::new(4, 7));
        player.receive_attack(Position::new(4, 7)).unwrap();
        assert_eq!(
            player.random_legal_target(&mut rng).unwrap_err(),
            BoardError::NoLegalShot
        );
    }
}

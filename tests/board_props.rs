use seabattle::{
    AttackResult, Board, CellState, FleetConfig, Orientation, Player, Position, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_player(seed: u64) -> (Player, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = Player::new("P");
    player
        .auto_place_ships(&mut rng, &FleetConfig::standard())
        .unwrap();
    (player, rng)
}

fn attacked_board(seed: u64) -> Board {
    let (mut player, mut rng) = random_player(seed);
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let r = rng.random_range(0..BOARD_SIZE);
        let c = rng.random_range(0..BOARD_SIZE);
        player.receive_attack(Position::new(r, c)).unwrap();
    }
    player.board().clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeat_attack_is_idempotent(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = attacked_board(seed);
        let pos = Position::new(row, col);
        board.receive_attack(pos).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.receive_attack(pos).unwrap(), AttackResult::AlreadyTried);
        prop_assert_eq!(&board, &after_first);
        prop_assert!(board.cell(pos).unwrap().is_resolved());
    }

    #[test]
    fn placement_is_atomic(
        seed in any::<u64>(),
        row in prop_oneof![0..BOARD_SIZE + 2, Just(usize::MAX - 1), Just(usize::MAX)],
        col in prop_oneof![0..BOARD_SIZE + 2, Just(usize::MAX - 1), Just(usize::MAX)],
        size in 0usize..6,
        horizontal in any::<bool>(),
    ) {
        let (player, _) = random_player(seed);
        let mut board = player.board().clone();
        let before = board.clone();
        let orient = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
        let start = Position::new(row, col);
        let cells = orient.cells(start, size);
        let expected = cells.as_deref().is_some_and(|c| board.can_place_ship(c));
        let placed = board.place_ship("Extra", size, start, orient);
        prop_assert_eq!(placed, expected);
        if placed {
            prop_assert_eq!(board.ships().len(), before.ships().len() + 1);
            for p in cells.unwrap_or_default() {
                prop_assert_eq!(board.cell(p).unwrap(), CellState::ShipPresent);
            }
        } else {
            prop_assert_eq!(&board, &before);
        }
    }

    #[test]
    fn sunk_is_monotonic_and_exact(seed in any::<u64>()) {
        let (mut player, mut rng) = random_player(seed);
        let mut was_sunk = vec![false; player.board().ships().len()];
        while !player.defeated() {
            let target = player.random_legal_target(&mut rng).unwrap();
            player.receive_attack(target).unwrap();
            for (i, ship) in player.board().ships().iter().enumerate() {
                prop_assert_eq!(ship.is_sunk(), ship.hits().len() == ship.size());
                if was_sunk[i] {
                    prop_assert!(ship.is_sunk());
                }
                was_sunk[i] = ship.is_sunk();
            }
        }
        prop_assert!(player.board().ships().iter().all(|s| s.is_sunk()));
    }

    #[test]
    fn ship_cells_match_grid(seed in any::<u64>()) {
        let board = attacked_board(seed);
        let mut owned = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let pos = Position::new(r, c);
                let owners = board.ships().iter().filter(|s| s.occupies(pos)).count();
                match board.cell(pos).unwrap() {
                    CellState::ShipPresent | CellState::Hit | CellState::Sunk => {
                        prop_assert_eq!(owners, 1);
                        owned += 1;
                    }
                    CellState::Water | CellState::Miss => prop_assert_eq!(owners, 0),
                }
            }
        }
        prop_assert_eq!(owned, FleetConfig::standard().total_cells());
    }
}

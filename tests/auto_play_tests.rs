use seabattle::{auto_play, FleetConfig, PlacementRule, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_auto_play_reaches_a_winner() {
    let fleet = FleetConfig::standard();
    for seed in 0..8u64 {
        let mut rng1 = SmallRng::seed_from_u64(seed);
        let mut rng2 = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let report = auto_play(&fleet, PlacementRule::Permissive, &mut rng1, &mut rng2).unwrap();

        let winner = &report.players[report.winner];
        let loser = &report.players[1 - report.winner];
        assert_eq!(winner.hits, fleet.total_cells());
        assert_eq!(loser.ships_remaining, 0);
        assert!(winner.ships_remaining > 0);
        assert!(report.turns <= BOARD_SIZE * BOARD_SIZE);
        assert_eq!(report.players[0].shots, report.turns);
    }
}

#[test]
fn test_auto_play_is_reproducible() {
    let fleet = FleetConfig::standard();
    let play = || {
        let mut rng1 = SmallRng::seed_from_u64(1);
        let mut rng2 = SmallRng::seed_from_u64(2);
        auto_play(&fleet, PlacementRule::NoTouching, &mut rng1, &mut rng2).unwrap()
    };
    let (a, b) = (play(), play());
    assert_eq!(a.winner, b.winner);
    assert_eq!(a.turns, b.turns);
    assert_eq!(a.players[1].hits, b.players[1].hits);
}

use seabattle::{auto_play, init_logging, FleetConfig, PlacementRule};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let report = auto_play(
        &FleetConfig::standard(),
        PlacementRule::Permissive,
        &mut rng1,
        &mut rng2,
    )?;

    let result = json!({
        "winner": report.players[report.winner].name,
        "turns": report.turns,
        "player1": report.players[0],
        "player2": report.players[1],
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

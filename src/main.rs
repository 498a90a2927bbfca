use seabattle::{init_logging, FleetConfig, GameController, PlacementRule, Side};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Play Battleship against the computer on a 10x10 board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Forbid ships from touching, even diagonally")]
    no_touching: bool,
    #[arg(long, default_value = "You", help = "Name shown for the human player")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let rule = if cli.no_touching {
        PlacementRule::NoTouching
    } else {
        PlacementRule::Permissive
    };

    let mut game = GameController::new(cli.name, FleetConfig::standard(), rule, rng);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    let outcome = game.run(&mut input, &mut out)?;

    if outcome.abandoned() {
        println!("\nInput closed after {} turn(s). Goodbye.", outcome.turns);
    } else if outcome.winner() == Some(Side::Human) {
        println!("Victory in {} turn(s).", outcome.turns);
    }
    Ok(())
}

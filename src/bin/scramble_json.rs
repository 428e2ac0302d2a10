//! Emit a shuffled board as JSON, for driving external front-ends or
//! comparing shuffles across runs.
//!
//! Usage: scramble-json <seed> [move-count]

use fifteen::{GameEngine, DEFAULT_SHUFFLE_MOVES};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [move-count]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let move_count: u32 = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => DEFAULT_SHUFFLE_MOVES,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine
        .shuffle(&mut rng, move_count)
        .map_err(|e| anyhow::anyhow!(e))?;

    let state = engine.state();
    let result = json!({
        "seed": seed,
        "move_count": move_count,
        "state": state,
        "status": format!("{:?}", engine.status()),
        "solvable": engine.board().is_solvable(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

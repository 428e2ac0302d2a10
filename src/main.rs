#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fifteen::{
    init_logging,
    render::{parse_tile, print_board, print_sprite_map, print_status},
    GameStatus, MoveOutcome, Session, DEFAULT_SHUFFLE_MOVES,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible shuffle (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_SHUFFLE_MOVES)]
        shuffle_moves: u32,
        #[arg(long, help = "Source picture dimensions as WxH; prints the tile sprite map")]
        image: Option<String>,
    },
    /// Shuffle one board and print it.
    Scramble {
        #[arg(long, help = "Fix RNG seed for a reproducible shuffle (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_SHUFFLE_MOVES)]
        shuffle_moves: u32,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn parse_dimensions(raw: &str) -> anyhow::Result<(u32, u32)> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow::anyhow!("expected WxH, got '{}'", raw))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            shuffle_moves,
            image,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (shuffle will be reproducible)", s);
            }
            let mut session = Session::new(make_rng(seed), shuffle_moves);
            match image {
                Some(raw) => {
                    let (w, h) = parse_dimensions(&raw)?;
                    session
                        .image_ready(w, h)
                        .map_err(|e| anyhow::anyhow!(e))?;
                }
                None => session.new_game().map_err(|e| anyhow::anyhow!(e))?,
            }
            log::info!("new game shuffled with {} moves", shuffle_moves);
            run_cli(session)?;
        }
        Commands::Scramble {
            seed,
            shuffle_moves,
        } => {
            let mut session = Session::new(make_rng(seed), shuffle_moves);
            session.new_game().map_err(|e| anyhow::anyhow!(e))?;
            print_board(session.board());
            println!(
                "solvable: {} (status: {:?})",
                session.board().is_solvable(),
                session.status()
            );
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_cli(mut session: Session) -> anyhow::Result<()> {
    println!("Slide tiles by typing their number. 'n' reshuffles, 'q' quits.");
    loop {
        println!();
        print_board(session.board());
        if let Some(sheet) = session.artwork() {
            log::debug!("sprite sheet active, crop {:?}", sheet.crop());
        }
        if session.status() == GameStatus::Solved {
            print_status(&session);
            if let Some(sheet) = session.artwork() {
                print_sprite_map(sheet, session.board());
            }
            break;
        }

        print!("Tile to move: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            "q" => break,
            "n" => {
                session.new_game().map_err(|e| anyhow::anyhow!(e))?;
                log::info!("board reshuffled");
            }
            _ => {
                let Some(label) = parse_tile(line) else {
                    println!("Enter a tile number between 1 and 15.");
                    continue;
                };
                // every label 1..=15 is always on the board
                let index = session
                    .board()
                    .find_tile(label)
                    .ok_or_else(|| anyhow::anyhow!("tile {} missing from board", label))?;
                match session.tile_activated(index).map_err(|e| anyhow::anyhow!(e))? {
                    MoveOutcome::Moved { from, to } => {
                        log::debug!("tile {} slid {} -> {}", label, from, to);
                    }
                    MoveOutcome::Rejected => {
                        println!("Tile {} is not next to the empty slot.", label);
                    }
                }
                print_status(&session);
            }
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::cli::{banner, write_grid, TerminalInput, TextRenderer};
use seabattle::{init_logging, Match, Player, Side};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the scripted opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = banner::DEFAULT_DIR, help = "Directory holding win.txt and lose.txt")]
        banners: PathBuf,
    },
    /// Two players taking turns at the same terminal.
    Duel {
        #[arg(long, default_value = banner::DEFAULT_DIR, help = "Directory holding win.txt and lose.txt")]
        banners: PathBuf,
    },
    /// Watch two scripted opponents play each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn human(name: &str, banners: &Path) -> Player {
    Player::interactive(
        Box::new(TerminalInput::stdio()),
        Box::new(TextRenderer::stdout(name, banners)),
    )
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, banners } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (opponent will be reproducible)", s);
            }
            let game = Match::new(human("You", &banners), Player::scripted(make_rng(seed)));
            let report = game.run()?;
            info!("{:?} won; shots fired {:?}", report.winner, report.shots);
        }
        Commands::Duel { banners } => {
            let game = Match::new(human("Player 1", &banners), human("Player 2", &banners));
            let report = game.run()?;
            info!("{:?} won; shots fired {:?}", report.winner, report.shots);
        }
        Commands::Watch { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let one = Player::scripted(make_rng(seed));
            let two = Player::scripted(make_rng(seed.map(|s| s.wrapping_add(1))));
            let mut game = Match::new(one, two);
            game.arrange()?;
            while game.winner().is_none() {
                let shot = game.step()?;
                println!("{:?} fires at {} -> {:?}", shot.attacker, shot.at, shot.result);
            }
            let mut out = std::io::stdout();
            for side in [Side::One, Side::Two] {
                println!("\n{:?} fleet:", side);
                write_grid(&mut out, game.player(side).board().fleet(), None)?;
            }
            if let Some(winner) = game.winner() {
                println!("\n{:?} wins.", winner);
            }
        }
    }
    Ok(())
}

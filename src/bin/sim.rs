use seabattle::{Match, Player, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let game = Match::new(
        Player::scripted_from_seed(seed1),
        Player::scripted_from_seed(seed2),
    );
    let report = game.run()?;

    let winner = match report.winner {
        Side::One => "player1",
        Side::Two => "player2",
    };
    let last = report.log.last().map(|r| r.result);

    let result = json!({
        "player1": {"shots": report.shots[0]},
        "player2": {"shots": report.shots[1]},
        "winner": winner,
        "final_result": last,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

//! One-shot scoreboard probe
//!
//! Fetches the live MLB scoreboard, prints every game, and reports what
//! the win evaluator would decide for the configured team. Useful for
//! checking feed connectivity without a display attached.

use anyhow::Result;
use flythew::{evaluate, init_tracing, CelebrationConfig};
use scorefeed::{GameStatus, ScoreboardClient};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = CelebrationConfig::default();
    let client = ScoreboardClient::espn_mlb();

    println!("Fetching {} ...\n", client.base_url());
    let snapshots = client.fetch_snapshots().await?;

    println!("{} games on today's scoreboard:", snapshots.len());
    for snap in &snapshots {
        let status = match snap.status {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Final => "final",
        };
        println!(
            "  {} {} - {} {}  [{}]",
            snap.away.abbreviation, snap.away.score, snap.home.abbreviation, snap.home.score, status
        );
    }

    let verdict = evaluate(&snapshots, &config.team_abbr);
    match verdict.final_score.filter(|_| verdict.won) {
        Some(score) => println!("\nFly the W! {}", score),
        None => println!("\nNo {} win on the board.", config.team_abbr),
    }

    Ok(())
}

mod session;
mod table;

use anyhow::Context;
use clap::Parser;
use fairdice_core::{DiceSet, Party, Round};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fairdice")]
#[command(about = "Provably fair dice duel against the computer")]
#[command(version)]
struct Cli {
    /// Dice configurations, e.g. "1,2,3,4,5,6" (at least 3)
    #[arg(required = true, num_args = 3..)]
    dice: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "fairdice={},fairdice_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dice = DiceSet::parse(&cli.dice).context(
        "usage example: fairdice \"1,2,3,4,5,6\" \"6,5,4,3,2,1\" \"2,3,4,5,6,1\"",
    )?;
    tracing::debug!(dice = dice.len(), "validated dice set");

    let mut menus = session::Menus::new(&dice);
    let mut printer = session::Printer;
    let outcome = Round::new(&dice)
        .play(&mut menus, &mut printer)
        .context("round aborted")?;

    match outcome.winner {
        Some(Party::Player) => println!(
            "You win ({} > {})!",
            outcome.player.face, outcome.computer.face
        ),
        Some(Party::Computer) => println!(
            "I win ({} < {})!",
            outcome.player.face, outcome.computer.face
        ),
        None => println!(
            "It's a draw! ({} == {})",
            outcome.player.face, outcome.computer.face
        ),
    }

    Ok(())
}

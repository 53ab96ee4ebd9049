//! `skirmish` binary.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_SEED=7 SKIRMISH_CLASS=wizard cargo run -p combat-cli
//! RUST_LOG=debug SKIRMISH_ENEMY=viper SKIRMISH_DIFFICULTY=2 cargo run -p combat-cli
//! ```

use std::io;

use anyhow::Result;
use combat_cli::builder::{load_combat_config, load_content};
use combat_cli::{CliConfig, Duel, Skirmish};
use combat_core::CombatController;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();

    let content = load_content(&config)?;
    let combat_config = load_combat_config(&config)?;

    let Duel {
        mut player,
        mut enemy,
        dice,
        seed,
    } = Duel::prepare(&config, &content)?;
    tracing::info!(seed, "starting duel");

    let combat = CombatController::with_config(
        &mut player,
        &mut enemy,
        &content.moves,
        dice,
        combat_config,
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let winner = Skirmish::new(combat, &content.moves, config.json).run(stdin.lock(), &mut stdout)?;

    tracing::info!(?winner, "duel finished");
    Ok(())
}

//! Duel assembly from content and configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use combat_content::{ConfigLoader, Content, ContentFactory, random_name};
use combat_core::{CombatConfig, Combatant, GameError, PcgRng};

use crate::config::CliConfig;

/// Both combatants of a duel plus the dice that rolled them.
pub struct Duel {
    pub player: Combatant,
    pub enemy: Combatant,
    pub dice: PcgRng,
    pub seed: u64,
}

impl Duel {
    /// Roll the hero and the enemy for one session.
    ///
    /// The seeded dice name the hero first, then pick the enemy template and
    /// trait, then carry on into the fight.
    pub fn prepare(config: &CliConfig, content: &Content) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut dice = PcgRng::seeded(seed);

        let class = match &config.class {
            Some(name) => content.classes.get(name).with_context(|| {
                let known: Vec<&str> = content.classes.names().collect();
                format!("Unknown class {name:?}; expected one of {}", known.join(", "))
            })?,
            None => content
                .classes
                .default_class()
                .context("No class presets loaded")?,
        };
        let name = match &config.name {
            Some(name) => name.clone(),
            None => random_name(&mut dice),
        };
        let player = class.build(name).map_err(|e| {
            anyhow::anyhow!("Failed to build {} preset [{}]: {}", class.name, e.error_code(), e)
        })?;

        let enemy = content
            .enemies
            .generate(config.enemy.as_deref(), config.difficulty, &mut dice)
            .map_err(|e| anyhow::anyhow!("Failed to build enemy [{}]: {}", e.error_code(), e))?
            .context("No enemy templates loaded")?;

        tracing::info!(
            seed,
            player = %player.name,
            class = %player.class,
            enemy = %enemy.name,
            difficulty = config.difficulty,
            "duel prepared"
        );
        Ok(Self {
            player,
            enemy,
            dice,
            seed,
        })
    }
}

/// Moves, classes and enemies from the data directory, else the embedded copies.
pub fn load_content(config: &CliConfig) -> Result<Content> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir).load_content(),
        None => Content::embedded(),
    }
}

/// Combat tunables.
///
/// An explicit config file wins over the data directory's `combat.toml`,
/// which wins over the embedded defaults.
pub fn load_combat_config(config: &CliConfig) -> Result<CombatConfig> {
    match (&config.config_path, &config.data_dir) {
        (Some(path), _) => ConfigLoader::load(path),
        (None, Some(dir)) => ContentFactory::new(dir).load_config(),
        (None, None) => ConfigLoader::embedded(),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

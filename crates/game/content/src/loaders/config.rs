//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/combat.toml");

/// Loader for combat configuration from TOML files.
///
/// Every key is optional; missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Tunables from the copy of `combat.toml` embedded in the crate.
    pub fn embedded() -> LoadResult<CombatConfig> {
        Self::parse(EMBEDDED)
    }

    pub fn parse(source: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.potion_heal_min > config.potion_heal_max {
            anyhow::bail!(
                "potion_heal_min ({}) exceeds potion_heal_max ({})",
                config.potion_heal_min,
                config.potion_heal_max
            );
        }
        if !(0.0..=1.0).contains(&config.defend_pct) {
            anyhow::bail!("defend_pct {} is outside [0, 1]", config.defend_pct);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            defend_pct = 0.75

            [policy]
            taunt_chance = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(config.defend_pct, 0.75);
        assert_eq!(config.policy.taunt_chance, 0.0);
        assert_eq!(config.flee_base_dc, CombatConfig::DEFAULT_FLEE_BASE_DC);
        assert_eq!(config.policy.attack_weight, 8);
    }

    #[test]
    fn embedded_file_matches_the_defaults() {
        assert_eq!(ConfigLoader::embedded().unwrap(), CombatConfig::default());
    }

    #[test]
    fn inverted_potion_range_is_rejected() {
        let error = ConfigLoader::parse("potion_heal_min = 9\npotion_heal_max = 2").unwrap_err();
        assert!(error.to_string().contains("potion_heal_min"));
    }
}

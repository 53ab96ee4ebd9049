//! Environment-driven configuration for the terminal driver.
use std::env;
use std::path::PathBuf;

/// Settings for one `skirmish` run.
///
/// Environment variables:
/// - `SKIRMISH_SEED` - dice seed (default: derived from the clock)
/// - `SKIRMISH_NAME` - hero name (default: random)
/// - `SKIRMISH_CLASS` - class preset name (default: first preset)
/// - `SKIRMISH_ENEMY` - enemy template name (default: random)
/// - `SKIRMISH_DIFFICULTY` - enemy scaling level (default: 0)
/// - `SKIRMISH_CONFIG` - combat tunables TOML file
/// - `SKIRMISH_DATA` - data directory replacing the embedded content
/// - `SKIRMISH_JSON` - print each half-turn result as a JSON line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub enemy: Option<String>,
    pub difficulty: u32,
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        Self {
            seed: read_env(&lookup, "SKIRMISH_SEED"),
            name: text("SKIRMISH_NAME"),
            class: text("SKIRMISH_CLASS"),
            enemy: text("SKIRMISH_ENEMY"),
            difficulty: read_env(&lookup, "SKIRMISH_DIFFICULTY").unwrap_or(0),
            config_path: text("SKIRMISH_CONFIG").map(PathBuf::from),
            data_dir: text("SKIRMISH_DATA").map(PathBuf::from),
            json: text("SKIRMISH_JSON").is_some_and(|flag| {
                matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
            }),
        }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(CliConfig::from_lookup(|_| None), CliConfig::default());
    }

    #[test]
    fn values_are_parsed_and_bad_numbers_ignored() {
        let config = CliConfig::from_lookup(lookup(&[
            ("SKIRMISH_SEED", " 42 "),
            ("SKIRMISH_CLASS", "wizard"),
            ("SKIRMISH_DIFFICULTY", "lots"),
            ("SKIRMISH_JSON", "TRUE"),
            ("SKIRMISH_ENEMY", "  "),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.class.as_deref(), Some("wizard"));
        assert_eq!(config.difficulty, 0);
        assert!(config.json);
        assert_eq!(config.enemy, None);
    }
}

//! CLI configuration.
//!
//! Settings are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`, default `collection.toml`)
//! 3. Environment variables prefixed `COLLECTION_` (e.g. `COLLECTION_SEED=666`)
//! 4. Command line flags, applied by the caller

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space separated tokens, one group per line.
    #[default]
    Plain,
    /// JSON documents.
    Json,
}

/// Effective CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Seed used by `shuffle` when `--seed` is absent.
    pub seed: Option<u64>,
    /// Group size used by `split` when `--group-size` is absent.
    pub group_size: i64,
    /// Output format used when `--format` is absent.
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            group_size: 10,
            format: OutputFormat::Plain,
        }
    }
}

/// Loads the configuration from `path` (if present) and the environment.
pub fn load(path: &str) -> Result<CliConfig> {
    load_from(path, config::Environment::with_prefix("COLLECTION"))
}

/// Loads the configuration from `path` (if present) layered under `env`.
pub fn load_from(path: &str, env: config::Environment) -> Result<CliConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::new(path, config::FileFormat::Toml).required(false))
        .add_source(env.try_parsing(true))
        .build()?;

    let cli_config: CliConfig = settings.try_deserialize()?;
    debug!(path, ?cli_config, "configuration loaded");
    Ok(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config::Environment::with_prefix("COLLECTION").source(Some(map))
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_from("does-not-exist.toml", env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "group_size = 4\nformat = \"json\"").unwrap();

        let config = load_from(
            file.path().to_str().unwrap(),
            env(&[("COLLECTION_GROUP_SIZE", "7"), ("COLLECTION_SEED", "666")]),
        )
        .unwrap();
        assert_eq!(config.group_size, 7);
        assert_eq!(config.seed, Some(666));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "seed = 666\ngroup_size = 4\nformat = \"json\"").unwrap();

        let config = load_from(file.path().to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config.seed, Some(666));
        assert_eq!(config.group_size, 4);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "group_size = 3").unwrap();

        let config = load_from(file.path().to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config.group_size, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "group_size = \"many\"").unwrap();

        assert!(load_from(file.path().to_str().unwrap(), env(&[])).is_err());
    }
}

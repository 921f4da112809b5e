//! Check command implementation
//!
//! Prints the effective configuration after all layers are applied.

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

/// Render the configuration in its own output format.
pub fn render(config: &CliConfig) -> Result<String> {
    Ok(match config.format {
        OutputFormat::Plain => format!(
            "seed = {}\ngroup_size = {}\nformat = plain",
            config
                .seed
                .map_or_else(|| "none".to_string(), |s| s.to_string()),
            config.group_size
        ),
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_defaults() {
        let rendered = render(&CliConfig::default()).unwrap();
        assert_eq!(rendered, "seed = none\ngroup_size = 10\nformat = plain");
    }

    #[test]
    fn test_json_round_trips() {
        let config = CliConfig {
            seed: Some(666),
            group_size: 4,
            format: OutputFormat::Json,
        };
        let rendered = render(&config).unwrap();
        let parsed: CliConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}

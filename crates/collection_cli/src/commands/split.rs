//! Split command implementation
//!
//! Prints the input tokens in fixed-size groups.

use collection_core::split::{group_size_from_signed, split_iter};
use tracing::info;

use crate::config::OutputFormat;
use crate::input::read_tokens;
use crate::Result;

/// Run the split command
pub fn run(input: Option<&str>, group_size: i64, format: OutputFormat) -> Result<()> {
    // Reject the size before blocking on stdin.
    let group_size = group_size_from_signed(group_size)?;
    let tokens = read_tokens(input)?;
    info!(tokens = tokens.len(), group_size, "splitting input");

    println!("{}", render(tokens, group_size, format)?);
    Ok(())
}

/// Split `tokens` into groups and render them.
pub fn render(tokens: Vec<String>, group_size: usize, format: OutputFormat) -> Result<String> {
    let chunks = split_iter(tokens, group_size)?;

    Ok(match format {
        OutputFormat::Plain => chunks
            .iter()
            .map(|chunk| chunk.join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string(&chunks)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tokenize;
    use crate::CliError;

    #[test]
    fn test_plain_groups() {
        let rendered = render(tokenize("1 2 3 4 5"), 2, OutputFormat::Plain).unwrap();
        assert_eq!(rendered, "1 2\n3 4\n5");
    }

    #[test]
    fn test_json_groups() {
        let rendered = render(tokenize("a,b,c"), 2, OutputFormat::Json).unwrap();
        assert_eq!(rendered, r#"[["a","b"],["c"]]"#);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(Vec::new(), 3, OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_non_positive_size_rejected_before_reading() {
        let result = run(Some("no/such/file"), -5, OutputFormat::Plain);
        assert!(matches!(result, Err(CliError::Collection(_))));

        let result = run(Some("no/such/file"), 0, OutputFormat::Plain);
        assert!(matches!(result, Err(CliError::Collection(_))));
    }
}

//! Extrema command implementation
//!
//! Prints the positions of the smallest and largest integers in the input.

use collection_core::ops::{max_index, min_index};
use serde_json::json;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::{parse_integers, read_tokens};
use crate::Result;

/// Run the extrema command
pub fn run(input: Option<&str>, format: OutputFormat) -> Result<()> {
    let values = parse_integers(&read_tokens(input)?)?;
    info!(values = values.len(), "locating extrema");

    println!("{}", render(&values, format)?);
    Ok(())
}

/// Locate the extrema of `values` and render their indices.
///
/// Plain output uses `-1` for an empty input; JSON uses `null`.
pub fn render(values: &[i64], format: OutputFormat) -> Result<String> {
    let min = min_index(values);
    let max = max_index(values);

    Ok(match format {
        OutputFormat::Plain => format!(
            "min_index: {}\nmax_index: {}",
            plain_index(min),
            plain_index(max)
        ),
        OutputFormat::Json => serde_json::to_string(&json!({
            "min_index": min,
            "max_index": max,
        }))?,
    })
}

fn plain_index(index: Option<usize>) -> String {
    index.map_or_else(|| "-1".to_string(), |i| i.to_string())
}

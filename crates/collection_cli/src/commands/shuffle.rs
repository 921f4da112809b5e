//! Shuffle command implementation
//!
//! Prints the input tokens in a random order.

use collection_core::shuffle::{
    shuffle_in_place, shuffle_in_place_seeded, shuffle_iter, shuffle_iter_seeded,
};
use tracing::info;

use crate::config::OutputFormat;
use crate::input::read_tokens;
use crate::Result;

/// Run the shuffle command
pub fn run(input: Option<&str>, seed: Option<u64>, lazy: bool, format: OutputFormat) -> Result<()> {
    let tokens = read_tokens(input)?;
    info!(
        tokens = tokens.len(),
        seed = ?seed,
        lazy,
        "shuffling input"
    );

    println!("{}", render(tokens, seed, lazy, format)?);
    Ok(())
}

/// Shuffle `tokens` and render them.
pub fn render(
    mut tokens: Vec<String>,
    seed: Option<u64>,
    lazy: bool,
    format: OutputFormat,
) -> Result<String> {
    let shuffled: Vec<String> = match (lazy, seed) {
        (true, Some(seed)) => shuffle_iter_seeded(tokens, seed).collect(),
        (true, None) => shuffle_iter(tokens).collect(),
        (false, Some(seed)) => {
            shuffle_in_place_seeded(&mut tokens, seed);
            tokens
        }
        (false, None) => {
            shuffle_in_place(&mut tokens);
            tokens
        }
    };

    Ok(match format {
        OutputFormat::Plain => shuffled.join(" "),
        OutputFormat::Json => serde_json::to_string(&shuffled)?,
    })
}

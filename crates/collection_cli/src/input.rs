//! Reading tokens from a file or stdin.

use std::io::Read;
use std::path::Path;

use crate::{CliError, Result};

/// Reads whitespace/comma separated tokens from `path`, or stdin when absent.
pub fn read_tokens(path: Option<&str>) -> Result<Vec<String>> {
    let text = match path {
        Some(path) => {
            if !Path::new(path).exists() {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(tokenize(&text))
}

/// Splits `text` on whitespace and commas, dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses every token as a signed integer.
pub fn parse_integers(tokens: &[String]) -> Result<Vec<i64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| CliError::Parse(format!("'{}' is not an integer: {}", token, e)))
        })
        .collect()
}

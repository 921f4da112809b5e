//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build their
//! output with a pure `render` function and print it from `run`.

pub mod check;
pub mod extrema;
pub mod shuffle;
pub mod split;

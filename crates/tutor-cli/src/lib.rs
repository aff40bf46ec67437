//! Library side of the `math-tutor` command line: logging setup, the
//! optional TOML config file and replay of interaction steps.

pub mod config;
pub mod logging;
pub mod steps;

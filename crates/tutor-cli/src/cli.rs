//! CLI argument definitions for the math tutor harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tutor_cli::config::LogLevel;
use tutor_cli::logging::LogFormat;
use tutor_cli::steps::Step;

#[derive(Parser)]
#[command(
    name = "math-tutor",
    version,
    about = "Math tutor pages - inspect pages and replay interactions",
    long_about = "Inspect the interactive math tutor pages and replay user interactions.\n\n\
                  Each page is a set of controls and bindings; `render` loads a page,\n\
                  applies the given steps and prints every render target as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read defaults from a TOML config file.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the registered pages.
    Pages(PagesArgs),

    /// Show a page's controls and its bindings in evaluation order.
    Inspect(InspectArgs),

    /// Load a page, replay steps and print the render targets as JSON.
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct PagesArgs {
    /// Only list pages whose name contains TEXT (case-insensitive).
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Page path, e.g. /percent.
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Page path, e.g. /percent.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Step to apply after loading: click:ID or set:ID=VALUE. Repeatable.
    #[arg(long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,

    /// TOML file with [[step]] tables, applied before any --step.
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => Self::Off,
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Trace => Self::Trace,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

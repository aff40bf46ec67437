//! Math tutor command line.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tutor_cli::config::{Config, LogLevel};
use tutor_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_inspect, run_pages, run_render};
use crate::summary::print_failures;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let config = match Config::load_optional(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {:#}", anyhow::Error::new(error));
            std::process::exit(1);
        }
    };
    let log_config = log_config_from_cli(&cli, &config);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Pages(args) => report(run_pages(args)),
        Command::Inspect(args) => report(run_inspect(args)),
        Command::Render(args) => {
            let pretty = args.pretty || config.output.pretty.unwrap_or(false);
            match run_render(args, pretty) {
                Ok(result) if result.has_failures() => {
                    print_failures(&result.failures);
                    1
                }
                Ok(_) => 0,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Flags win over the config file, the config file over defaults.
fn log_config_from_cli(cli: &Cli, config: &Config) -> LogConfig {
    let level_filter = match (cli.log_level, cli.verbosity.is_present(), config.log.level) {
        (Some(level), _, _) => LevelFilter::from(LogLevel::from(level)),
        (None, false, Some(level)) => LevelFilter::from(level),
        (None, _, _) => cli.verbosity.tracing_level_filter(),
    };
    let explicit_level =
        cli.log_level.is_some() || cli.verbosity.is_present() || config.log.level.is_some();
    let log_file = cli.log_file.clone().or_else(|| config.log.file.clone());
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!explicit_level)
        .with_format(
            cli.log_format
                .map(LogFormat::from)
                .or(config.log.format)
                .unwrap_or_default(),
        )
        .with_timestamps(config.log.timestamps.unwrap_or(false))
        .with_target(config.log.target.unwrap_or(false))
        .with_log_file(log_file)
        .with_ansi(with_ansi)
}

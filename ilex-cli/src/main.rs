//! Ilex CLI - Command line interface
//!
//! Scans one source buffer and prints a diagnostic line per token

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ilex_config::{IlexConfig, LogLevel, OutputFormat, Schedule};
use ilex_core::open_session;
use tracing::{debug, info};

mod config;
mod error;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::error::CliError;
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, print_source, read_source, Printer};

#[derive(Parser)]
#[command(
    name = "ilex",
    about = "Ilex - lexical scanner for a small C-like language",
    version = "0.1.0"
)]
struct Cli {
    /// Source file to scan (default: standard input)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Drive the scanner from a worker thread
    #[arg(long)]
    worker: bool,

    /// Reject numbers immediately followed by a letter
    #[arg(long)]
    strict_numbers: bool,

    /// Capacity of the token queue
    #[arg(long, value_name = "N")]
    queue_capacity: Option<usize>,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log level for the lexer phase
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    lexer_log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the numbered source before the tokens
    #[arg(long)]
    show_source: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Diagnostics,
    Tokens,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Diagnostics => OutputFormat::Diagnostics,
            FormatArg::Tokens => OutputFormat::Tokens,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(file_config) => apply_overrides(file_config, &cli),
        Err(e) => {
            print_error_with_source(&e, None);
            return ExitCode::FAILURE;
        }
    };

    let log_config = LogConfig::from(&config.log);
    if let Err(e) = logging::init(&log_config, cli.log_format, cli.log_file.as_deref()) {
        print_error_with_source(&e, None);
        return ExitCode::FAILURE;
    }

    let source = match read_source(cli.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            print_error_with_source(&e, None);
            return ExitCode::FAILURE;
        }
    };

    match run(&source, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error_with_source(&e, Some(source.as_str()));
            ExitCode::FAILURE
        }
    }
}

/// Command-line flags win over the config file
fn apply_overrides(mut config: IlexConfig, cli: &Cli) -> IlexConfig {
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.worker {
        config.lexer.schedule = Schedule::Worker;
    }
    if cli.strict_numbers {
        config.lexer.strict_numbers = true;
    }
    if let Some(capacity) = cli.queue_capacity {
        config.lexer.queue_capacity = capacity;
    }
    if let Some(level) = cli.log_level {
        config.log.global = level;
    }
    if let Some(level) = cli.lexer_log_level {
        config.log.lexer = Some(level);
    }
    if cli.show_source {
        config.output.show_source = true;
    }
    config
}

/// Scan the buffer and print every token; a halt is reported after the output
fn run(source: &str, config: &IlexConfig) -> Result<(), CliError> {
    info!(
        target: "ilex::cli",
        schedule = ?config.lexer.schedule,
        format = ?config.output.format,
        "Starting scan"
    );

    if config.output.show_source {
        print_source(source);
    }

    let mut session = open_session(source, &config.lexer);
    let mut printer = Printer::new(io::stdout().lock(), config.output.format);
    let mut count = 0usize;
    while let Some(token) = session.next_token() {
        printer.token(token)?;
        count += 1;
    }
    printer.finish()?;
    debug!(target: "ilex::cli", tokens = count, "Scan complete");

    session.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "ilex",
            "input.il",
            "--format",
            "json",
            "--worker",
            "--queue-capacity",
            "4",
            "--log-level",
            "silent",
            "--lexer-log-level",
            "trace",
        ])
        .unwrap();
        let config = apply_overrides(IlexConfig::default(), &cli);
        assert_eq!(cli.input, Some(PathBuf::from("input.il")));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.lexer.schedule, Schedule::Worker);
        assert_eq!(config.lexer.queue_capacity, 4);
        assert_eq!(config.log.global, LogLevel::Error);
        assert_eq!(config.log.lexer, Some(LogLevel::Trace));
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_keep_file_settings_when_absent() {
        let mut file_config = IlexConfig::default();
        file_config.lexer.strict_numbers = true;
        file_config.output.format = OutputFormat::Tokens;
        let cli = Cli::try_parse_from(["ilex"]).unwrap();
        let config = apply_overrides(file_config, &cli);
        assert!(config.lexer.strict_numbers);
        assert_eq!(config.output.format, OutputFormat::Tokens);
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_bad_log_level_rejected() {
        assert!(Cli::try_parse_from(["ilex", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_run_reports_halt() {
        let err = run("x \"open", &IlexConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Lex(ilex_core::LexError::UnterminatedString { line: 1 })
        ));
    }
}

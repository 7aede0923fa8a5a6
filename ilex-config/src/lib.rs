//! Ilex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Ilex crates.

use serde::{Deserialize, Serialize};

/// Default capacity of the token hand-off queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Top-level configuration, as read from `ilex.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IlexConfig {
    /// Lexing session settings
    pub lexer: LexerConfig,
    /// Presentation settings
    pub output: OutputConfig,
    /// Per-phase log levels
    pub log: LogLevels,
}

impl IlexConfig {
    /// Parse a JSON document; missing fields fall back to their defaults
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Configuration for one lexing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Maximum number of tokens buffered between producer and consumer
    pub queue_capacity: usize,
    /// How the state machine is driven
    pub schedule: Schedule,
    /// Reject numbers immediately followed by a letter (`23er`)
    pub strict_numbers: bool,
}

/// Scheduling model for the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// The consumer steps the machine synchronously
    #[default]
    Pull,
    /// A dedicated worker thread fills a bounded queue
    Worker,
}

/// Output configuration for the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Echo the numbered source before the diagnostics
    pub show_source: bool,
}

/// How tokens are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `line <n>: <category>` lines
    #[default]
    Diagnostics,
    /// One debug line per token
    Tokens,
    /// Pretty JSON array
    Json,
}

/// Log level vocabulary shared by the config file and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitive. `silent` maps to `error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Per-phase log levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogLevels {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
    pub queue: Option<LogLevel>,
}

impl LogLevels {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Queue => self.queue.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Queue,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Lexer, Phase::Queue, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Queue => "queue",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("ilex::{}", self.as_str())
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            schedule: Schedule::Pull,
            strict_numbers: false,
        }
    }
}

impl Default for LogLevels {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            queue: None,
        }
    }
}

//! CLI 配置
//!
//! 读取配置文件，并把日志级别映射为 tracing 的级别

use std::path::Path;

use ilex_config::{IlexConfig, LogLevel, LogLevels, Phase};
use tracing::Level;

use crate::error::CliError;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub queue: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from(&LogLevels::default())
    }
}

impl From<&LogLevels> for LogConfig {
    fn from(levels: &LogLevels) -> Self {
        Self {
            global: to_tracing_level(levels.global),
            lexer: levels.lexer.map(to_tracing_level),
            queue: levels.queue.map(to_tracing_level),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Queue => self.queue.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Load the config file, or defaults when no file is given
pub fn load(path: Option<&Path>) -> Result<IlexConfig, CliError> {
    let Some(path) = path else {
        return Ok(IlexConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    IlexConfig::from_json_str(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

//! Token 输出

use std::io::Write;

use ilex_config::OutputFormat;
use ilex_core::{Diagnostic, Token};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
struct JsonEntry {
    token: Token,
    diagnostic: Option<String>,
}

/// 按输出格式逐个写出 token；JSON 格式在 finish 时一次写出
pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
    entries: Vec<JsonEntry>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            entries: Vec::new(),
        }
    }

    pub fn token(&mut self, token: Token) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Diagnostics => {
                if let Some(diagnostic) = Diagnostic::for_token(&token) {
                    writeln!(self.out, "{}", diagnostic)?;
                }
            }
            OutputFormat::Tokens => writeln!(self.out, "{:?}", token)?,
            OutputFormat::Json => {
                let diagnostic = Diagnostic::for_token(&token).map(|d| d.to_string());
                self.entries.push(JsonEntry { token, diagnostic });
            }
        }
        Ok(())
    }

    /// 写出缓冲内容并返回底层 writer
    pub fn finish(mut self) -> Result<W, CliError> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.out, &self.entries)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use std::fmt::Write;

use crate::error::CliError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 3;

/// 打印错误；扫描中止时附带源代码上下文
pub fn print_error_with_source(e: &CliError, source: Option<&str>) {
    eprintln!("error: {}", e);

    if let (CliError::Lex(lex), Some(source)) = (e, source) {
        if let Some(line) = lex.line() {
            eprint!("{}", source_context(source, line));
        }
    }
}

/// 打印带行号的源码
pub fn print_source(source: &str) {
    println!("[Source]");
    for (i, line) in source.lines().enumerate() {
        println!("{:3} | {}", i + 1, line);
    }
    println!("[Tokens]");
}

/// 渲染出错行前后的源码，出错行以 `>` 标记
pub fn source_context(source: &str, error_line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();
    let mut out = String::new();

    if error_line == 0 || error_line > total_lines {
        return out;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 2);

    let _ = writeln!(out, "{}|--", separator);
    for line_idx in start_line..=end_line {
        let marker = if line_idx == error_line { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{}{:>width$} | {}",
            marker,
            line_idx,
            lines[line_idx - 1],
            width = width
        );
    }
    let _ = writeln!(out, "{}|--", separator);
    out
}

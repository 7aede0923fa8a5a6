//! Lexer 错误类型

use std::fmt;

/// 使扫描停止的原因
///
/// 只有 `Generic` 会在 token 流中以 Error token 的形式出现；
/// 其余三种情况下流直接结束，原因可通过 `Lexer::halt_reason` 获取。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("malformed char literal on line {line}")]
    MalformedChar { line: usize },

    #[error("unterminated comment starting on line {line}")]
    UnterminatedComment { line: usize },

    #[error("{0}")]
    Generic(String),
}

impl LexError {
    /// 以格式化消息构造 Generic 错误
    pub fn generic(args: fmt::Arguments<'_>) -> Self {
        LexError::Generic(args.to_string())
    }

    /// 出错的行号（Generic 不携带行号）
    pub fn line(&self) -> Option<usize> {
        match self {
            LexError::UnterminatedString { line }
            | LexError::MalformedChar { line }
            | LexError::UnterminatedComment { line } => Some(*line),
            LexError::Generic(_) => None,
        }
    }

    /// 是否在 token 流中体现为 Error token
    pub fn emits_token(&self) -> bool {
        matches!(self, LexError::Generic(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            LexError::UnterminatedString { line: 3 }.to_string(),
            "unterminated string starting on line 3"
        );
        assert_eq!(
            LexError::Generic("bad number syntax: \"23er\"".into()).to_string(),
            "bad number syntax: \"23er\""
        );
    }

    #[test]
    fn test_line() {
        assert_eq!(LexError::MalformedChar { line: 2 }.line(), Some(2));
        assert_eq!(LexError::Generic(String::new()).line(), None);
        assert!(!LexError::UnterminatedComment { line: 1 }.emits_token());
        assert!(LexError::Generic(String::new()).emits_token());
        assert_eq!(
            LexError::generic(format_args!("bad {}", 1)),
            LexError::Generic("bad 1".to_string())
        );
    }
}

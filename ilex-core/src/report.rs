//! Token 诊断报告
//!
//! 每个有意义的 token 对应一行人类可读的诊断，例如：
//!
//! ```text
//! line 3: keyword "int"
//! line 3: operator "assignment"
//! line 4-6: comment " block "
//! ```

use std::fmt;

use serde::Serialize;

use crate::lexer::{CommentStyle, LineSpan, Token, TokenKind};

/// 诊断的附加内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "value", rename_all = "lowercase")]
pub enum Detail {
    None,
    /// 以转义引号形式输出
    Quoted(String),
    /// 原样放在双引号中输出（注释正文）
    Raw(String),
}

/// 一行诊断
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub lines: LineSpan,
    /// 多行注释使用 `line S-E:` 形式
    pub ranged: bool,
    pub category: &'static str,
    pub detail: Detail,
    /// Error token 直接输出消息
    pub message: Option<String>,
}

impl Diagnostic {
    /// 为 token 生成诊断；Text 与 Eof 不产生诊断
    pub fn for_token(token: &Token) -> Option<Diagnostic> {
        let detail = match token.kind {
            TokenKind::Text | TokenKind::Eof => return None,
            TokenKind::Error => {
                return Some(Diagnostic {
                    lines: token.lines,
                    ranged: false,
                    category: token.kind.category(),
                    detail: Detail::None,
                    message: Some(token.text.clone()),
                })
            }
            TokenKind::String | TokenKind::Char | TokenKind::Number(_) => Detail::None,
            TokenKind::Operator(op) => Detail::Quoted(op.description().to_string()),
            TokenKind::Keyword(_) | TokenKind::Identifier => Detail::Quoted(token.text.clone()),
            TokenKind::Comment(_) => {
                Detail::Raw(token.comment_body().unwrap_or_default().to_string())
            }
        };

        Some(Diagnostic {
            lines: token.lines,
            ranged: token.kind == TokenKind::Comment(CommentStyle::Block),
            category: token.kind.category(),
            detail,
            message: None,
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            return f.write_str(message);
        }
        if self.ranged {
            write!(f, "line {}-{}: {}", self.lines.start, self.lines.end, self.category)?;
        } else {
            write!(f, "line {}: {}", self.lines.start, self.category)?;
        }
        match &self.detail {
            Detail::None => Ok(()),
            Detail::Quoted(value) => write!(f, " {:?}", value),
            Detail::Raw(value) => write!(f, " \"{}\"", value),
        }
    }
}

/// 为整个 token 序列生成诊断文本
pub fn render(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(Diagnostic::for_token)
        .map(|d| d.to_string())
        .collect()
}

//! Token 类型定义

use serde::Serialize;

use super::tables::{Keyword, Operator};

/// 行号范围（闭区间），单行 token 的 start == end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// 单行范围
    pub fn at(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }
}

/// 注释风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommentStyle {
    /// `@@ ...` 直到行尾
    Line,
    /// `/@ ... @/`，可跨行
    Block,
}

/// 数字字面量的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumberClass {
    Integer,
    HexInteger,
    Real,
}

impl NumberClass {
    /// 按词素文本分类：含 `0x` 为十六进制，含 `.`/`e`/`E` 为实数，否则为整数
    pub fn classify(text: &str) -> Self {
        if text.contains("0x") {
            NumberClass::HexInteger
        } else if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            NumberClass::Real
        } else {
            NumberClass::Integer
        }
    }

    /// 诊断类别名
    pub fn category(&self) -> &'static str {
        match self {
            NumberClass::Integer | NumberClass::HexInteger => "integer",
            NumberClass::Real => "real",
        }
    }
}

/// Token 种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// 未分类的文本
    Text,
    String,
    Char,
    Operator(Operator),
    Comment(CommentStyle),
    Keyword(Keyword),
    Identifier,
    Number(NumberClass),
    Eof,
    Error,
}

impl TokenKind {
    /// 诊断类别名
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Operator(_) => "operator",
            TokenKind::Comment(_) => "comment",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Identifier => "id",
            TokenKind::Number(class) => class.category(),
            TokenKind::Eof => "eof",
            TokenKind::Error => "error",
        }
    }
}

/// 词法单元
///
/// `text` 是源码中的原始词素（包括引号与注释标记），Error token 则保存错误消息。
/// 注释 token 的 `text` 保留 `@@` / `/@ @/` 标记，去掉标记后的正文由
/// [`Token::comment_body`] 给出，例如 `@@ note` 的正文是 `" note"`。
/// `offset` 是词素在源文本中的字节偏移。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub lines: LineSpan,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, lines: LineSpan, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            lines,
            offset,
        }
    }

    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", LineSpan::at(line), offset)
    }

    pub fn error(message: impl Into<String>, line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Error, message, LineSpan::at(line), offset)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// 词素结束处的字节偏移（Error token 不对应源文本）
    pub fn end_offset(&self) -> usize {
        match self.kind {
            TokenKind::Error => self.offset,
            _ => self.offset + self.text.len(),
        }
    }

    /// 去掉注释标记后的正文；非注释 token 返回 None
    pub fn comment_body(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Comment(CommentStyle::Line) => {
                Some(self.text.strip_prefix("@@").unwrap_or(&self.text))
            }
            TokenKind::Comment(CommentStyle::Block) => {
                let body = self.text.strip_prefix("/@").unwrap_or(&self.text);
                Some(body.strip_suffix("@/").unwrap_or(body))
            }
            _ => None,
        }
    }
}

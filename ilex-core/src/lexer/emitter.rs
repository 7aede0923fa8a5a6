//! Token 发射
//!
//! 将游标上的当前词素打包为 Token，记录调试日志，并把词素起点移到当前位置。

use tracing::debug;

use super::cursor::Cursor;
use super::tables::{Keyword, Operator};
use super::token::{CommentStyle, LineSpan, NumberClass, Token, TokenKind};

/// 状态机请求发射的词素种类
///
/// 运算符与数字的最终分类由词素文本决定，在这里完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    Text,
    String,
    Char,
    Operator,
    Comment(CommentStyle),
    Keyword(Keyword),
    Identifier,
    Number,
}

/// 发射当前词素
pub fn emit(cursor: &mut Cursor, lexeme: Lexeme) -> Token {
    let text = cursor.lexeme();
    let kind = match lexeme {
        Lexeme::Text => TokenKind::Text,
        Lexeme::String => TokenKind::String,
        Lexeme::Char => TokenKind::Char,
        Lexeme::Operator => match Operator::from_lexeme(text) {
            Some(op) => TokenKind::Operator(op),
            None => TokenKind::Text,
        },
        Lexeme::Comment(style) => TokenKind::Comment(style),
        Lexeme::Keyword(kw) => TokenKind::Keyword(kw),
        Lexeme::Identifier => TokenKind::Identifier,
        Lexeme::Number => TokenKind::Number(NumberClass::classify(text)),
    };
    let token = Token::new(
        kind,
        text,
        LineSpan::new(cursor.line(), cursor.lookahead_line()),
        cursor.lexeme_start(),
    );

    debug!(
        target: "ilex::lexer",
        kind = ?token.kind,
        text = %token.text,
        line = token.lines.start,
        "Emitted token"
    );

    cursor.discard_lexeme();
    token
}

/// 发射 Error token，消息取代词素文本
pub fn emit_error(cursor: &mut Cursor, message: &str) -> Token {
    let token = Token::error(message, cursor.line(), cursor.lexeme_start());
    debug!(target: "ilex::lexer", error = message, line = token.lines.start, "Emitted error token");
    cursor.discard_lexeme();
    token
}

/// 发射 EOF token
pub fn emit_eof(cursor: &Cursor) -> Token {
    debug!(target: "ilex::lexer", line = cursor.line(), "Emitted end of input");
    Token::eof(cursor.line(), cursor.position())
}

//! 扫描状态机
//!
//! 每个状态是一个步骤：在游标上消耗输入，至多产出一个 token，
//! 并给出下一个状态，或宣告扫描结束/中止。

use ilex_config::LexerConfig;
use tracing::trace;

use super::cursor::Cursor;
use super::emitter::{emit, emit_eof, emit_error, Lexeme};
use super::error::LexError;
use super::tables::{
    is_digit, is_double_operator_lead, is_letter, is_single_operator, lookup_keyword, Operator,
    ALPHANUMERIC, CHAR_ESCAPES, DIGITS, EXPONENT_MARKERS, HEX_DIGITS, SIGNS,
};
use super::token::{CommentStyle, Token};

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Text,
    Identifier,
    Number,
    String,
    Char,
    SingleLineComment,
    MultiLineComment,
}

/// 一步之后的去向
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    Continue(State),
    /// 正常到达输入末尾
    Finished,
    /// 扫描中止
    Halted(LexError),
}

/// 单步执行的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: Next,
    pub token: Option<Token>,
}

impl Transition {
    fn to(state: State) -> Self {
        Self {
            next: Next::Continue(state),
            token: None,
        }
    }

    fn emit(token: Token, state: State) -> Self {
        Self {
            next: Next::Continue(state),
            token: Some(token),
        }
    }

    fn finish(token: Token) -> Self {
        Self {
            next: Next::Finished,
            token: Some(token),
        }
    }

    fn halt(error: LexError) -> Self {
        Self {
            next: Next::Halted(error),
            token: None,
        }
    }

    fn fail(token: Token, error: LexError) -> Self {
        Self {
            next: Next::Halted(error),
            token: Some(token),
        }
    }
}

/// 在 Text 状态下优先识别的前缀
const PREFIX_DISPATCH: &[(&str, State)] = &[
    ("@@", State::SingleLineComment),
    ("/@", State::MultiLineComment),
    ("\"", State::String),
    ("'", State::Char),
];

/// 状态机
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    strict_numbers: bool,
}

impl StateMachine {
    pub fn new(config: &LexerConfig) -> Self {
        Self {
            strict_numbers: config.strict_numbers,
        }
    }

    /// 执行一步
    pub fn step(&self, state: State, cursor: &mut Cursor) -> Transition {
        trace!(target: "ilex::lexer", ?state, pos = cursor.position(), "Stepping state machine");
        match state {
            State::Text => self.lex_text(cursor),
            State::Identifier => self.lex_identifier(cursor),
            State::Number => self.lex_number(cursor),
            State::String => self.lex_string(cursor),
            State::Char => self.lex_char(cursor),
            State::SingleLineComment => self.lex_single_line_comment(cursor),
            State::MultiLineComment => self.lex_multi_line_comment(cursor),
        }
    }

    /// 默认状态：分派到具体状态，跳过空白，识别运算符
    fn lex_text(&self, cursor: &mut Cursor) -> Transition {
        for (prefix, next) in PREFIX_DISPATCH {
            if cursor.starts_with(prefix) {
                return flush_then(cursor, *next);
            }
        }

        let Some(c) = cursor.advance() else {
            if !cursor.is_lexeme_empty() {
                return Transition::emit(emit(cursor, Lexeme::Text), State::Text);
            }
            return Transition::finish(emit_eof(cursor));
        };

        match c {
            '\n' => {
                cursor.discard_lexeme();
                cursor.new_line();
                Transition::to(State::Text)
            }
            c if c.is_whitespace() => {
                cursor.discard_lexeme();
                Transition::to(State::Text)
            }
            c if starts_number(c, cursor.peek()) => {
                cursor.unadvance();
                Transition::to(State::Number)
            }
            c if is_letter(c) || c == '_' => {
                cursor.unadvance();
                Transition::to(State::Identifier)
            }
            c if is_single_operator(c) => {
                Transition::emit(emit(cursor, Lexeme::Operator), State::Text)
            }
            c if is_double_operator_lead(c) => {
                cursor.advance();
                if Operator::from_lexeme(cursor.lexeme()).is_none() {
                    cursor.unadvance();
                }
                Transition::emit(emit(cursor, Lexeme::Operator), State::Text)
            }
            _ => Transition::emit(emit(cursor, Lexeme::Text), State::Text),
        }
    }

    fn lex_identifier(&self, cursor: &mut Cursor) -> Transition {
        loop {
            cursor.accept_run(ALPHANUMERIC);
            let before_underscore = cursor.mark();
            if !cursor.accept("_") {
                break;
            }
            if cursor.accept(ALPHANUMERIC) {
                continue;
            }
            if cursor.accept("_") && cursor.accept(ALPHANUMERIC) {
                continue;
            }
            // 下划线后无字母数字：不属于标识符
            cursor.rewind(before_underscore);
            break;
        }

        if cursor.is_lexeme_empty() {
            // 孤立的下划线作为未分类文本输出
            cursor.advance();
            return Transition::emit(emit(cursor, Lexeme::Text), State::Text);
        }

        let lexeme = match lookup_keyword(cursor.lexeme()) {
            Some(keyword) => Lexeme::Keyword(keyword),
            None => Lexeme::Identifier,
        };
        Transition::emit(emit(cursor, lexeme), State::Text)
    }

    fn lex_number(&self, cursor: &mut Cursor) -> Transition {
        cursor.accept(SIGNS);
        if cursor.accept("0") && cursor.accept("x") {
            cursor.accept_run(HEX_DIGITS);
            return self.finish_number(cursor);
        }

        cursor.accept_run(DIGITS);
        if cursor.accept(".") {
            cursor.accept_run(DIGITS);
        }
        accept_exponent(cursor);
        self.finish_number(cursor)
    }

    fn finish_number(&self, cursor: &mut Cursor) -> Transition {
        if self.strict_numbers && cursor.peek().is_some_and(is_letter) {
            cursor.advance();
            let error = LexError::generic(format_args!("bad number syntax: {:?}", cursor.lexeme()));
            let token = emit_error(cursor, &error.to_string());
            return Transition::fail(token, error);
        }
        Transition::emit(emit(cursor, Lexeme::Number), State::Text)
    }

    fn lex_string(&self, cursor: &mut Cursor) -> Transition {
        let start_line = cursor.line();
        cursor.advance();
        loop {
            match cursor.peek() {
                Some('"') => break,
                None => return Transition::halt(LexError::UnterminatedString { line: start_line }),
                Some(_) => {
                    // 字符串内的换行不推进行号
                    if cursor.advance() == Some('\\') && matches!(cursor.peek(), Some('"' | '\\')) {
                        cursor.advance();
                    }
                }
            }
        }
        cursor.advance();
        Transition::emit(emit(cursor, Lexeme::String), State::Text)
    }

    fn lex_char(&self, cursor: &mut Cursor) -> Transition {
        let line = cursor.line();
        cursor.advance();

        let closed = if cursor.accept("\\") {
            cursor.accept(CHAR_ESCAPES) && cursor.accept("'")
        } else if cursor.accept("'") {
            false
        } else {
            cursor.advance();
            cursor.accept("'")
        };
        if !closed {
            return Transition::halt(LexError::MalformedChar { line });
        }
        Transition::emit(emit(cursor, Lexeme::Char), State::Text)
    }

    fn lex_single_line_comment(&self, cursor: &mut Cursor) -> Transition {
        cursor.advance();
        cursor.advance();
        while !matches!(cursor.peek(), Some('\n') | None) {
            cursor.advance();
        }
        Transition::emit(
            emit(cursor, Lexeme::Comment(CommentStyle::Line)),
            State::Text,
        )
    }

    fn lex_multi_line_comment(&self, cursor: &mut Cursor) -> Transition {
        let start_line = cursor.line();
        cursor.advance();
        cursor.advance();
        loop {
            match cursor.peek() {
                None => return Transition::halt(LexError::UnterminatedComment { line: start_line }),
                Some('\n') => cursor.cross_line(),
                Some(_) => {}
            }
            if cursor.accept("@") {
                if cursor.peek() == Some('/') {
                    cursor.advance();
                    break;
                }
                continue;
            }
            cursor.advance();
        }

        let token = emit(cursor, Lexeme::Comment(CommentStyle::Block));
        cursor.sync_lines();
        Transition::emit(token, State::Text)
    }
}

/// 发出待定的未分类文本（若有），然后进入 next
fn flush_then(cursor: &mut Cursor, next: State) -> Transition {
    if cursor.is_lexeme_empty() {
        Transition::to(next)
    } else {
        Transition::emit(emit(cursor, Lexeme::Text), next)
    }
}

/// 数字起始：数字；`.` 后紧跟数字；`-` 后紧跟数字或 `.`。`+` 总是运算符
fn starts_number(c: char, next: Option<char>) -> bool {
    match c {
        '.' => next.is_some_and(is_digit),
        '-' => next.is_some_and(|n| is_digit(n) || n == '.'),
        c => is_digit(c),
    }
}

/// 可选的指数部分；标记后没有数字时整体回退
fn accept_exponent(cursor: &mut Cursor) {
    let before_marker = cursor.mark();
    if !cursor.accept(EXPONENT_MARKERS) {
        return;
    }
    cursor.accept(SIGNS);
    if cursor.peek().is_some_and(is_digit) {
        cursor.accept_run(DIGITS);
    } else {
        cursor.rewind(before_marker);
    }
}

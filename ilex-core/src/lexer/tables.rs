//! 分类表
//!
//! 只读、进程级的静态数据：保留字表（有序，二分查找）与运算符表。
//! 首次访问时构建一次，之后不再修改，无需同步。

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// 十进制数字
pub const DIGITS: &str = "0123456789";
/// 十六进制数字
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";
/// 字母与数字（标识符主体）
pub const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// 正负号
pub const SIGNS: &str = "+-";
/// 指数标记
pub const EXPONENT_MARKERS: &str = "eE";
/// 字符字面量允许的转义字符
pub const CHAR_ESCAPES: &str = "rntbv'\\";

/// 保留字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Auto,
    Bool,
    Break,
    Case,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Destruct,
    Double,
    Else,
    False,
    Float,
    For,
    Foreach,
    Goto,
    If,
    In,
    Inherit,
    Int,
    Long,
    New,
    Private,
    Procedure,
    Public,
    Repeat,
    Return,
    Sizeof,
    Static,
    String,
    Switch,
    True,
    Until,
    Void,
}

/// 关键字表（按字典序排列，供二分查找）
pub static KEYWORD_TABLE: &[(&str, Keyword)] = &[
    ("auto", Keyword::Auto),
    ("bool", Keyword::Bool),
    ("break", Keyword::Break),
    ("case", Keyword::Case),
    ("char", Keyword::Char),
    ("class", Keyword::Class),
    ("const", Keyword::Const),
    ("continue", Keyword::Continue),
    ("default", Keyword::Default),
    ("destruct", Keyword::Destruct),
    ("double", Keyword::Double),
    ("else", Keyword::Else),
    ("false", Keyword::False),
    ("float", Keyword::Float),
    ("for", Keyword::For),
    ("foreach", Keyword::Foreach),
    ("goto", Keyword::Goto),
    ("if", Keyword::If),
    ("in", Keyword::In),
    ("inherit", Keyword::Inherit),
    ("int", Keyword::Int),
    ("long", Keyword::Long),
    ("new", Keyword::New),
    ("private", Keyword::Private),
    ("procedure", Keyword::Procedure),
    ("public", Keyword::Public),
    ("repeat", Keyword::Repeat),
    ("return", Keyword::Return),
    ("sizeof", Keyword::Sizeof),
    ("static", Keyword::Static),
    ("string", Keyword::String),
    ("switch", Keyword::Switch),
    ("true", Keyword::True),
    ("until", Keyword::Until),
    ("void", Keyword::Void),
];

/// 查找关键字（精确匹配）
pub fn lookup_keyword(word: &str) -> Option<Keyword> {
    KEYWORD_TABLE
        .binary_search_by(|(kw, _)| (*kw).cmp(word))
        .ok()
        .map(|idx| KEYWORD_TABLE[idx].1)
}

/// 运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Equal,
    NotEqual,
    LessOrEqual,
    LessThan,
    BiggerThan,
    BiggerOrEqual,
    Assignment,
    Not,
    ArithmeticAnd,
    LogicalAnd,
    ArithmeticOr,
    LogicalOr,
    Xor,
    Production,
    Add,
    Increment,
    Decrement,
    Minus,
    Div,
    Mod,
    OpeningCurlyBrace,
    ClosingCurlyBrace,
    OpeningParenthesis,
    ClosingParenthesis,
    OpeningBrace,
    ClosingBrace,
    Dot,
    Comma,
    Colon,
    Semicolon,
}

static OPERATOR_TABLE: &[(&str, Operator, &str)] = &[
    ("==", Operator::Equal, "equal"),
    ("!=", Operator::NotEqual, "not equal"),
    ("<=", Operator::LessOrEqual, "less or equal"),
    ("<", Operator::LessThan, "less than"),
    (">", Operator::BiggerThan, "bigger than"),
    (">=", Operator::BiggerOrEqual, "bigger or equal"),
    ("=", Operator::Assignment, "assignment"),
    ("!", Operator::Not, "not"),
    ("&", Operator::ArithmeticAnd, "arithmetic and"),
    ("&&", Operator::LogicalAnd, "logical and"),
    ("|", Operator::ArithmeticOr, "arithmetic or"),
    ("||", Operator::LogicalOr, "logical or"),
    ("^", Operator::Xor, "logical/arithmetic xor"),
    ("*", Operator::Production, "production"),
    ("+", Operator::Add, "add"),
    ("++", Operator::Increment, "increment"),
    ("--", Operator::Decrement, "decrement"),
    ("-", Operator::Minus, "sub and unary minus"),
    ("/", Operator::Div, "div"),
    ("%", Operator::Mod, "mod"),
    ("{", Operator::OpeningCurlyBrace, "opening curly brace"),
    ("}", Operator::ClosingCurlyBrace, "closing curly brace"),
    ("(", Operator::OpeningParenthesis, "opening parenthesis"),
    (")", Operator::ClosingParenthesis, "closing parenthesis"),
    ("[", Operator::OpeningBrace, "opening brace"),
    ("]", Operator::ClosingBrace, "closing brace"),
    (".", Operator::Dot, "dot"),
    (",", Operator::Comma, "comma"),
    (":", Operator::Colon, "colon"),
    (";", Operator::Semicolon, "semi_colon"),
];

static OPERATORS_BY_LEXEME: Lazy<HashMap<&'static str, Operator>> = Lazy::new(|| {
    OPERATOR_TABLE
        .iter()
        .map(|(lexeme, op, _)| (*lexeme, *op))
        .collect()
});

static DESCRIPTIONS: Lazy<HashMap<Operator, &'static str>> = Lazy::new(|| {
    OPERATOR_TABLE
        .iter()
        .map(|(_, op, desc)| (*op, *desc))
        .collect()
});

impl Operator {
    /// 按词素查找运算符
    pub fn from_lexeme(lexeme: &str) -> Option<Operator> {
        OPERATORS_BY_LEXEME.get(lexeme).copied()
    }

    /// 诊断输出使用的描述名
    pub fn description(&self) -> &'static str {
        DESCRIPTIONS.get(self).copied().unwrap_or("")
    }
}

/// 总是单独成词的运算符字符
pub fn is_single_operator(c: char) -> bool {
    matches!(
        c,
        '^' | '*' | '/' | '%' | '{' | '}' | '(' | ')' | '[' | ']' | '.' | ',' | ':' | ';'
    )
}

/// 可能与下一个字符组成双字符运算符的字符
pub fn is_double_operator_lead(c: char) -> bool {
    matches!(c, '=' | '+' | '<' | '>' | '-' | '!' | '&' | '|')
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_sorted() {
        assert_eq!(KEYWORD_TABLE.len(), 35);
        assert!(KEYWORD_TABLE.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_lookup_keyword() {
        assert_eq!(lookup_keyword("int"), Some(Keyword::Int));
        assert_eq!(lookup_keyword("foreach"), Some(Keyword::Foreach));
        assert_eq!(lookup_keyword("auto"), Some(Keyword::Auto));
        assert_eq!(lookup_keyword("void"), Some(Keyword::Void));
        assert_eq!(lookup_keyword("Int"), None);
        assert_eq!(lookup_keyword("integer"), None);
        assert_eq!(lookup_keyword(""), None);
    }

    #[test]
    fn test_every_keyword_is_found() {
        for (text, kw) in KEYWORD_TABLE {
            assert_eq!(lookup_keyword(text), Some(*kw));
        }
    }

    #[test]
    fn test_operator_lookup() {
        assert_eq!(Operator::from_lexeme("=="), Some(Operator::Equal));
        assert_eq!(Operator::from_lexeme("="), Some(Operator::Assignment));
        assert_eq!(Operator::from_lexeme("=>"), None);
        assert_eq!(Operator::from_lexeme("-="), None);
        assert_eq!(Operator::Semicolon.description(), "semi_colon");
        assert_eq!(Operator::Xor.description(), "logical/arithmetic xor");
        for (lexeme, op, desc) in OPERATOR_TABLE {
            assert_eq!(Operator::from_lexeme(lexeme), Some(*op));
            assert_eq!(op.description(), *desc);
        }
    }

    #[test]
    fn test_every_operator_char_is_classified() {
        for (lexeme, _, _) in OPERATOR_TABLE {
            let first = lexeme.chars().next().unwrap();
            if lexeme.len() == 2 {
                assert!(is_double_operator_lead(first), "{lexeme}");
            } else {
                assert!(is_single_operator(first) || is_double_operator_lead(first));
            }
        }
    }
}

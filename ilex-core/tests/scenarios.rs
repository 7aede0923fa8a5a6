//! 集成测试 - 端到端扫描场景

mod common;

use common::{kinds_and_texts, lex, lex_with};
use ilex_core::lexer::{CommentStyle, Keyword, LexError, NumberClass, Operator, TokenKind};
use ilex_core::report::render;
use ilex_core::{tokenize, LexerConfig};

#[test]
fn test_declaration_statement() {
    assert_eq!(
        kinds_and_texts("int x = 12;"),
        vec![
            (TokenKind::Keyword(Keyword::Int), "int".to_string()),
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Operator(Operator::Assignment), "=".to_string()),
            (TokenKind::Number(NumberClass::Integer), "12".to_string()),
            (TokenKind::Operator(Operator::Semicolon), ";".to_string()),
        ]
    );
}

#[test]
fn test_real_with_fraction_and_exponent() {
    assert_eq!(
        kinds_and_texts("3.14e-2"),
        vec![(TokenKind::Number(NumberClass::Real), "3.14e-2".to_string())]
    );
}

#[test]
fn test_hex_integer() {
    let tokens = kinds_and_texts("0x1F");
    assert_eq!(
        tokens,
        vec![(TokenKind::Number(NumberClass::HexInteger), "0x1F".to_string())]
    );
    assert_eq!(tokens[0].0.category(), "integer");
}

#[test]
fn test_string_with_escaped_quote() {
    assert_eq!(
        kinds_and_texts(r#""ab\"c""#),
        vec![(TokenKind::String, r#""ab\"c""#.to_string())]
    );
}

#[test]
fn test_line_comment_then_identifier() {
    let tokens = lex("@@ note\nx");
    assert_eq!(tokens[0].kind, TokenKind::Comment(CommentStyle::Line));
    assert_eq!(tokens[0].comment_body(), Some(" note"));
    assert_eq!(tokens[0].lines.start, 1);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "x");
    assert_eq!(tokens[1].lines.start, 2);
}

#[test]
fn test_unterminated_string_halts_silently() {
    let (tokens, lexer) = lex_with("y = \"abc", &LexerConfig::default());
    assert!(tokens.iter().all(|t| t.kind != TokenKind::String));
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));
    assert!(tokens.iter().all(|t| !t.is_eof()));
    assert_eq!(tokens.len(), 2);
    assert_eq!(
        lexer.halt_reason(),
        Some(&LexError::UnterminatedString { line: 1 })
    );
}

#[test]
fn test_halt_keeps_earlier_tokens() {
    let result = tokenize("a\nb\n/@ never closed\nc");
    assert_eq!(result, Err(LexError::UnterminatedComment { line: 3 }));

    let (tokens, _) = lex_with("a\nb\n/@ never closed\nc", &LexerConfig::default());
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn test_strict_numbers_surface_error_token() {
    let config = LexerConfig {
        strict_numbers: true,
        ..LexerConfig::default()
    };
    let (tokens, lexer) = lex_with("x = 23er;", &config);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Error);
    assert_eq!(last.text, "bad number syntax: \"23e\"");
    assert!(matches!(lexer.halt_reason(), Some(LexError::Generic(_))));
    assert_eq!(
        render(&tokens).last().map(String::as_str),
        Some("bad number syntax: \"23e\"")
    );
}

#[test]
fn test_line_numbers_across_multiline_tokens() {
    // 只有普通换行与多行注释推进行号
    let tokens = lex("a\n\"b\nc\"\n/@ d\n\ne @/ f\ng");
    let spans: Vec<_> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.lines.start, t.lines.end))
        .collect();
    assert_eq!(
        spans,
        vec![
            ("a", 1, 1),
            ("\"b\nc\"", 2, 2),
            ("/@ d\n\ne @/", 3, 5),
            ("f", 5, 5),
            ("g", 6, 6),
            ("", 6, 6),
        ]
    );
}

#[test]
fn test_diagnostic_transcript() {
    let tokens = tokenize("if (n >= 0x10) {\n  @@ big\n  n--;\n}\n/@ done\n@/").unwrap();
    assert_eq!(
        render(&tokens),
        vec![
            "line 1: keyword \"if\"",
            "line 1: operator \"opening parenthesis\"",
            "line 1: id \"n\"",
            "line 1: operator \"bigger or equal\"",
            "line 1: integer",
            "line 1: operator \"closing parenthesis\"",
            "line 1: operator \"opening curly brace\"",
            "line 2: comment \" big\"",
            "line 3: id \"n\"",
            "line 3: operator \"decrement\"",
            "line 3: operator \"semi_colon\"",
            "line 4: operator \"closing curly brace\"",
            "line 5-6: comment \" done\n\"",
        ]
    );
}

#[test]
fn test_signed_numbers_and_operators() {
    let texts: Vec<_> = kinds_and_texts("++34 a-7 b - 7 -.5")
        .into_iter()
        .map(|(_, text)| text)
        .collect();
    assert_eq!(texts, vec!["++", "34", "a", "-7", "b", "-", "7", "-.5"]);
}

#[test]
fn test_plus_minus_after_identifier() {
    assert_eq!(
        kinds_and_texts("a+1"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Operator(Operator::Add), "+".to_string()),
            (TokenKind::Number(NumberClass::Integer), "1".to_string()),
        ]
    );
    assert_eq!(
        kinds_and_texts("x-1"),
        vec![
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Number(NumberClass::Integer), "-1".to_string()),
        ]
    );
    assert_eq!(
        kinds_and_texts("+8"),
        vec![
            (TokenKind::Operator(Operator::Add), "+".to_string()),
            (TokenKind::Number(NumberClass::Integer), "8".to_string()),
        ]
    );
}

#[test]
fn test_negative_fraction_is_one_real() {
    assert_eq!(
        kinds_and_texts("-.5"),
        vec![(TokenKind::Number(NumberClass::Real), "-.5".to_string())]
    );
}

#[test]
fn test_multiline_string_keeps_reporting_line() {
    let tokens = lex("\"a\nb\" x\ny");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!((tokens[0].lines.start, tokens[0].lines.end), (1, 1));
    assert_eq!(tokens[1].text, "x");
    assert_eq!(tokens[1].lines.start, 1);
    assert_eq!(tokens[2].text, "y");
    assert_eq!(tokens[2].lines.start, 2);
}

#[test]
fn test_block_comment_inside_identifier_run() {
    let tokens = kinds_and_texts("c/@@ string @/ int;");
    assert_eq!(tokens[0], (TokenKind::Identifier, "c".to_string()));
    assert_eq!(
        tokens[1],
        (
            TokenKind::Comment(CommentStyle::Block),
            "/@@ string @/".to_string()
        )
    );
    assert_eq!(tokens[2].0, TokenKind::Keyword(Keyword::Int));
}

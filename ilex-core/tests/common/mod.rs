//! 测试辅助工具
//!
//! 提供集成测试共享的输入语料与辅助函数

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use ilex_core::lexer::{Lexer, Token, TokenKind};
use ilex_core::LexerConfig;

/// 覆盖各类词素的输入语料（均可完整扫描，不会中止）
pub const CORPUS: &[&str] = &[
    "",
    "int x = 12;",
    "int b = 0xx34;\n0x4e3\n.23e2\n36.2e5\n3e+2\n-4e-23e3\n\"com 'h' fg\"\n/@ erjk @/ /@ lkfjlek krejng @/ elr /@elrk@@rkg@/ 0234\n@@ rkg /@lek@/ elrk @@ erj~~~\n23er\n234Ee2\n23e23e23e\n__e__e23__23e3\n-0x34\n34e34-e3-23-.24\n++34++34+-34--34\na_b__d\nc/@@ string @/ int;\n/@@/\n-20x2\n-20e-2\n-20e--2",
    "procedure main() {\n\tforeach (x in xs) { sum = sum + x; }\n\treturn sum >= 10 && !done || flag;\n}\n",
    "char c = '\\n'; string s = \"line\\\\\\\"\";\r\n",
    "/@ multi\n line\n comment @/\nwhile_not_kw = a[i] % 2 ^ b;",
    "x=y==z!=w<=v<u>t>=s",
    "$ # ` ~ é ü _",
    "3.14e-2 0x1F 7 .5 +8",
];

/// 以指定配置完整扫描
pub fn lex_with(source: &str, config: &LexerConfig) -> (Vec<Token>, Lexer) {
    let mut lexer = Lexer::with_config(source, config);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer)
}

/// 以默认配置完整扫描
pub fn lex(source: &str) -> Vec<Token> {
    lex_with(source, &LexerConfig::default()).0
}

/// 去掉 EOF 之后的 (种类, 文本) 序列
pub fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .filter(|t| !t.is_eof())
        .map(|t| (t.kind, t.text))
        .collect()
}

/// 用 token 词素与其间被丢弃的片段重建源文本。
/// 被丢弃的片段必须全部是空白。
pub fn reconstruct(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut pos = 0;
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Error) {
        let gap = &source[pos..token.offset];
        assert!(
            gap.chars().all(char::is_whitespace),
            "non-whitespace gap {:?} before {:?}",
            gap,
            token
        );
        out.push_str(gap);
        out.push_str(&token.text);
        pos = token.end_offset();
    }
    out.push_str(&source[pos..]);
    out
}

/// 写入内存的日志输出
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

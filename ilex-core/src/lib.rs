//! Ilex Core - Lexical scanner (pure logic, no IO)
//!
//! Contains the classification tables, the input cursor, the scanning state
//! machine, the token queue and the diagnostic reporter.
//! Only operates on in-memory text, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;
pub mod report;

// Re-export common types
pub use lexer::{
    open_session, spawn_worker, tokenize, LexError, Lexer, Token, TokenKind, TokenSource,
    TokenStream,
};
pub use report::Diagnostic;

// Re-export config types from ilex-config
pub use ilex_config::{LexerConfig, Phase, Schedule};

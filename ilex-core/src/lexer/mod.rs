//! 词法分析模块
//!
//! 状态机驱动的扫描器：游标、分类表、状态、发射器，
//! 以及拉模式与工作线程两种调度方式。

pub mod cursor;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod queue;
pub mod state;
pub mod tables;
pub mod token;

pub use cursor::{Cursor, Mark};
pub use driver::{open_session, spawn_worker, tokenize, Lexer, TokenSource, TokenStream};
pub use error::LexError;
pub use queue::{BoundedQueue, QueueError};
pub use state::{Next, State, StateMachine, Transition};
pub use tables::{lookup_keyword, Keyword, Operator, KEYWORD_TABLE};
pub use token::{CommentStyle, LineSpan, NumberClass, Token, TokenKind};

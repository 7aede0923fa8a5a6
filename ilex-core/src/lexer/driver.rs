//! 扫描会话驱动
//!
//! 两种调度方式共享同一台状态机：
//! - `Lexer`：消费者按需单步推进（拉模式）
//! - `spawn_worker`：独立线程推进状态机，经由有界队列交付 token

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use ilex_config::{LexerConfig, Schedule};
use tracing::{debug, trace, warn};

use super::cursor::Cursor;
use super::error::LexError;
use super::queue::BoundedQueue;
use super::state::{Next, State, StateMachine};
use super::token::Token;

/// Token 来源，拉模式与工作线程模式的统一接口
pub trait TokenSource {
    /// 取下一个 token，流结束返回 None
    fn next_token(&mut self) -> Option<Token>;

    /// 结束会话并报告中止原因
    fn finish(self: Box<Self>) -> Result<(), LexError>;
}

/// 拉模式词法分析器
pub struct Lexer {
    cursor: Cursor,
    machine: StateMachine,
    /// 当前状态；会话结束后为 None
    state: Option<State>,
    pending: VecDeque<Token>,
    halt: Option<LexError>,
}

impl Lexer {
    /// 使用默认配置创建
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    pub fn with_config(source: impl Into<Arc<str>>, config: &LexerConfig) -> Self {
        let cursor = Cursor::new(source);
        debug!(target: "ilex::lexer", len = cursor.input().len(), "Starting lexing session");
        Self {
            cursor,
            machine: StateMachine::new(config),
            state: Some(State::Text),
            pending: VecDeque::new(),
            halt: None,
        }
    }

    /// 取下一个 token，仅在缓冲为空时推进状态机
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let state = self.state?;
            self.step(state);
        }
    }

    fn step(&mut self, state: State) {
        let transition = self.machine.step(state, &mut self.cursor);
        if let Some(token) = transition.token {
            self.pending.push_back(token);
        }
        match transition.next {
            Next::Continue(next) => self.state = Some(next),
            Next::Finished => {
                debug!(target: "ilex::lexer", line = self.cursor.line(), "Reached end of input");
                self.state = None;
            }
            Next::Halted(error) => {
                warn!(target: "ilex::lexer", %error, "Lexing halted");
                self.halt = Some(error);
                self.state = None;
            }
        }
    }

    /// 中止原因（正常结束或尚未结束时为 None）
    pub fn halt_reason(&self) -> Option<&LexError> {
        self.halt.as_ref()
    }

    /// 状态机已停止且没有剩余 token
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.pending.is_empty()
    }

    /// 当前行号
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    fn into_result(self) -> Result<(), LexError> {
        match self.halt {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Option<Token> {
        Lexer::next_token(self)
    }

    fn finish(self: Box<Self>) -> Result<(), LexError> {
        self.into_result()
    }
}

/// 工作线程模式下消费端持有的 token 流
pub struct TokenStream {
    queue: Arc<BoundedQueue<Token>>,
    handle: Option<JoinHandle<Option<LexError>>>,
}

/// 在独立线程上运行状态机
pub fn spawn_worker(source: impl Into<Arc<str>>, config: &LexerConfig) -> TokenStream {
    let queue = BoundedQueue::new(config.queue_capacity);
    let producer = Arc::clone(&queue);
    let mut lexer = Lexer::with_config(source, config);

    let handle = thread::spawn(move || {
        while let Some(token) = lexer.next_token() {
            if let Err(error) = producer.push(token) {
                debug!(target: "ilex::queue", %error, "Consumer went away, stopping worker");
                break;
            }
        }
        if let Err(error) = producer.close() {
            warn!(target: "ilex::queue", %error, "Failed to close token queue");
        }
        lexer.halt
    });
    match queue.capacity() {
        Ok(capacity) => trace!(target: "ilex::queue", capacity, "Spawned lexer worker"),
        Err(error) => warn!(target: "ilex::queue", %error, "Token queue unavailable"),
    }

    TokenStream {
        queue,
        handle: Some(handle),
    }
}

impl TokenStream {
    /// 取下一个 token（阻塞），流结束返回 None
    pub fn next_token(&mut self) -> Option<Token> {
        match self.queue.pop() {
            Ok(token) => token,
            Err(error) => {
                warn!(target: "ilex::queue", %error, "Token queue unavailable");
                None
            }
        }
    }

    /// 关闭队列、等待工作线程退出，并返回中止原因
    pub fn finish(mut self) -> Result<(), LexError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), LexError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        if let Err(error) = self.queue.close() {
            warn!(target: "ilex::queue", %error, "Failed to close token queue");
        }
        match handle.join() {
            Ok(None) => Ok(()),
            Ok(Some(error)) => Err(error),
            Err(_) => Err(LexError::Generic("lexer worker panicked".to_string())),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Option<Token> {
        TokenStream::next_token(self)
    }

    fn finish(self: Box<Self>) -> Result<(), LexError> {
        TokenStream::finish(*self)
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// 按配置的调度方式开启会话
pub fn open_session(
    source: impl Into<Arc<str>>,
    config: &LexerConfig,
) -> Box<dyn TokenSource + Send> {
    match config.schedule {
        Schedule::Pull => Box::new(Lexer::with_config(source, config)),
        Schedule::Worker => Box::new(spawn_worker(source, config)),
    }
}

/// 一次性扫描整个输入；中止时返回原因
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    lexer.into_result().map(|()| tokens)
}

//! 输入游标
//!
//! 在只读源文本上维护当前词素的起止位置、上一次读取的字符宽度
//! 以及行号簿记。所有位置都是字节偏移，始终落在 UTF-8 字符边界上。

use std::sync::Arc;

/// 游标位置快照，用于有界回退
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// 输入游标
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Arc<str>,
    /// 当前词素起点
    start: usize,
    /// 下一个待读字符的位置
    pos: usize,
    /// 上一次 advance 读取的宽度，EOF 时为 Some(0)
    width: Option<usize>,
    /// 当前词素起始行
    line: usize,
    /// 跨行词素扫描过程中的行号
    lookahead_line: usize,
}

impl Cursor {
    /// 创建新的游标，行号从 1 开始
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            input: input.into(),
            start: 0,
            pos: 0,
            width: None,
            line: 1,
            lookahead_line: 1,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// 读取下一个字符，EOF 返回 None
    pub fn advance(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                let width = c.len_utf8();
                self.pos += width;
                self.width = Some(width);
                Some(c)
            }
            None => {
                self.width = Some(0);
                None
            }
        }
    }

    /// 撤销最近一次 advance。连续调用两次是逻辑错误。
    pub fn unadvance(&mut self) {
        debug_assert!(
            self.width.is_some(),
            "unadvance without a preceding advance"
        );
        if let Some(width) = self.width.take() {
            self.pos -= width;
        }
    }

    /// 查看下一个字符但不消耗
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// 剩余输入是否以 prefix 开头
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.pos..].starts_with(prefix)
    }

    /// 若下一个字符属于 valid 则消耗它
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.unadvance();
                false
            }
        }
    }

    /// 连续消耗属于 valid 的字符，返回消耗的个数
    pub fn accept_run(&mut self, valid: &str) -> usize {
        let mut count = 0;
        while self.accept(valid) {
            count += 1;
        }
        count
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// 回退到此前记录的位置（不能早于词素起点）
    pub fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 >= self.start && mark.0 <= self.pos);
        self.pos = mark.0;
        self.width = None;
    }

    /// 丢弃当前词素
    pub fn discard_lexeme(&mut self) {
        self.start = self.pos;
    }

    /// 当前词素文本
    pub fn lexeme(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    pub fn is_lexeme_empty(&self) -> bool {
        self.start == self.pos
    }

    pub fn lexeme_start(&self) -> usize {
        self.start
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn lookahead_line(&self) -> usize {
        self.lookahead_line
    }

    /// 在空白区域遇到换行
    pub fn new_line(&mut self) {
        self.line += 1;
        self.lookahead_line += 1;
    }

    /// 在多行注释内部遇到换行
    pub fn cross_line(&mut self) {
        self.lookahead_line += 1;
    }

    /// 多行注释发出后同步行号
    pub fn sync_lines(&mut self) {
        self.line = self.lookahead_line;
    }
}

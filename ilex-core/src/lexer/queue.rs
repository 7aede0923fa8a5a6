//! 有界阻塞队列
//!
//! 单生产者/单消费者的 token 交接通道：满时生产者阻塞，空时消费者阻塞，
//! 生产者关闭队列后消费者取完剩余元素即观察到流结束。

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

use thiserror::Error;
use tracing::trace;

/// 队列可能产生的错误
#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    /// 向已关闭的队列写入
    #[error("Cannot push to closed queue")]
    Closed,

    /// 互斥锁被污染
    #[error("Mutex poisoned: {0}")]
    Poisoned(String),
}

/// 线程安全的有界队列
pub struct BoundedQueue<T> {
    inner: Mutex<Inner<T>>,
    not_full: Condvar,
    not_empty: Condvar,
}

struct Inner<T> {
    items: VecDeque<T>,
    capacity: usize,
    closed: bool,
}

impl<T> BoundedQueue<T> {
    /// 创建队列，返回 Arc 以便在线程间共享。容量至少为 1。
    pub fn new(capacity: usize) -> Arc<Self> {
        let capacity = capacity.max(1);
        Arc::new(BoundedQueue {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(capacity.min(1024)),
                capacity,
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        })
    }

    /// 写入（阻塞）：满时等待，关闭后返回 Closed
    pub fn push(&self, item: T) -> Result<(), QueueError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| QueueError::Poisoned(e.to_string()))?;

        while inner.items.len() == inner.capacity && !inner.closed {
            trace!(target: "ilex::queue", "Queue full, producer waiting");
            inner = self
                .not_full
                .wait(inner)
                .map_err(|e| QueueError::Poisoned(e.to_string()))?;
        }

        if inner.closed {
            return Err(QueueError::Closed);
        }

        inner.items.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// 读取（阻塞）：空时等待，关闭且为空时返回 None
    pub fn pop(&self) -> Result<Option<T>, QueueError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| QueueError::Poisoned(e.to_string()))?;

        while inner.items.is_empty() && !inner.closed {
            trace!(target: "ilex::queue", "Queue empty, consumer waiting");
            inner = self
                .not_empty
                .wait(inner)
                .map_err(|e| QueueError::Poisoned(e.to_string()))?;
        }

        let item = inner.items.pop_front();
        if item.is_some() {
            self.not_full.notify_one();
        }
        Ok(item)
    }

    /// 关闭队列并唤醒所有等待者
    pub fn close(&self) -> Result<(), QueueError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| QueueError::Poisoned(e.to_string()))?;
        inner.closed = true;
        self.not_empty.notify_all();
        self.not_full.notify_all();
        Ok(())
    }

    pub fn len(&self) -> Result<usize, QueueError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| QueueError::Poisoned(e.to_string()))?;
        Ok(inner.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, QueueError> {
        Ok(self.len()? == 0)
    }

    pub fn capacity(&self) -> Result<usize, QueueError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| QueueError::Poisoned(e.to_string()))?;
        Ok(inner.capacity)
    }
}

use crate::socket::Socket;
use crate::{Config, Error, Recorder, Result, UndoStack};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Builder for an [`UndoStack`].
///
/// # Examples
/// ```
/// # use undo_stack::{Signal, UndoStack};
/// let stack = UndoStack::builder()
///     .limit(10)
///     .capacity(10)
///     .transactions(false)
///     .connect(|s: Signal| { dbg!(s); })
///     .build()
///     .unwrap();
/// assert_eq!(stack.limit(), 10);
/// assert!(!stack.has_transactions());
/// ```
#[derive(Debug)]
pub struct Builder<S = ()> {
    capacity: usize,
    config: Config,
    socket: Socket<S>,
}

impl<S> Builder<S> {
    /// Sets the capacity for the stack.
    pub fn capacity(mut self, capacity: usize) -> Builder<S> {
        self.capacity = capacity;
        self
    }

    /// Sets the `limit` of the stack.
    pub fn limit(mut self, limit: usize) -> Builder<S> {
        self.config.limit = limit;
        self
    }

    /// Sets if the stack supports transactions (on by default).
    pub fn transactions(mut self, on: bool) -> Builder<S> {
        self.config.use_transactions = on;
        self
    }

    /// Sets if status messages are logged (off by default).
    pub fn debug(mut self, on: bool) -> Builder<S> {
        self.config.debug = on;
        self
    }

    /// Sets if the stack reacts to undo and redo hot keys (off by default).
    pub fn hot_keys(mut self, on: bool) -> Builder<S> {
        self.config.bind_hot_keys = on;
        self
    }

    /// Replaces every option with the ones in `config`.
    pub fn config(mut self, config: Config) -> Builder<S> {
        self.config = config;
        self
    }

    /// Connects the slot.
    pub fn connect<T>(self, slot: T) -> Builder<T> {
        Builder {
            capacity: self.capacity,
            config: self.config,
            socket: Socket::new(Some(slot)),
        }
    }

    /// Builds the stack.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLimit`] if the limit is `0`.
    pub fn build(self) -> Result<UndoStack<S>> {
        let Config {
            limit,
            use_transactions,
            debug,
            bind_hot_keys,
        } = self.config;
        let limit = NonZeroUsize::new(limit).ok_or(Error::InvalidLimit(limit))?;
        let recorder = use_transactions.then(|| Recorder::with_debug(debug));
        Ok(UndoStack::from_parts(
            VecDeque::with_capacity(self.capacity),
            limit,
            recorder,
            debug,
            bind_hot_keys,
            self.socket,
        ))
    }
}

impl<S> Default for Builder<S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            config: Config::default(),
            socket: Socket::default(),
        }
    }
}

//! A linear history of commands.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::config::DEFAULT_LIMIT;
use crate::socket::{Socket, Status};
use crate::{
    Action, Command, Config, Entry, Error, IntoCommand, KeyEvent, Recorder, Result, Shortcut,
    Signal, Slot, Transaction,
};
use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use std::num::NonZeroUsize;
use tracing::{debug, warn};

const DEFAULT_NON_ZERO_LIMIT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_LIMIT) {
    Some(limit) => limit,
    None => panic!("the default limit is zero"),
};

/// A linear history of commands.
///
/// The stack rolls the callers state backwards and forwards by calling the undo
/// and redo actions of the recorded commands. Recording a new command after
/// undoing discards everything that could have been redone, and once the
/// `limit` is exceeded the oldest commands are dropped.
///
/// # Examples
/// ```
/// # use std::{cell::RefCell, rc::Rc};
/// # use undo_stack::UndoStack;
/// let s = Rc::new(RefCell::new(String::new()));
/// let push = |c| {
///     let (a, b) = (s.clone(), s.clone());
///     (move || a.borrow_mut().push(c), move || { b.borrow_mut().pop(); })
/// };
///
/// let mut stack = UndoStack::new();
/// stack.execute(push('a')).unwrap();
/// stack.execute(push('b')).unwrap();
/// stack.execute(push('c')).unwrap();
/// assert_eq!(*s.borrow(), "abc");
/// stack.undo();
/// stack.undo();
/// stack.undo();
/// assert_eq!(*s.borrow(), "");
/// stack.redo();
/// stack.redo();
/// stack.redo();
/// assert_eq!(*s.borrow(), "abc");
/// ```
pub struct UndoStack<S = ()> {
    pub(crate) entries: VecDeque<Entry>,
    pub(crate) index: usize,
    limit: NonZeroUsize,
    pub(crate) recorder: Option<Recorder>,
    debug: bool,
    hot_keys: bool,
    socket: Socket<S>,
}

impl UndoStack {
    /// Returns a new stack with the default configuration.
    pub fn new() -> UndoStack {
        UndoStack::from_parts(
            VecDeque::new(),
            DEFAULT_NON_ZERO_LIMIT,
            Some(Recorder::new()),
            false,
            false,
            Socket::default(),
        )
    }

    /// Returns a builder for a stack.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a stack built from `config`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLimit`] if the limit in `config` is `0`.
    pub fn from_config(config: Config) -> Result<UndoStack> {
        Builder::default().config(config).build()
    }
}

impl<S> UndoStack<S> {
    pub(crate) fn from_parts(
        entries: VecDeque<Entry>,
        limit: NonZeroUsize,
        recorder: Option<Recorder>,
        debug: bool,
        hot_keys: bool,
        socket: Socket<S>,
    ) -> UndoStack<S> {
        if debug {
            debug!(limit = limit.get(), "initialized with a limit of {limit} commands");
        }
        UndoStack {
            entries,
            index: 0,
            limit,
            recorder,
            debug,
            hot_keys,
            socket,
        }
    }

    /// Returns the number of commands in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the stack holds as many commands as its limit.
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.limit.get()
    }

    /// Returns the limit of the stack.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns the number of applied commands.
    ///
    /// This is one past the [`pointer`](UndoStack::pointer).
    pub fn head(&self) -> usize {
        self.index
    }

    /// Returns the position of the most recently applied command.
    ///
    /// Returns `None` if every command has been undone, or the stack is empty.
    pub fn pointer(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Returns `true` if the stack can undo.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Returns `true` if the stack can redo.
    pub fn can_redo(&self) -> bool {
        self.index < self.entries.len()
    }

    /// Returns the number of commands that can be redone.
    pub fn redoable(&self) -> usize {
        self.entries.len() - self.index
    }

    /// Returns `true` if the stack was built with transaction support.
    pub fn has_transactions(&self) -> bool {
        self.recorder.is_some()
    }

    /// Returns `true` if a transaction is open.
    pub fn is_in_transaction(&self) -> bool {
        self.recorder.as_ref().is_some_and(Recorder::is_in_progress)
    }

    /// Returns a handle to the transactions of the stack.
    ///
    /// Returns `None` if the stack was built without transaction support.
    pub fn transaction(&mut self) -> Option<Transaction<'_, S>> {
        if self.recorder.is_some() {
            Some(Transaction::new(self))
        } else {
            None
        }
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.replace(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.replace(None)
    }

    fn status(&self) -> Status {
        Status {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            head: self.index,
        }
    }

    /// Returns a structure for configurable formatting of the stack.
    pub fn display(&self) -> Display<'_, S> {
        Display::from(self)
    }
}

impl<S: Slot> UndoStack<S> {
    /// Records a command that has already been applied by the caller.
    ///
    /// If a transaction is open the command is collected by it instead.
    ///
    /// # Errors
    /// If the command is malformed the error is returned and nothing is recorded.
    pub fn record(&mut self, command: impl IntoCommand) -> Result {
        let command = command.into_command()?;
        match self.recorder.as_mut() {
            Some(recorder) if recorder.is_in_progress() => recorder.record(command),
            _ => self.push(command),
        }
        Ok(())
    }

    /// Applies the command by calling its redo action, then records it.
    ///
    /// The command is applied even if a transaction is open.
    ///
    /// # Errors
    /// If the command is malformed the error is returned and nothing is applied.
    pub fn execute(&mut self, command: impl IntoCommand) -> Result {
        let mut command = command.into_command()?;
        if self.debug {
            debug!(text = command.text(), "executing command");
        }
        command.redo();
        self.record(command)
    }

    /// Pushes the command on the stack, bypassing any open transaction.
    pub(crate) fn push(&mut self, command: Command) {
        if self.debug {
            debug!(text = command.text(), "recording command");
        }
        let before = self.status();
        // Forget everything that could have been redone.
        self.entries.truncate(self.index);
        self.entries.push_back(Entry::from(command));
        self.index += 1;
        self.keep_limit();
        let after = self.status();
        self.socket.send_changes(before, after);
    }

    /// Drops the oldest entries until the stack fits within its limit.
    fn keep_limit(&mut self) {
        let Some(exceeds_by) = self.entries.len().checked_sub(self.limit.get()) else {
            return;
        };
        if exceeds_by == 0 {
            return;
        }
        if self.debug {
            debug!(
                limit = self.limit.get(),
                "stack reached its limit, dropping the {exceeds_by} oldest commands"
            );
        }
        self.entries.drain(..exceeds_by);
        self.index = self.index.saturating_sub(exceeds_by);
        self.socket.send(Signal::Evicted(exceeds_by));
    }

    /// Calls the undo action of the current command and steps back.
    ///
    /// Returns `false` and does nothing if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        if self.debug {
            debug!("undo");
        }
        let before = self.status();
        self.index -= 1;
        self.entries[self.index].undo();
        let after = self.status();
        self.socket.send_changes(before, after);
        true
    }

    /// Calls the redo action of the next command and steps forward.
    ///
    /// Returns `false` and does nothing if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        if self.debug {
            debug!("redo");
        }
        let before = self.status();
        self.entries[self.index].redo();
        self.index += 1;
        let after = self.status();
        self.socket.send_changes(before, after);
        true
    }

    /// Changes the limit of the stack and drops the oldest commands that no longer fit.
    ///
    /// A limit smaller than the number of redoable commands would lose them, so it is
    /// refused: a warning is logged and `Ok(false)` is returned with nothing changed.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLimit`] if `limit` is `0`.
    pub fn set_limit(&mut self, limit: usize) -> Result<bool> {
        let limit = NonZeroUsize::new(limit).ok_or(Error::InvalidLimit(limit))?;
        let redoable = self.redoable();
        if limit.get() < redoable {
            warn!(
                limit = limit.get(),
                redoable, "cannot set the limit below the number of redoable commands"
            );
            self.socket.send(Signal::LimitRejected {
                limit: limit.get(),
                redoable,
            });
            return Ok(false);
        }
        let before = self.status();
        self.limit = limit;
        self.keep_limit();
        let after = self.status();
        self.socket.send_changes(before, after);
        Ok(true)
    }

    /// Removes all commands from the stack without undoing them.
    ///
    /// The limit and any open transaction are left as they are.
    pub fn reset(&mut self) -> &mut Self {
        if self.debug {
            debug!("reset");
        }
        let before = self.status();
        self.entries.clear();
        self.index = 0;
        let after = self.status();
        self.socket.send_changes(before, after);
        self
    }

    /// Undoes or redoes in response to a key event.
    ///
    /// Returns the shortcut that was triggered, or `None` if the event is not a
    /// shortcut or hot keys are not enabled.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Shortcut> {
        if !self.hot_keys {
            return None;
        }
        let shortcut = Shortcut::from_event(event)?;
        match shortcut {
            Shortcut::Undo => self.undo(),
            Shortcut::Redo => self.redo(),
        };
        Some(shortcut)
    }
}

impl Default for UndoStack {
    fn default() -> UndoStack {
        UndoStack::new()
    }
}

impl<S: Debug> Debug for UndoStack<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("limit", &self.limit)
            .field("recorder", &self.recorder)
            .field("socket", &self.socket)
            .finish()
    }
}

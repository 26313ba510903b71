//! Flat transactions: several commands undone and redone as one.

use crate::{Action, Chain, Command, Error, Result, Slot, UndoStack};
use std::mem;
use tracing::debug;

/// The state of a [`Recorder`].
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum Phase {
    /// No transaction is open.
    #[default]
    Pending,
    /// A transaction is open and commands are being collected.
    InProgress,
}

/// Collects commands while a transaction is open.
///
/// The recorder does not know about the stack. Ending a transaction hands back
/// the composite command, and it is up to the owner to record it.
///
/// # Examples
/// ```
/// # use undo_stack::{Command, Recorder};
/// let mut recorder = Recorder::new();
/// recorder.begin().unwrap();
/// recorder.record(Command::new(|| (), || ()));
/// recorder.record(Command::new(|| (), || ()));
/// assert_eq!(recorder.len(), 2);
/// let composite = recorder.end();
/// assert!(composite.is_some());
/// assert!(recorder.is_pending());
/// assert!(recorder.end().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    phase: Phase,
    buffer: Vec<Command>,
    debug: bool,
}

impl Recorder {
    /// Returns a new recorder in the pending phase.
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub(crate) fn with_debug(debug: bool) -> Recorder {
        if debug {
            debug!("transaction recorder initialized");
        }
        Recorder {
            debug,
            ..Recorder::default()
        }
    }

    /// Opens a transaction.
    ///
    /// # Errors
    /// Transactions are flat. If one is already open, [`Error::TransactionInProgress`]
    /// is returned and the open transaction keeps collecting commands.
    pub fn begin(&mut self) -> Result {
        if self.is_in_progress() {
            if self.debug {
                debug!(
                    commands = self.buffer.len(),
                    "transaction already in progress, begin ignored"
                );
            }
            return Err(Error::TransactionInProgress);
        }
        self.phase = Phase::InProgress;
        if self.debug {
            debug!("begin transaction");
        }
        Ok(())
    }

    /// Adds a command to the open transaction.
    pub fn record(&mut self, command: Command) {
        if self.debug {
            debug!(text = command.text(), "recording command in transaction");
        }
        self.buffer.push(command);
    }

    /// Closes the transaction and returns the collected commands as one command.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn end(&mut self) -> Option<Command> {
        let buffer = mem::take(&mut self.buffer);
        self.phase = Phase::Pending;
        if self.debug {
            debug!(commands = buffer.len(), "end transaction");
        }
        if buffer.is_empty() {
            return None;
        }
        let text = format!("transaction of {} commands", buffer.len());
        Some(Command::from_action(Chain::from(buffer)).with_text(text))
    }

    /// Undoes the collected commands, last one first, and closes the transaction.
    pub fn cancel(&mut self) {
        for command in self.buffer.iter_mut().rev() {
            command.undo();
        }
        self.buffer.clear();
        self.phase = Phase::Pending;
        if self.debug {
            debug!("cancel transaction");
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` if a transaction is open.
    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Returns `true` if no transaction is open.
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Returns the number of commands collected so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if no commands have been collected.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Handle to the transactions of an [`UndoStack`].
///
/// Returned by [`UndoStack::transaction`] when transactions are enabled.
///
/// # Examples
/// ```
/// # use std::{cell::Cell, rc::Rc};
/// # use undo_stack::UndoStack;
/// let i = Rc::new(Cell::new(0));
/// let add = |n: i32| {
///     let (a, b) = (i.clone(), i.clone());
///     (move || a.set(a.get() + n), move || b.set(b.get() - n))
/// };
///
/// let mut stack = UndoStack::new();
/// let mut tx = stack.transaction().unwrap();
/// tx.begin().unwrap();
/// tx.stack().execute(add(1)).unwrap();
/// tx.stack().execute(add(1)).unwrap();
/// tx.end();
/// assert_eq!(i.get(), 2);
/// assert_eq!(stack.len(), 1);
///
/// stack.undo();
/// assert_eq!(i.get(), 0);
/// stack.redo();
/// assert_eq!(i.get(), 2);
/// ```
#[derive(Debug)]
pub struct Transaction<'a, S> {
    stack: &'a mut UndoStack<S>,
}

impl<'a, S> Transaction<'a, S> {
    pub(crate) fn new(stack: &'a mut UndoStack<S>) -> Self {
        Transaction { stack }
    }

    /// Returns the stack, so commands can be recorded into the open transaction.
    pub fn stack(&mut self) -> &mut UndoStack<S> {
        self.stack
    }

    /// Returns `true` if a transaction is open.
    pub fn is_in_progress(&self) -> bool {
        self.stack.is_in_transaction()
    }

    /// Returns `true` if no transaction is open.
    pub fn is_pending(&self) -> bool {
        !self.is_in_progress()
    }
}

impl<S: Slot> Transaction<'_, S> {
    /// Opens a transaction.
    ///
    /// Until [`end`](Transaction::end) or [`cancel`](Transaction::cancel) is called,
    /// recorded and executed commands are collected instead of pushed on the stack.
    ///
    /// # Errors
    /// Returns [`Error::TransactionInProgress`] if a transaction is already open.
    pub fn begin(&mut self) -> Result {
        match self.stack.recorder.as_mut() {
            Some(recorder) => recorder.begin(),
            None => Ok(()),
        }
    }

    /// Closes the transaction and records the collected commands as one entry.
    ///
    /// Nothing is recorded if the transaction is empty.
    pub fn end(&mut self) {
        let Some(recorder) = self.stack.recorder.as_mut() else {
            return;
        };
        if let Some(command) = recorder.end() {
            self.stack.push(command);
        }
    }

    /// Undoes every command collected in the transaction and closes it.
    ///
    /// Nothing is recorded on the stack.
    pub fn cancel(&mut self) {
        if let Some(recorder) = self.stack.recorder.as_mut() {
            recorder.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, Recorder};
    use crate::{Action, Command, Error};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn traced(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> Command {
        let (a, b) = (log.clone(), log.clone());
        Command::new(
            move || a.borrow_mut().push(format!("redo {name}")),
            move || b.borrow_mut().push(format!("undo {name}")),
        )
    }

    #[test]
    fn phases() {
        let mut recorder = Recorder::new();
        assert_eq!(recorder.phase(), Phase::Pending);
        recorder.begin().unwrap();
        assert!(recorder.is_in_progress());
        recorder.end();
        assert!(recorder.is_pending());
        recorder.begin().unwrap();
        recorder.cancel();
        assert!(recorder.is_pending());
    }

    #[test]
    fn begin_twice_keeps_buffer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut recorder = Recorder::new();
        recorder.begin().unwrap();
        recorder.record(traced(&log, "a"));
        assert_eq!(recorder.begin(), Err(Error::TransactionInProgress));
        assert!(recorder.is_in_progress());
        recorder.record(traced(&log, "b"));
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn end_flattens() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut recorder = Recorder::new();
        recorder.begin().unwrap();
        recorder.record(traced(&log, "a"));
        recorder.record(traced(&log, "b"));
        let mut composite = recorder.end().unwrap();
        assert!(recorder.is_empty());
        assert_eq!(composite.text(), Some("transaction of 2 commands"));
        composite.undo();
        composite.redo();
        assert_eq!(*log.borrow(), ["undo b", "undo a", "redo a", "redo b"]);
    }

    #[test]
    fn cancel_reverts_in_reverse() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut recorder = Recorder::new();
        recorder.begin().unwrap();
        recorder.record(traced(&log, "a"));
        recorder.record(traced(&log, "b"));
        recorder.record(traced(&log, "c"));
        recorder.cancel();
        assert!(recorder.is_empty());
        assert!(recorder.end().is_none());
        assert_eq!(*log.borrow(), ["undo c", "undo b", "undo a"]);
    }
}

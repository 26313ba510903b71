//! Module used to communicate changes in the stack.

use std::mem;
use std::sync::mpsc::{Sender, SyncSender};

/// The parts of the stack state that are reported to a slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Status {
    pub can_undo: bool,
    pub can_redo: bool,
    pub head: usize,
}

/// Owns the connected slot, if any, and turns state changes into signals.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S> {
    slot: Option<S>,
}

impl<S> Socket<S> {
    pub fn new(slot: Option<S>) -> Socket<S> {
        Socket { slot }
    }

    /// Swaps the connected slot, returning the old one.
    pub fn replace(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.slot, slot)
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket::new(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn send(&mut self, signal: Signal) {
        if let Some(slot) = self.slot.as_mut() {
            slot.on_emit(signal);
        }
    }

    /// Reports what differs between `before` and `after`.
    ///
    /// Redo comes first, then undo, then the head.
    pub fn send_changes(&mut self, before: Status, after: Status) {
        if self.slot.is_none() {
            return;
        }
        if before.can_redo != after.can_redo {
            self.send(Signal::Redo(after.can_redo));
        }
        if before.can_undo != after.can_undo {
            self.send(Signal::Undo(after.can_undo));
        }
        if before.head != after.head {
            self.send(Signal::Index(after.head));
        }
    }
}

/// The `Signal` describes the state change done to the stack.
///
/// See [`Slot`] for more information.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the stacks ability to undo has changed.
    Undo(bool),
    /// Emitted when the stacks ability to redo has changed.
    Redo(bool),
    /// Emitted when the head has changed.
    ///
    /// The head is the number of applied entries, one more than the pointer.
    Index(usize),
    /// Emitted when the oldest entries were dropped to stay within the limit.
    Evicted(usize),
    /// Emitted when a new limit was refused because it would drop redoable entries.
    LimitRejected {
        /// The limit that was asked for.
        limit: usize,
        /// The number of entries that can currently be redone.
        redoable: usize,
    },
}

/// Use this to handle signals emitted.
///
/// This allows you to trigger events on certain state changes.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use undo_stack::{Signal, UndoStack};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut stack = UndoStack::builder().connect(sender).build().unwrap();
///
/// stack.record((|| (), || ())).unwrap();
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Index(1)));
/// assert_eq!(iter.next(), None);
///
/// stack.undo();
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Index(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Receives a signal that describes the state change done to the stack.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

//! An undo-redo history of closure pairs, with flat transactions.
//!
//! It is an implementation of the command pattern where a command is nothing more
//! than two functions: one that applies a change and one that reverts it. The state
//! the functions modify is owned by the caller, the [`UndoStack`] only keeps track
//! of which commands have been applied and calls the right function when asked to
//! undo or redo.
//!
//! # Features
//!
//! * [`UndoStack`] provides linear undo-redo functionality. Recording a command after
//!   undoing forgets everything that could have been redone.
//! * The amount of commands being tracked can be limited so only the `N` most recent
//!   commands are kept. The oldest commands are dropped first.
//! * [`Transaction`] collects several commands and records them as a single entry,
//!   so they are undone and redone in one step. A transaction can also be cancelled,
//!   which reverts every command collected so far.
//! * State changes can be observed by connecting a [`Slot`] and status messages are
//!   logged with [`tracing`](https://docs.rs/tracing) when the `debug` option is on.
//! * Undo and redo can be bound to the usual hot keys with [`UndoStack::handle_key`].
//! * Configurable display formatting, colored when the `colored` feature is enabled.
//! * Time stamps on entries when the `chrono` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use undo_stack::UndoStack;
//!
//! # fn main() -> undo_stack::Result {
//! let i = Rc::new(Cell::new(0));
//! let add = |n: i32| {
//!     let (a, b) = (i.clone(), i.clone());
//!     (move || a.set(a.get() + n), move || b.set(b.get() - n))
//! };
//!
//! let mut stack = UndoStack::new();
//! stack.execute(add(1))?;
//! stack.execute(add(2))?;
//! assert_eq!(i.get(), 3);
//! stack.undo();
//! assert_eq!(i.get(), 1);
//! stack.redo();
//! assert_eq!(i.get(), 3);
//!
//! let mut tx = stack.transaction().unwrap();
//! tx.begin()?;
//! tx.stack().execute(add(10))?;
//! tx.stack().execute(add(20))?;
//! tx.end();
//! assert_eq!(i.get(), 33);
//! assert_eq!(stack.len(), 3);
//! stack.undo();
//! assert_eq!(i.get(), 3);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

mod chain;
pub mod command;
mod config;
mod entry;
mod error;
mod format;
mod keys;
mod socket;
pub mod stack;
mod transaction;

pub use self::{
    chain::Chain,
    command::{Action, Command, FromFn, IntoCommand},
    config::{Config, DEFAULT_LIMIT},
    entry::Entry,
    error::Error,
    keys::{KeyEvent, Shortcut},
    socket::{Signal, Slot},
    stack::UndoStack,
    transaction::{Phase, Recorder, Transaction},
};

/// A specialized Result type for the stack.
pub type Result<T = (), E = Error> = core::result::Result<T, E>;

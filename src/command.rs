//! Commands and the conversions used to record them.

use crate::{Error, Result};
use std::fmt::{self, Debug, Formatter};

/// A reversible action.
///
/// Both methods take no input, the state they modify is owned by the caller.
pub trait Action {
    /// Applies, or reapplies, the change.
    fn redo(&mut self);

    /// Reverts the change made by [`redo`](Action::redo).
    fn undo(&mut self);
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn redo(&mut self) {
        (**self).redo()
    }

    fn undo(&mut self) {
        (**self).undo()
    }
}

/// Action made from a pair of functions.
#[derive(Clone, Debug)]
pub struct FromFn<R, U> {
    redo: R,
    undo: U,
}

impl<R, U> FromFn<R, U> {
    /// Creates a new `FromFn` from `redo` and `undo`.
    pub const fn new(redo: R, undo: U) -> Self {
        FromFn { redo, undo }
    }
}

impl<R: FnMut(), U: FnMut()> Action for FromFn<R, U> {
    fn redo(&mut self) {
        (self.redo)()
    }

    fn undo(&mut self) {
        (self.undo)()
    }
}

/// A recorded operation: an owned action with an optional description.
///
/// The text is only used for logging and display.
///
/// # Examples
/// ```
/// # use std::{cell::Cell, rc::Rc};
/// # use undo_stack::{Action, Command};
/// let i = Rc::new(Cell::new(0));
/// let (a, b) = (i.clone(), i.clone());
/// let mut command = Command::new(move || a.set(a.get() + 1), move || b.set(b.get() - 1));
/// command.redo();
/// assert_eq!(i.get(), 1);
/// command.undo();
/// assert_eq!(i.get(), 0);
/// ```
pub struct Command {
    action: Box<dyn Action>,
    text: Option<String>,
}

impl Command {
    /// Creates a command from a `redo` and an `undo` function.
    pub fn new(redo: impl FnMut() + 'static, undo: impl FnMut() + 'static) -> Command {
        Command::from_action(FromFn::new(redo, undo))
    }

    /// Creates a command from any action.
    pub fn from_action(action: impl Action + 'static) -> Command {
        Command {
            action: Box::new(action),
            text: None,
        }
    }

    /// Returns a builder for a command.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Sets the description of the command.
    pub fn with_text(mut self, text: impl Into<String>) -> Command {
        self.text = Some(text.into());
        self
    }

    /// Returns the description of the command, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Action for Command {
    fn redo(&mut self) {
        self.action.redo()
    }

    fn undo(&mut self) {
        self.action.undo()
    }
}

impl Debug for Command {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Command")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Command`] whose actions are supplied separately.
///
/// Building fails if either action is missing.
///
/// # Examples
/// ```
/// # use undo_stack::{Command, Error};
/// let command = Command::builder().redo(|| ()).undo(|| ()).text("noop").build();
/// assert!(command.is_ok());
///
/// let command = Command::builder().redo(|| ()).build();
/// assert_eq!(command.unwrap_err(), Error::MissingAction("undo"));
/// ```
#[derive(Default)]
pub struct Builder {
    redo: Option<Box<dyn FnMut()>>,
    undo: Option<Box<dyn FnMut()>>,
    text: Option<String>,
}

impl Builder {
    /// Sets the `redo` function.
    pub fn redo(mut self, f: impl FnMut() + 'static) -> Builder {
        self.redo = Some(Box::new(f));
        self
    }

    /// Sets the `undo` function.
    pub fn undo(mut self, f: impl FnMut() + 'static) -> Builder {
        self.undo = Some(Box::new(f));
        self
    }

    /// Sets the description of the command.
    pub fn text(mut self, text: impl Into<String>) -> Builder {
        self.text = Some(text.into());
        self
    }

    /// Builds the command.
    ///
    /// # Errors
    /// Returns [`Error::MissingAction`] if `redo` or `undo` was never set.
    pub fn build(self) -> Result<Command> {
        let redo = self.redo.ok_or(Error::MissingAction("redo"))?;
        let undo = self.undo.ok_or(Error::MissingAction("undo"))?;
        Ok(Command {
            action: Box::new(FromFn::new(redo, undo)),
            text: self.text,
        })
    }
}

impl Debug for Builder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Builder")
            .field("redo", &self.redo.is_some())
            .field("undo", &self.undo.is_some())
            .field("text", &self.text)
            .finish()
    }
}

/// Conversion into a [`Command`], validated before anything is recorded.
///
/// Implemented for [`Command`], for `(redo, undo)` pairs of functions,
/// and for a command [`Builder`].
pub trait IntoCommand {
    /// Converts `self` into a command.
    fn into_command(self) -> Result<Command>;
}

impl IntoCommand for Command {
    fn into_command(self) -> Result<Command> {
        Ok(self)
    }
}

impl IntoCommand for Builder {
    fn into_command(self) -> Result<Command> {
        self.build()
    }
}

impl<R, U> IntoCommand for (R, U)
where
    R: FnMut() + 'static,
    U: FnMut() + 'static,
{
    fn into_command(self) -> Result<Command> {
        Ok(Command::new(self.0, self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn builder_requires_both_actions() {
        assert_eq!(
            Command::builder().undo(|| ()).build().unwrap_err(),
            Error::MissingAction("redo")
        );
        assert_eq!(
            Command::builder().build().unwrap_err(),
            Error::MissingAction("redo")
        );
        assert_eq!(
            Command::builder().redo(|| ()).build().unwrap_err(),
            Error::MissingAction("undo")
        );
    }

    #[test]
    fn builder_keeps_text() {
        let command = Command::builder()
            .redo(|| ())
            .undo(|| ())
            .text("rename layer")
            .build()
            .unwrap();
        assert_eq!(command.text(), Some("rename layer"));
    }

    #[test]
    fn pair_into_command() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let mut command = (move || a.borrow_mut().push("redo"), move || {
            b.borrow_mut().push("undo")
        })
            .into_command()
            .unwrap();
        command.redo();
        command.undo();
        assert_eq!(*log.borrow(), ["redo", "undo"]);
        assert_eq!(command.text(), None);
    }
}

use crate::{Action, Command};

/// A sequence of commands undone and redone as one.
///
/// Redo replays the commands in the order they were added,
/// undo replays them in reverse.
///
/// # Examples
/// ```
/// # use std::{cell::RefCell, rc::Rc};
/// # use undo_stack::{Action, Chain, Command};
/// let s = Rc::new(RefCell::new(String::new()));
/// let push = |c| {
///     let (a, b) = (s.clone(), s.clone());
///     Command::new(move || a.borrow_mut().push(c), move || { b.borrow_mut().pop(); })
/// };
/// let mut chain = Chain::from(vec![push('a'), push('b')]);
/// chain.redo();
/// assert_eq!(*s.borrow(), "ab");
/// chain.undo();
/// assert_eq!(*s.borrow(), "");
/// ```
#[derive(Debug, Default)]
pub struct Chain {
    commands: Vec<Command>,
}

impl Chain {
    /// Returns an empty chain.
    pub const fn new() -> Chain {
        Chain {
            commands: Vec::new(),
        }
    }

    /// Appends a command to the end of the chain.
    pub fn join(mut self, command: Command) -> Chain {
        self.commands.push(command);
        self
    }

    /// Returns the number of commands in the chain.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the chain has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Action for Chain {
    fn redo(&mut self) {
        for command in &mut self.commands {
            command.redo();
        }
    }

    fn undo(&mut self) {
        for command in self.commands.iter_mut().rev() {
            command.undo();
        }
    }
}

impl From<Vec<Command>> for Chain {
    fn from(commands: Vec<Command>) -> Self {
        Chain { commands }
    }
}

impl FromIterator<Command> for Chain {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Chain {
            commands: iter.into_iter().collect(),
        }
    }
}

use crate::format::Format;
use crate::{Entry, UndoStack};
use std::fmt::{self, Write};

/// Configurable display formatting for the [`UndoStack`].
///
/// Entries are listed newest first, each with its position.
/// Position `0` is the state before the first entry.
///
/// # Examples
/// ```
/// # use undo_stack::{Command, UndoStack};
/// let mut stack = UndoStack::new();
/// stack.record(Command::new(|| (), || ()).with_text("add a")).unwrap();
/// stack.record(Command::new(|| (), || ()).with_text("add b")).unwrap();
/// stack.undo();
/// let mut display = stack.display();
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// # #[cfg(not(feature = "chrono"))]
/// assert_eq!(display.detailed(false).to_string(), "2 add b\n1 [HEAD] add a\n0\n");
/// ```
pub struct Display<'a, S> {
    stack: &'a UndoStack<S>,
    format: Format,
}

impl<S> Display<'_, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the current position in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }

    fn fmt_list(&self, f: &mut fmt::Formatter, index: usize, entry: Option<&Entry>) -> fmt::Result {
        self.format.index(f, index)?;

        #[cfg(feature = "chrono")]
        if let Some(entry) = entry {
            if self.format.detailed {
                self.format.timestamp(f, &entry.created_at())?;
            }
        }

        self.format.labels(f, index, self.stack.index)?;

        match entry {
            Some(entry) if self.format.detailed => {
                f.write_char('\n')?;
                self.format.message(f, entry)
            }
            Some(entry) => {
                self.format.message(f, entry)?;
                f.write_char('\n')
            }
            None => f.write_char('\n'),
        }
    }
}

impl<'a, S> From<&'a UndoStack<S>> for Display<'a, S> {
    fn from(stack: &'a UndoStack<S>) -> Self {
        Display {
            stack,
            format: Format::default(),
        }
    }
}

impl<S> fmt::Display for Display<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.stack.entries.iter().enumerate().rev() {
            self.fmt_list(f, i + 1, Some(entry))?;
        }
        self.fmt_list(f, 0, None)
    }
}

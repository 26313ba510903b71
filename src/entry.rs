use crate::{Action, Command};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use std::fmt::{self, Display, Formatter};

/// Wrapper around a command that contains additional metadata.
#[derive(Debug)]
pub struct Entry {
    command: Command,
    #[cfg(feature = "chrono")]
    created_at: DateTime<Utc>,
}

impl Entry {
    /// Returns the command of the entry.
    pub fn get(&self) -> &Command {
        &self.command
    }

    /// Returns the time the entry was recorded.
    #[cfg(feature = "chrono")]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl From<Command> for Entry {
    fn from(command: Command) -> Self {
        Entry {
            command,
            #[cfg(feature = "chrono")]
            created_at: Utc::now(),
        }
    }
}

impl Action for Entry {
    fn redo(&mut self) {
        self.command.redo()
    }

    fn undo(&mut self) {
        self.command.undo()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.command.text().unwrap_or_default())
    }
}

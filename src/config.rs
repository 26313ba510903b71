#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default maximum number of entries in a stack.
pub const DEFAULT_LIMIT: usize = 100;

/// Options used when building an [`UndoStack`](crate::UndoStack).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
/// ```
/// # use undo_stack::{Config, UndoStack};
/// let config = Config {
///     limit: 10,
///     ..Config::default()
/// };
/// let stack = UndoStack::from_config(config).unwrap();
/// assert_eq!(stack.limit(), 10);
/// assert!(stack.has_transactions());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Config {
    /// Maximum number of entries kept, the oldest are dropped first.
    pub limit: usize,
    /// Whether the stack supports transactions.
    pub use_transactions: bool,
    /// Whether status messages are logged at the debug level.
    pub debug: bool,
    /// Whether [`UndoStack::handle_key`](crate::UndoStack::handle_key) reacts to key events.
    pub bind_hot_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limit: DEFAULT_LIMIT,
            use_transactions: true,
            debug: false,
            bind_hot_keys: false,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{Config, DEFAULT_LIMIT};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(
            config,
            Config {
                limit: 5,
                ..Config::default()
            }
        );

        let config: Config = serde_json::from_str(r#"{"debug": true}"#).unwrap();
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert!(config.debug);
        assert!(config.use_transactions);
        assert!(!config.bind_hot_keys);
    }
}

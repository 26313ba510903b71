/// Errors returned when the stack is given something it can not use.
///
/// None of these leave the stack in a changed state.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A command was built without one of its two actions.
    #[error("command is missing its `{0}` action")]
    MissingAction(&'static str),
    /// The limit must be a positive number.
    #[error("limit must be a positive number, got {0}")]
    InvalidLimit(usize),
    /// A transaction was opened while another one was still in progress.
    ///
    /// Transactions do not nest, the open transaction keeps collecting commands.
    #[error("a transaction is already in progress")]
    TransactionInProgress,
}

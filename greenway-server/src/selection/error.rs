use thiserror::Error;

use crate::domain::ModeId;

/// A selection operation that is not valid in the current state.
///
/// The session is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no route for mode {0}")]
    UnknownMode(ModeId),

    #[error("a confirmation prompt is open; continue or choose a different mode first")]
    ConfirmationPending,

    #[error("no confirmation prompt is open")]
    NoPendingConfirmation,

    #[error("passenger count {0} is outside 1..=8")]
    PassengersOutOfRange(u8),

    #[error("carpooling can only be changed while driving is selected")]
    NotDriving,
}

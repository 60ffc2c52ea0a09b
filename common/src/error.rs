use derive_more::{Display, Error};

use crate::peg::Peg;

/// Errors raised by the puzzle model, the solver and the replay.
///
/// Both kinds are precondition violations local to the call that triggered
/// them. Nothing is retried and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HanoiError {
    /// An argument was outside of what the operation accepts, e.g. a puzzle
    /// with zero disks or a move from a peg onto itself.
    #[display("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// A move was requested from a peg that holds no disks.
    #[display("peg {peg} has no disk to move")]
    EmptySource { peg: Peg },
}

impl HanoiError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        HanoiError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

use thiserror::Error;

use crate::engine::session::Phase;

/// A gameplay request the rules reject without ending the game.
/// Note the empty-group reveal is *not* here: by rule that is a loss,
/// reported as a normal unsuccessful result, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("no card is in flight; reveal one before placing")]
    NoCardInFlight,
}

/// The driving layer called operations out of their required sequence.
/// These indicate a desynchronized caller and are surfaced loudly instead
/// of being folded into game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("a card is already in flight; place it before revealing again")]
    CardAlreadyInFlight,
    #[error("operation requires the {expected:?} phase but the session is in {actual:?}")]
    PhaseMismatch { expected: Phase, actual: Phase },
    #[error("group {0} does not exist")]
    UnknownGroup(u8),
    #[error("the opening reveal must come from the center group")]
    OpeningRevealNotCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

use crate::Discrete;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// Caller passed an action outside the action space.
    #[error("Invalid action {action}: expected a value in 0..{n_a}.")]
    InvalidAction { action: Discrete, n_a: usize },

    /// Step was called without an active episode, either before the first
    /// reset or after a terminal transition.
    #[error("No active episode: call reset before stepping.")]
    InvalidState,
}

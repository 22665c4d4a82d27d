use std::io;

use thiserror::Error;

/// Failures the application shell can encounter.
///
/// The game core itself has no error taxonomy: invalid or out-of-context
/// commands are silent no-ops, and a collision is a state transition.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("unknown theme {name:?}, available: {available}")]
    UnknownTheme { name: String, available: String },
}

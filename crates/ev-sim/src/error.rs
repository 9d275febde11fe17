//! Simulation-subsystem error type.

use thiserror::Error;

use ev_graph::GraphError;

/// Errors produced by `ev-sim`.
#[derive(Debug, Error)]
pub enum SimError {
    /// The simulated trip blew past the deadline.  Expected and frequent:
    /// the evaluator drops the candidate route and moves on.
    #[error("cannot arrive in time: deadline {deadline}, days travelled {days}")]
    DeadlineExceeded { days: u32, deadline: u32 },

    /// A sighting file names a site the network does not contain.
    #[error("sighting at unknown site {0:?}")]
    UnknownSiteName(String),

    #[error("sighting parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;

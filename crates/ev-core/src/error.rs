//! Base error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `SimError`) and
//! either convert into `EvError` via `From` impls or stay separate.  Both
//! patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `ev-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ev-*` crates.
pub type EvResult<T> = Result<T, EvError>;

//! Graph-subsystem error type.

use thiserror::Error;

use ev_core::SiteId;

/// Errors produced by `ev-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("site {0} not found in network")]
    UnknownSite(SiteId),

    #[error("no direct route between {from} and {to}")]
    NoDirectRoute { from: SiteId, to: SiteId },

    #[error("no distance record of {remaining} days at {site}")]
    NoMatchingRecord { site: SiteId, remaining: u32 },

    #[error("route {from}-{to} must take at least one day")]
    InvalidLegDays { from: String, to: String },
}

pub type GraphResult<T> = Result<T, GraphError>;

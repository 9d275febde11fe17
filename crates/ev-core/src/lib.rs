//! `ev-core` — foundational types for the evasion odds planner.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `SiteId`                                          |
//! | [`mission`] | `MissionParams`, `DeadlineRule`                   |
//! | [`error`]   | `EvError`, `EvResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod ids;
pub mod mission;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EvError, EvResult};
pub use ids::SiteId;
pub use mission::{DeadlineRule, MissionParams};

//! `ev-sim` — trip simulation and outcome evaluation.
//!
//! # Pipeline
//!
//! ```text
//! TravelNetwork ─→ DistanceTable ─→ for each candidate destination total:
//!   reconstruct_route ─→ WaitStrategy::plan (simulate) ─→ TripOutcome
//! ─→ best_success_odds: max success percentage, or 0 with no survivors
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`schedule`]  | `Sighting`, `SightingSchedule`, CSV loader            |
//! | [`trip`]      | `TripOutcome`, `simulate_trip`                        |
//! | [`wait`]      | `WaitStrategy` trait, `GreedyWait`                    |
//! | [`evaluator`] | `best_success_odds`                                   |
//! | [`odds`]      | `capture_probability`, `success_percentage`           |
//! | [`error`]     | `SimError`, `SimResult<T>`                            |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates candidate routes on Rayon's thread pool.     |

pub mod error;
pub mod evaluator;
pub mod odds;
pub mod schedule;
pub mod trip;
pub mod wait;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use evaluator::best_success_odds;
pub use odds::{capture_probability, success_percentage};
pub use schedule::{Sighting, SightingSchedule, load_sightings_csv, load_sightings_reader};
pub use trip::{TripOutcome, simulate_trip};
pub use wait::{GreedyWait, WaitStrategy};

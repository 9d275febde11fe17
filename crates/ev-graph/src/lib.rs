//! `ev-graph` — travel network, multi-path distances, and route recovery.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`network`]     | `TravelNetwork` (interned sites + adjacency), builder |
//! | [`table`]       | `DistanceTable`, `multi_path_distances`               |
//! | [`reconstruct`] | `reconstruct_route`                                   |
//! | [`error`]       | `GraphError`, `GraphResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.      |

pub mod error;
pub mod network;
pub mod reconstruct;
pub mod table;


pub use error::{GraphError, GraphResult};
pub use network::{Hop, TravelNetwork, TravelNetworkBuilder};
pub use reconstruct::reconstruct_route;
pub use table::{DistRecord, DistanceTable, SiteEntry, multi_path_distances};

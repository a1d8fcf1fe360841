//! `hd-core` — foundational types for the hard-disk event-chain samplers.
//!
//! This crate is a dependency of every other `hd-*` crate.  It intentionally
//! has no `hd-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `DiskId`                                                  |
//! | [`geometry`] | `SimBox` (periodic wrap / minimum image), `Axis`          |
//! | [`lattice`]  | `build_packed`, `build_crystal`                           |
//! | [`state`]    | `Configuration` — positions and velocities of all disks   |
//! | [`params`]   | `SystemParams`, `BoxShape`, `DiskSystem`, run configs     |
//! | [`rng`]      | `SimRng` (the single seeded random stream of a run)       |
//! | [`error`]    | `HdError`, `HdResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the parameter types.     |

pub mod error;
pub mod geometry;
pub mod ids;
pub mod lattice;
pub mod params;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HdError, HdResult};
pub use geometry::{Axis, SimBox};
pub use ids::DiskId;
pub use lattice::{build_crystal, build_packed};
pub use params::{BoxShape, ChainConfig, DiskSystem, MdConfig, SystemParams};
pub use rng::SimRng;
pub use state::Configuration;

/// Re-exported so downstream crates name the same vector type.
pub use glam::DVec2;

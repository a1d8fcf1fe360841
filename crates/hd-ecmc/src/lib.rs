//! `hd-ecmc` — per-variant physics of event-chain Monte Carlo.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`physics`]    | `ChainPhysics` trait                                      |
//! | [`newtonian`]  | `Newtonian`: every disk owns a velocity, elastic exchange |
//! | [`forward`]    | `Forward`: one chain velocity, stochastic redirection     |
//! | [`straight`]   | `Straight`: axis-aligned chains, pressure from lifting    |
//! | [`pressure`]   | `PressureAccumulator`, `PressureEstimate`                 |
//!
//! # Design notes
//!
//! The chain scheduler in `hd-sim` is generic over [`ChainPhysics`].  It owns
//! the loop (draw the active disk, seek the earliest event, advance, lift)
//! while each implementation decides how velocities are drawn at the start
//! of a chain, how contact times are solved and what happens at a contact.
//! The scheduler passes the run's single `SimRng` into every hook; physics
//! implementations never hold their own random stream.

pub mod forward;
pub mod newtonian;
pub mod physics;
pub mod pressure;
pub mod straight;


pub use forward::Forward;
pub use newtonian::Newtonian;
pub use physics::ChainPhysics;
pub use pressure::{PressureAccumulator, PressureEstimate};
pub use straight::Straight;

//! `hd-sim` — the event schedulers.
//!
//! # Event-chain loop
//!
//! ```text
//! for sample in 0..n_samples:
//!   for _ in 0..chains_per_sample:
//!     ① Start   — draw the active disk; ChainPhysics::begin_chain
//!     ② Seek    — earliest of every contact, horizon, chain end
//!     ③ Advance — move the active disk, wrap, consume chain time
//!     ④ Update  — pair: ChainPhysics::collide, hand over the active role
//!   emit sample (+ pressure for straight chains)
//! ```
//!
//! # Molecular-dynamics loop
//!
//! ```text
//! until n_samples sampling instants have passed:
//!   ① Seek    — earliest of every pair contact, horizon, sampling instant
//!   ② Advance — drift all disks, wrap
//!   ③ Update  — pair: elastic collision; sample: refresh v_max and emit
//! ```
//!
//! Both schedulers own their [`Configuration`][hd_core::Configuration] and
//! their single seeded random stream; a run is reproduced exactly by its
//! parameters and seed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hd_core::{BoxShape, ChainConfig, SystemParams};
//! use hd_ecmc::Newtonian;
//! use hd_sim::{NoopObserver, SimBuilder};
//!
//! let params = SystemParams::new(16, 16, 0.7, BoxShape::Square);
//! let mut sim = SimBuilder::from_params(&params)?
//!     .build_ecmc(Newtonian, ChainConfig::default())?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod ecmc;
pub mod error;
pub mod md;
pub mod observer;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use ecmc::EcmcSim;
pub use error::{SimError, SimResult};
pub use md::MdSim;
pub use observer::{NoopObserver, SampleObserver};
pub use stats::{ChainSummary, RunStats};

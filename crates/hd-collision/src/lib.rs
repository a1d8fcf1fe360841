//! `hd-collision` — the event primitives shared by every scheduler.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`solver`]  | closed-form contact times (pair, static target, unit speed, straight) |
//! | [`contact`] | contact normal and the equal-mass elastic exchange            |
//! | [`horizon`] | `Horizon` (cutoff distance → time), `SpeedBound`              |
//! | [`event`]   | tagged `Event`, `Scheduled`, `EarliestEvent` minimum search   |
//!
//! # Design notes
//!
//! Every solver reports "never" as `f64::INFINITY`.  [`EarliestEvent`]
//! silently drops such candidates, so a non-colliding pair, a pair at rest
//! relative to each other and a zero-speed horizon all fall out of the
//! minimum search without special cases in the schedulers.

pub mod contact;
pub mod event;
pub mod horizon;
pub mod solver;


pub use contact::{contact_normal, elastic_exchange};
pub use event::{EarliestEvent, Event, Scheduled};
pub use horizon::{Horizon, SpeedBound};
pub use solver::{
    StraightContact, active_collision_time, pair_collision_time, straight_chord,
    straight_collision, unit_collision_time,
};

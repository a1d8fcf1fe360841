//! The `ChainPhysics` trait: the per-variant part of an event chain.

use glam::DVec2;
use hd_collision::active_collision_time;
use hd_core::{Configuration, DiskId, DiskSystem, SimRng};

use crate::PressureEstimate;

/// Pluggable event-chain physics.
///
/// The scheduler calls the hooks in this order for every chain:
///
/// 1. [`begin_chain`][Self::begin_chain] once, right after drawing the
///    active disk;
/// 2. per step, [`velocity`][Self::velocity] and
///    [`collision_time`][Self::collision_time] against every other disk;
/// 3. [`collide`][Self::collide] when a pair event wins, after the active
///    disk has been moved to contact; the scheduler then hands the active
///    role to the target;
/// 4. [`end_chain`][Self::end_chain] once the chain time is used up.
///
/// Once per sample the scheduler asks for
/// [`take_pressure`][Self::take_pressure].
///
/// # Required methods
///
/// `name`, `begin_chain`, `velocity` and `collide`.  The contact time
/// defaults to the static-target solver with the current velocity.
pub trait ChainPhysics {
    /// Short lowercase identifier used in logs.
    fn name(&self) -> &'static str;

    /// Draw the chain's velocity (or velocities) for a new chain.
    fn begin_chain(&mut self, state: &mut Configuration, active: DiskId, rng: &mut SimRng);

    /// Velocity of the active disk.
    fn velocity(&self, state: &Configuration, active: DiskId) -> DVec2;

    /// Time until `active` touches `target`, `f64::INFINITY` if never.
    fn collision_time(
        &self,
        system: &DiskSystem,
        state:  &Configuration,
        active: DiskId,
        target: DiskId,
    ) -> f64 {
        active_collision_time(
            &system.sim_box,
            system.sigma,
            state.position(active),
            self.velocity(state, active),
            state.position(target),
        )
    }

    /// Update velocities for the contact of `active` with `target`.
    fn collide(
        &mut self,
        system: &DiskSystem,
        state:  &mut Configuration,
        active: DiskId,
        target: DiskId,
        rng:    &mut SimRng,
    );

    /// The chain ended after a total displacement time of `elapsed`.
    fn end_chain(&mut self, _elapsed: f64) {}

    /// Pressure measured since the previous call, if this variant measures it.
    ///
    /// Default: `None`.
    fn take_pressure(&mut self, _system: &DiskSystem, _disk_count: usize) -> Option<PressureEstimate> {
        None
    }
}

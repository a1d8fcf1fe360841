//! Straight event chains.
//!
//! A chain moves along `+x` or `+y` (drawn with equal probability) at unit
//! speed.  A contact only hands the active role to the target; the direction
//! never changes within a chain.  Each lifting contributes its contact chord
//! to the pressure estimate.

use glam::DVec2;
use hd_collision::{straight_chord, straight_collision};
use hd_core::{Axis, Configuration, DiskId, DiskSystem, SimRng};

use crate::{ChainPhysics, PressureAccumulator, PressureEstimate};

#[derive(Debug, Clone)]
pub struct Straight {
    axis:     Axis,
    pressure: PressureAccumulator,
}

impl Default for Straight {
    fn default() -> Self {
        Self { axis: Axis::X, pressure: PressureAccumulator::new() }
    }
}

impl Straight {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainPhysics for Straight {
    fn name(&self) -> &'static str {
        "straight"
    }

    fn begin_chain(&mut self, _state: &mut Configuration, _active: DiskId, rng: &mut SimRng) {
        self.axis = rng.axis();
    }

    #[inline]
    fn velocity(&self, _state: &Configuration, _active: DiskId) -> DVec2 {
        self.axis.unit()
    }

    #[inline]
    fn collision_time(
        &self,
        system: &DiskSystem,
        state:  &Configuration,
        active: DiskId,
        target: DiskId,
    ) -> f64 {
        straight_collision(
            &system.sim_box,
            system.sigma,
            state.position(active),
            state.position(target),
            self.axis,
        )
        .map_or(f64::INFINITY, |contact| contact.time)
    }

    fn collide(
        &mut self,
        system: &DiskSystem,
        state:  &mut Configuration,
        active: DiskId,
        target: DiskId,
        _rng:   &mut SimRng,
    ) {
        let chord = straight_chord(
            &system.sim_box,
            system.sigma,
            state.position(active),
            state.position(target),
            self.axis,
        );
        self.pressure.add_chord(self.axis, chord.unwrap_or(0.0));
    }

    fn end_chain(&mut self, elapsed: f64) {
        self.pressure.add_time(self.axis, elapsed);
    }

    fn take_pressure(&mut self, system: &DiskSystem, disk_count: usize) -> Option<PressureEstimate> {
        self.pressure.take(system, disk_count)
    }
}

//! Forward event chains.
//!
//! The chain carries a single unit velocity.  At a contact with normal `ê`
//! (from the active disk to the target) the new direction is
//!
//! ```text
//! v' = s_par · √(1 − p²) · ê + s_perp · p · ê⊥ ,   ê⊥ = (−ê_y, ê_x)
//! ```
//!
//! with `p` uniform in `[0, 1)`, `s_par = −1` iff `ê · v < 0` and
//! `s_perp = −1` iff `ê_y v_x − ê_x v_y < 0` (both `+1` otherwise).  The
//! target inherits `v'` and continues the chain.

use glam::DVec2;
use hd_collision::{contact_normal, unit_collision_time};
use hd_core::{Configuration, DiskId, DiskSystem, SimRng};

use crate::ChainPhysics;

#[derive(Debug, Clone, Copy)]
pub struct Forward {
    velocity: DVec2,
}

impl Default for Forward {
    fn default() -> Self {
        Self { velocity: DVec2::X }
    }
}

impl Forward {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction after a contact along `normal` with perpendicular share `perp`.
    pub fn redirect(velocity: DVec2, normal: DVec2, perp: f64) -> DVec2 {
        let sign_par = if normal.dot(velocity) < 0.0 { -1.0 } else { 1.0 };
        let sign_perp = if normal.y * velocity.x - normal.x * velocity.y < 0.0 { -1.0 } else { 1.0 };
        let par = (1.0 - perp * perp).sqrt();
        DVec2::new(
            normal.x * sign_par * par - normal.y * perp * sign_perp,
            normal.y * sign_par * par + normal.x * perp * sign_perp,
        )
    }
}

impl ChainPhysics for Forward {
    fn name(&self) -> &'static str {
        "forward"
    }

    fn begin_chain(&mut self, _state: &mut Configuration, _active: DiskId, rng: &mut SimRng) {
        self.velocity = rng.unit_vector();
    }

    #[inline]
    fn velocity(&self, _state: &Configuration, _active: DiskId) -> DVec2 {
        self.velocity
    }

    #[inline]
    fn collision_time(
        &self,
        system: &DiskSystem,
        state:  &Configuration,
        active: DiskId,
        target: DiskId,
    ) -> f64 {
        unit_collision_time(
            &system.sim_box,
            system.sigma,
            state.position(active),
            self.velocity,
            state.position(target),
        )
    }

    fn collide(
        &mut self,
        system: &DiskSystem,
        state:  &mut Configuration,
        active: DiskId,
        target: DiskId,
        rng:    &mut SimRng,
    ) {
        let normal = contact_normal(&system.sim_box, state.position(active), state.position(target));
        let perp: f64 = rng.random();
        self.velocity = Self::redirect(self.velocity, normal, perp);
    }
}

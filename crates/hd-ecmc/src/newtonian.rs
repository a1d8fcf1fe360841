//! Newtonian event chains.
//!
//! Every disk carries its own velocity in the [`Configuration`].  At the
//! start of a chain all velocities are redrawn as isotropic unit vectors; at
//! a contact the active disk and its target exchange the normal component of
//! their relative velocity, exactly like an elastic collision in MD, and the
//! target continues the chain with its own (updated) velocity.

use glam::DVec2;
use hd_collision::{contact_normal, elastic_exchange};
use hd_core::{Configuration, DiskId, DiskSystem, SimRng};

use crate::ChainPhysics;

#[derive(Debug, Default, Clone, Copy)]
pub struct Newtonian;

impl ChainPhysics for Newtonian {
    fn name(&self) -> &'static str {
        "newtonian"
    }

    fn begin_chain(&mut self, state: &mut Configuration, _active: DiskId, rng: &mut SimRng) {
        for v in &mut state.velocities {
            *v = rng.unit_vector();
        }
    }

    #[inline]
    fn velocity(&self, state: &Configuration, active: DiskId) -> DVec2 {
        state.velocity(active)
    }

    fn collide(
        &mut self,
        system: &DiskSystem,
        state:  &mut Configuration,
        active: DiskId,
        target: DiskId,
        _rng:   &mut SimRng,
    ) {
        let normal = contact_normal(&system.sim_box, state.position(active), state.position(target));
        let (va, vt) = elastic_exchange(normal, state.velocity(active), state.velocity(target));
        state.set_velocity(active, va);
        state.set_velocity(target, vt);
    }
}

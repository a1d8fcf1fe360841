//! Horizon / cutoff policy.
//!
//! Within a displacement of `min(lx, ly)/2 − 2σ` a disk cannot meet a second
//! periodic image of any other disk, so the minimum-image pair search stays
//! exact as long as no disk moves further than that between two searches.
//! The [`Horizon`] turns that distance into a time bound:
//!
//! | Scheduler     | Horizon time                 |
//! |---------------|------------------------------|
//! | event chains  | `distance / |v_active|`      |
//! | MD            | `distance / v_max / 2`       |
//!
//! In MD both partners of a pair move, hence the extra factor 2, and the
//! speed is an upper bound over all disks tracked by [`SpeedBound`].

use glam::DVec2;
use hd_core::{DiskSystem, HdError, HdResult};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Horizon {
    /// Safe displacement, `min(lx, ly)/2 − 2σ`.
    pub distance: f64,
}

impl Horizon {
    /// Fails if the box is too small for the minimum-image search to be safe.
    pub fn new(system: &DiskSystem) -> HdResult<Self> {
        let distance = system.horizon_distance();
        if !(distance > 0.0) {
            return Err(HdError::Config(format!(
                "box {} is too small for disks of radius {}: horizon distance {distance} is not positive",
                system.sim_box, system.sigma
            )));
        }
        Ok(Self { distance })
    }

    /// Time for a single disk moving at `speed` to exhaust the horizon.
    /// Infinite for a disk at rest.
    #[inline]
    pub fn chain_time(&self, speed: f64) -> f64 {
        if speed > 0.0 { self.distance / speed } else { f64::INFINITY }
    }

    /// Time after which two disks, each at most `max_speed` fast, may have
    /// closed the horizon between them.  Infinite when everything is at rest.
    #[inline]
    pub fn md_time(&self, max_speed: f64) -> f64 {
        if max_speed > 0.0 { self.distance / max_speed / 2.0 } else { f64::INFINITY }
    }
}

// ── SpeedBound ────────────────────────────────────────────────────────────────

/// Upper bound on the speed of any disk.
///
/// Collisions only raise the bound ([`observe`](Self::observe)); it is
/// recomputed exactly with [`refresh`](Self::refresh) at sampling instants so
/// that slack does not accumulate over a long run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpeedBound {
    value: f64,
}

impl SpeedBound {
    pub fn from_velocities(velocities: &[DVec2]) -> Self {
        let mut bound = Self::default();
        bound.refresh(velocities);
        bound
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Raise the bound to cover `velocity`.
    #[inline]
    pub fn observe(&mut self, velocity: DVec2) {
        self.value = self.value.max(velocity.length());
    }

    /// Recompute the exact maximum speed.
    pub fn refresh(&mut self, velocities: &[DVec2]) {
        self.value = velocities.iter().map(|v| v.length()).fold(0.0, f64::max);
    }
}

//! The seeded random stream of a run.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded once from the configured seed and
//! consumed in a fixed order by the scheduler (active disk, then chain
//! velocities, then collision draws).  Two runs with the same parameters and
//! seed therefore make identical draws and produce identical samples.
//! The stream is not thread-safe and is never shared.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Axis, DiskId};

/// The single random stream of a run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A value from the `Standard` distribution (`f64` is uniform in `[0, 1)`).
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Unit vector with its angle uniform in `[0, 2π)`.
    #[inline]
    pub fn unit_vector(&mut self) -> DVec2 {
        let theta = self.0.gen_range(0.0..TAU);
        DVec2::new(theta.cos(), theta.sin())
    }

    /// `X` or `Y` with equal probability.
    #[inline]
    pub fn axis(&mut self) -> Axis {
        if self.0.r#gen::<bool>() { Axis::Y } else { Axis::X }
    }

    /// Disk id uniform in `[0, n)`.  `n` must be positive.
    #[inline]
    pub fn disk(&mut self, n: usize) -> DiskId {
        DiskId(self.0.gen_range(0..n as u32))
    }
}

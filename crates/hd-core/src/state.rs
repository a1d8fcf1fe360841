//! Mutable simulation state.
//!
//! A [`Configuration`] is a struct-of-arrays indexed by [`DiskId`]: slot `i`
//! of every vector belongs to disk `i`.  Positions are kept wrapped into the
//! box by every mutating method.

use glam::DVec2;

use crate::{DiskId, DiskSystem, HdError, HdResult, SimBox};

/// Positions and velocities of all `N` disks.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub positions:  Vec<DVec2>,
    pub velocities: Vec<DVec2>,
}

impl Configuration {
    /// Disks at rest at `positions`.
    pub fn new(positions: Vec<DVec2>) -> Self {
        let velocities = vec![DVec2::ZERO; positions.len()];
        Self { positions, velocities }
    }

    pub fn with_velocities(positions: Vec<DVec2>, velocities: Vec<DVec2>) -> HdResult<Self> {
        if velocities.len() != positions.len() {
            return Err(HdError::LengthMismatch {
                expected: positions.len(),
                got:      velocities.len(),
                what:     "velocity",
            });
        }
        Ok(Self { positions, velocities })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, id: DiskId) -> DVec2 {
        self.positions[id.index()]
    }

    #[inline]
    pub fn velocity(&self, id: DiskId) -> DVec2 {
        self.velocities[id.index()]
    }

    #[inline]
    pub fn set_velocity(&mut self, id: DiskId, v: DVec2) {
        self.velocities[id.index()] = v;
    }

    /// Displace one disk and wrap it back into the box.
    #[inline]
    pub fn advance_disk(&mut self, id: DiskId, displacement: DVec2, sim_box: &SimBox) {
        let p = &mut self.positions[id.index()];
        *p = sim_box.wrap(*p + displacement);
    }

    /// Free flight of every disk for time `dt`.
    pub fn advance_all(&mut self, dt: f64, sim_box: &SimBox) {
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            *p = sim_box.wrap(*p + *v * dt);
        }
    }

    /// `½ Σ |vᵢ|²` (unit mass).
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocities.iter().map(|v| v.length_squared()).sum::<f64>()
    }

    /// `Σ vᵢ` (unit mass).
    pub fn momentum(&self) -> DVec2 {
        self.velocities.iter().copied().sum()
    }

    /// Largest speed over all disks, 0 for an empty configuration.
    pub fn max_speed(&self) -> f64 {
        self.velocities.iter().map(|v| v.length()).fold(0.0, f64::max)
    }

    /// Subtract the mean velocity so that the total momentum vanishes.
    pub fn remove_drift(&mut self) {
        if self.is_empty() {
            return;
        }
        let mean = self.momentum() / self.len() as f64;
        for v in &mut self.velocities {
            *v -= mean;
        }
    }

    /// Positions flattened as `x0, y0, x1, y1, …`.
    pub fn flat_positions(&self) -> Vec<f64> {
        self.positions.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// The first pair (in index order) closer than `2σ − slack`.
    pub fn first_overlap(&self, system: &DiskSystem, slack: f64) -> Option<(DiskId, DiskId, f64)> {
        first_overlap(&self.positions, system.sim_box, system.sigma, slack)
    }

    /// `Err(HdError::Overlap)` naming the first overlapping pair, if any.
    pub fn check_no_overlap(&self, system: &DiskSystem, slack: f64) -> HdResult<()> {
        match self.first_overlap(system, slack) {
            Some((a, b, distance)) => Err(HdError::Overlap { a, b, distance }),
            None => Ok(()),
        }
    }
}

/// O(N²) scan for a pair whose minimum-image distance is below `2σ − slack`.
pub fn first_overlap(
    positions: &[DVec2],
    sim_box:   SimBox,
    sigma:     f64,
    slack:     f64,
) -> Option<(DiskId, DiskId, f64)> {
    let limit = 2.0 * sigma - slack;
    for (i, &a) in positions.iter().enumerate() {
        for (j, &b) in positions.iter().enumerate().skip(i + 1) {
            let distance = sim_box.distance(a, b);
            if distance < limit {
                return Some((DiskId(i as u32), DiskId(j as u32), distance));
            }
        }
    }
    None
}

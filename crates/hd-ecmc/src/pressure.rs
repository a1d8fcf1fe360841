//! Pressure from straight event chains.
//!
//! During a sampling interval the accumulator collects, per axis, the total
//! chain time `Σt` and the sum `ΣΔ` of contact chords (the projection of the
//! contact vector on the direction of travel at each lifting).  With the
//! number density `ρ = N / (lx ly)` the reduced pressure is
//!
//! ```text
//! βP_axis = ρ (1 + ΣΔ_axis / Σt_axis)
//! βP      = ρ (1 + (ΣΔ_x + ΣΔ_y) / (Σt_x + Σt_y))
//! ```

use hd_core::{Axis, DiskSystem};

/// Reduced pressure `βP` measured over one sampling interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressureEstimate {
    /// Both axes combined.
    pub combined: f64,
    /// `None` if no chain ran along x during the interval.
    pub x:        Option<f64>,
    pub y:        Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressureAccumulator {
    chain_time: [f64; 2],
    chord:      [f64; 2],
}

impl PressureAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_time(&mut self, axis: Axis, time: f64) {
        self.chain_time[axis.index()] += time;
    }

    #[inline]
    pub fn add_chord(&mut self, axis: Axis, chord: f64) {
        self.chord[axis.index()] += chord;
    }

    /// Current estimate; `None` before any chain time was recorded.
    pub fn estimate(&self, system: &DiskSystem, disk_count: usize) -> Option<PressureEstimate> {
        let total_time: f64 = self.chain_time.iter().sum();
        if total_time <= 0.0 {
            return None;
        }
        let density = disk_count as f64 / system.sim_box.area();
        let total_chord: f64 = self.chord.iter().sum();
        let per_axis = |axis: Axis| {
            let t = self.chain_time[axis.index()];
            (t > 0.0).then(|| density * (1.0 + self.chord[axis.index()] / t))
        };
        Some(PressureEstimate {
            combined: density * (1.0 + total_chord / total_time),
            x:        per_axis(Axis::X),
            y:        per_axis(Axis::Y),
        })
    }

    /// Estimate and start a new interval.
    pub fn take(&mut self, system: &DiskSystem, disk_count: usize) -> Option<PressureEstimate> {
        let estimate = self.estimate(system, disk_count);
        *self = Self::default();
        estimate
    }
}

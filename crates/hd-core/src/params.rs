//! System and run parameters.
//!
//! # Box convention
//!
//! The box area is always 1.  Its aspect ratio `a = ly / lx` is chosen by
//! [`BoxShape`]:
//!
//! | Shape       | Aspect ratio        | Initial layout     |
//! |-------------|---------------------|--------------------|
//! | `Square`    | 1                   | [`build_packed`]   |
//! | `Rectangle` | √3/2                | [`build_packed`]   |
//! | `Crystal`   | √3/2 · n_y / n_x    | [`build_crystal`]  |
//!
//! and the box is `(1/√a, √a)`.  The disk radius follows from the packing
//! fraction: `σ = √(η / (N π))`.
//!
//! [`build_packed`]: crate::build_packed
//! [`build_crystal`]: crate::build_crystal

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::{HdError, HdResult, SimBox, build_crystal, build_packed};

/// Densest packing fraction of equal disks in the plane, `π / (2√3)`.
pub const MAX_PACKING_FRACTION: f64 = 0.906_899_682_117_108_9;

// ── BoxShape ──────────────────────────────────────────────────────────────────

/// Box aspect-ratio selector.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoxShape {
    Square,
    Rectangle,
    /// Aspect ratio compatible with an `n_x × n_y` triangular lattice.
    Crystal,
}

impl fmt::Display for BoxShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoxShape::Square    => "square",
            BoxShape::Rectangle => "rectangle",
            BoxShape::Crystal   => "crystal",
        };
        f.write_str(s)
    }
}

impl FromStr for BoxShape {
    type Err = HdError;

    fn from_str(s: &str) -> HdResult<Self> {
        match s {
            "square"    => Ok(BoxShape::Square),
            "rectangle" => Ok(BoxShape::Rectangle),
            "crystal"   => Ok(BoxShape::Crystal),
            other       => Err(HdError::Config(format!("unknown box shape '{other}'"))),
        }
    }
}

// ── DiskSystem ────────────────────────────────────────────────────────────────

/// The fixed geometry of a run: the periodic box and the common disk radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskSystem {
    pub sim_box: SimBox,
    /// Disk radius σ.  Two disks touch at center distance `2σ`.
    pub sigma: f64,
}

impl DiskSystem {
    pub fn new(sim_box: SimBox, sigma: f64) -> HdResult<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(HdError::Config(format!("disk radius must be positive, got {sigma}")));
        }
        Ok(Self { sim_box, sigma })
    }

    /// Center distance at contact, `2σ`.
    #[inline]
    pub fn contact_distance(&self) -> f64 {
        2.0 * self.sigma
    }

    /// Largest displacement around a disk that cannot reach a periodic image
    /// of any other disk: `min(lx, ly) / 2 − 2σ`.
    #[inline]
    pub fn horizon_distance(&self) -> f64 {
        self.sim_box.min_side() / 2.0 - self.contact_distance()
    }

    /// `η = N π σ² / (lx ly)`.
    pub fn packing_fraction(&self, disk_count: usize) -> f64 {
        disk_count as f64 * PI * self.sigma * self.sigma / self.sim_box.area()
    }
}

// ── SystemParams ──────────────────────────────────────────────────────────────

/// Physical parameters of a run as supplied by the operator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemParams {
    /// Disks per lattice row.
    pub n_x: usize,
    /// Lattice rows.
    pub n_y: usize,
    /// Packing fraction η.
    pub eta: f64,
    pub shape: BoxShape,
}

impl SystemParams {
    pub fn new(n_x: usize, n_y: usize, eta: f64, shape: BoxShape) -> Self {
        Self { n_x, n_y, eta, shape }
    }

    #[inline]
    pub fn disk_count(&self) -> usize {
        self.n_x * self.n_y
    }

    pub fn validate(&self) -> HdResult<()> {
        if self.disk_count() == 0 {
            return Err(HdError::Config("n_x and n_y must both be at least 1".into()));
        }
        if !(self.eta > 0.0 && self.eta <= MAX_PACKING_FRACTION) {
            return Err(HdError::Config(format!(
                "packing fraction must lie in (0, {MAX_PACKING_FRACTION}], got {}",
                self.eta
            )));
        }
        Ok(())
    }

    /// `ly / lx` for the selected shape.
    pub fn aspect_ratio(&self) -> f64 {
        let hex = 3.0_f64.sqrt() / 2.0;
        match self.shape {
            BoxShape::Square    => 1.0,
            BoxShape::Rectangle => hex,
            BoxShape::Crystal   => hex * self.n_y as f64 / self.n_x as f64,
        }
    }

    /// Unit-area box with the selected aspect ratio.
    pub fn sim_box(&self) -> HdResult<SimBox> {
        let a = self.aspect_ratio();
        SimBox::new(1.0 / a.sqrt(), a.sqrt())
    }

    /// `σ = √(η / (N π))` (the box area is 1).
    pub fn sigma(&self) -> f64 {
        (self.eta / (self.disk_count() as f64 * PI)).sqrt()
    }

    /// Validate and derive the box and radius.
    pub fn system(&self) -> HdResult<DiskSystem> {
        self.validate()?;
        DiskSystem::new(self.sim_box()?, self.sigma())
    }

    /// Deterministic initial positions for this shape.
    ///
    /// Fails with [`HdError::DoesNotFit`] if the layout cannot hold all disks.
    pub fn initial_positions(&self) -> HdResult<Vec<DVec2>> {
        let system = self.system()?;
        match self.shape {
            BoxShape::Square | BoxShape::Rectangle => {
                build_packed(self.disk_count(), system.sigma, system.sim_box)
            }
            BoxShape::Crystal => build_crystal(self.n_x, self.n_y, system.sigma, system.sim_box),
        }
    }
}

// ── Run configurations ────────────────────────────────────────────────────────

/// Schedule of an event-chain run.
///
/// `n_samples * chains_per_sample` chains are run in total; a sample is
/// emitted after every `chains_per_sample` chains.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainConfig {
    /// Duration of one chain (total displacement time of the active role).
    pub chain_time: f64,
    pub chains_per_sample: u64,
    pub n_samples: u64,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for ChainConfig {
    /// Newtonian and forward defaults: one chain of time 80 per sample.
    fn default() -> Self {
        Self {
            chain_time:        80.0,
            chains_per_sample: 1,
            n_samples:         1000,
            seed:              1,
        }
    }
}

impl ChainConfig {
    /// Straight-chain defaults: 1000 short chains of time 0.24 per sample.
    pub fn straight_default() -> Self {
        Self {
            chain_time:        0.24,
            chains_per_sample: 1000,
            ..Self::default()
        }
    }

    /// Total number of chains in the run.
    #[inline]
    pub fn total_chains(&self) -> u64 {
        self.n_samples * self.chains_per_sample
    }

    pub fn validate(&self) -> HdResult<()> {
        if !(self.chain_time.is_finite() && self.chain_time > 0.0) {
            return Err(HdError::Config(format!(
                "chain time must be finite and positive, got {}",
                self.chain_time
            )));
        }
        if self.chains_per_sample == 0 {
            return Err(HdError::Config("chains per sample must be at least 1".into()));
        }
        Ok(())
    }
}

/// Schedule of an event-driven molecular-dynamics run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MdConfig {
    /// Physical time between two samples.
    pub sample_time: f64,
    pub n_samples: u64,
    /// Seed of the stream that draws the initial velocities.
    pub seed: u64,
}

impl Default for MdConfig {
    fn default() -> Self {
        Self {
            sample_time: 15.0,
            n_samples:   1000,
            seed:        1,
        }
    }
}

impl MdConfig {
    pub fn validate(&self) -> HdResult<()> {
        if !(self.sample_time.is_finite() && self.sample_time > 0.0) {
            return Err(HdError::Config(format!(
                "sample time must be finite and positive, got {}",
                self.sample_time
            )));
        }
        Ok(())
    }
}

//! Periodic box geometry.
//!
//! The simulation domain is the rectangle `[0, lx) × [0, ly)` with periodic
//! boundary conditions on both axes.  Positions are always stored wrapped into
//! that rectangle; every distance between two disks is measured between the
//! nearest periodic images (the *minimum image*).

use std::fmt;

use glam::DVec2;

use crate::{HdError, HdResult};

// ── Axis ──────────────────────────────────────────────────────────────────────

/// One of the two box axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The perpendicular axis.
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Unit vector pointing along `+self`.
    #[inline]
    pub fn unit(self) -> DVec2 {
        match self {
            Axis::X => DVec2::X,
            Axis::Y => DVec2::Y,
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn of(self, v: DVec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

// ── SimBox ────────────────────────────────────────────────────────────────────

/// Side lengths of the periodic simulation box.  Immutable for a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimBox {
    pub lx: f64,
    pub ly: f64,
}

impl SimBox {
    /// Create a box, rejecting non-finite or non-positive sides.
    pub fn new(lx: f64, ly: f64) -> HdResult<Self> {
        if !(lx.is_finite() && lx > 0.0 && ly.is_finite() && ly > 0.0) {
            return Err(HdError::Config(format!(
                "box sides must be finite and positive, got {lx} x {ly}"
            )));
        }
        Ok(Self { lx, ly })
    }

    /// Unit square box.
    pub fn unit() -> Self {
        Self { lx: 1.0, ly: 1.0 }
    }

    #[inline]
    pub fn side(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.lx,
            Axis::Y => self.ly,
        }
    }

    #[inline]
    pub fn min_side(&self) -> f64 {
        self.lx.min(self.ly)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.lx * self.ly
    }

    /// Reduce each coordinate modulo the box side, result in `[0, side)`.
    #[inline]
    pub fn wrap(&self, p: DVec2) -> DVec2 {
        DVec2::new(wrap_coord(p.x, self.lx), wrap_coord(p.y, self.ly))
    }

    /// Minimum-image vector `a − b`.
    ///
    /// The raw difference is wrapped into the box, then any component larger
    /// than half the side is shifted by one period.  The result is the
    /// shortest of all periodic images of `a − b`.
    #[inline]
    pub fn separation(&self, a: DVec2, b: DVec2) -> DVec2 {
        let d = self.wrap(a - b);
        DVec2::new(
            if d.x > self.lx / 2.0 { d.x - self.lx } else { d.x },
            if d.y > self.ly / 2.0 { d.y - self.ly } else { d.y },
        )
    }

    /// Minimum-image center distance between `a` and `b`.
    #[inline]
    pub fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        self.separation(a, b).length()
    }

    /// `true` if `p` lies inside `[0, lx) × [0, ly)`.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..self.lx).contains(&p.x) && (0.0..self.ly).contains(&p.y)
    }
}

impl fmt::Display for SimBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} x {:.6}", self.lx, self.ly)
    }
}

/// `x mod side` in `[0, side)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly `side`; those fold
/// back to zero.
#[inline]
fn wrap_coord(x: f64, side: f64) -> f64 {
    let r = x.rem_euclid(side);
    if r >= side { 0.0 } else { r }
}

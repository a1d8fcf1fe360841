//! Closed-form contact times.
//!
//! For a minimum-image separation `Δx` and relative velocity `Δv` the two
//! disks touch when `|Δx + Δv t| = 2σ`.  With `s = Δv·Δx` and
//!
//! ```text
//! Υ = s² − |Δv|² (|Δx|² − 4σ²)
//! ```
//!
//! a future contact exists iff `Υ > 0` and `s < 0`, and the earlier root is
//! `t = −(s + √Υ) / |Δv|²`.  Anything else is reported as `f64::INFINITY`.
//!
//! A slightly overlapping pair (round-off) that is still approaching yields
//! a small negative root; schedulers clamp their step at zero.

use glam::DVec2;
use hd_core::{Axis, SimBox};

/// Earliest contact of two moving disks.
///
/// `pa, va` belong to the first disk, `pb, vb` to the second.  Symmetric in
/// the exchange of the two disks.
#[inline]
pub fn pair_collision_time(
    sim_box: &SimBox,
    sigma:   f64,
    pa:      DVec2,
    va:      DVec2,
    pb:      DVec2,
    vb:      DVec2,
) -> f64 {
    let dx = sim_box.separation(pa, pb);
    let dv = va - vb;
    let dv2 = dv.length_squared();
    if dv2 == 0.0 {
        return f64::INFINITY;
    }
    match discriminant(dx, dv, dv2, sigma) {
        Some((s, upsilon)) => -(s + upsilon.sqrt()) / dv2,
        None => f64::INFINITY,
    }
}

/// Earliest contact of a disk moving with `velocity` and a target at rest.
#[inline]
pub fn active_collision_time(
    sim_box:  &SimBox,
    sigma:    f64,
    active:   DVec2,
    velocity: DVec2,
    target:   DVec2,
) -> f64 {
    pair_collision_time(sim_box, sigma, active, velocity, target, DVec2::ZERO)
}

/// [`active_collision_time`] for a unit `velocity`; skips the division.
#[inline]
pub fn unit_collision_time(
    sim_box:  &SimBox,
    sigma:    f64,
    active:   DVec2,
    velocity: DVec2,
    target:   DVec2,
) -> f64 {
    let dx = sim_box.separation(active, target);
    match discriminant(dx, velocity, 1.0, sigma) {
        Some((s, upsilon)) => -(s + upsilon.sqrt()),
        None => f64::INFINITY,
    }
}

/// `(s, Υ)` when a future contact exists.
#[inline]
fn discriminant(dx: DVec2, dv: DVec2, dv2: f64, sigma: f64) -> Option<(f64, f64)> {
    let s = dv.dot(dx);
    let upsilon = s * s - dv2 * (dx.length_squared() - 4.0 * sigma * sigma);
    (upsilon > 0.0 && s < 0.0).then_some((s, upsilon))
}

// ── Straight chains ───────────────────────────────────────────────────────────

/// Contact of a disk sliding along `+axis` at unit speed with a static target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StraightContact {
    /// Distance (= time) to contact, never negative.
    pub time:  f64,
    /// Projection of the contact vector on the direction of travel,
    /// `√(4σ² − perp²)`.
    pub chord: f64,
}

/// Contact of an active disk moving along `+axis` with `target`, if any.
///
/// The perpendicular offset is measured as a minimum image; the distance
/// along the axis is the forward periodic distance in `[0, side)`.  A target
/// whose perpendicular offset is at least `2σ` is never hit, nor is a target
/// at zero forward distance.
pub fn straight_collision(
    sim_box: &SimBox,
    sigma:   f64,
    active:  DVec2,
    target:  DVec2,
    axis:    Axis,
) -> Option<StraightContact> {
    let chord = straight_chord(sim_box, sigma, active, target, axis)?;

    let mut para = axis.of(target) - axis.of(active);
    if para < 0.0 {
        para += sim_box.side(axis);
    }
    if para == 0.0 {
        return None;
    }
    Some(StraightContact { time: (para - chord).max(0.0), chord })
}

/// `√(4σ² − perp²)` for the perpendicular (minimum-image) offset `perp` of
/// `target` from the line through `active` along `axis`; `None` if the offset
/// is at least `2σ`.
///
/// Moving along `axis` leaves the offset unchanged, so the value is the same
/// before the move and at contact.
#[inline]
pub fn straight_chord(
    sim_box: &SimBox,
    sigma:   f64,
    active:  DVec2,
    target:  DVec2,
    axis:    Axis,
) -> Option<f64> {
    let contact = 2.0 * sigma;
    let perp = axis.other().of(sim_box.separation(target, active)).abs();
    (perp < contact).then(|| (contact * contact - perp * perp).sqrt())
}

//! Geometry and momentum exchange at the moment of contact.

use glam::DVec2;
use hd_core::SimBox;

/// Unit vector pointing from `from` to `to` along the line of centers.
///
/// At contact the separation has length `2σ`; normalizing by the measured
/// length keeps the result unit even with round-off in the contact distance.
/// Coincident centers give the zero vector.
#[inline]
pub fn contact_normal(sim_box: &SimBox, from: DVec2, to: DVec2) -> DVec2 {
    sim_box.separation(to, from).normalize_or_zero()
}

/// Equal-mass elastic collision along `normal`.
///
/// The component of the relative velocity `vb − va` along `normal` is moved
/// from `b` to `a`.  Total momentum and kinetic energy are conserved.
#[inline]
pub fn elastic_exchange(normal: DVec2, va: DVec2, vb: DVec2) -> (DVec2, DVec2) {
    let transfer = normal * (vb - va).dot(normal);
    (va + transfer, vb - transfer)
}

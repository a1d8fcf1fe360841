//! Deterministic initial configurations.
//!
//! Both builders are pure functions of their arguments.  They either return
//! `N` wrapped positions with every minimum-image center distance at least
//! `2σ`, or [`HdError::DoesNotFit`]; a builder never hands back an
//! overlapping configuration.

use glam::DVec2;

use crate::{HdError, HdResult, SimBox, state};

/// Lattice spacing of [`build_packed`] in units of σ.
const PACKED_SPACING: f64 = 2.05;

/// Relative slack allowed on the contact distance when checking the
/// finished layout; a crystal at close packing touches exactly.
pub const CONTACT_TOLERANCE: f64 = 1e-9;

/// Fill the box row by row with a triangular lattice of spacing `2.05σ`.
///
/// The first disk sits at the origin.  A row is closed when the next disk
/// would come too close to the right wall; the next row is shifted up by
/// `2.05σ·√3/2` and alternately indented by half a spacing.
pub fn build_packed(n: usize, sigma: f64, sim_box: SimBox) -> HdResult<Vec<DVec2>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let d = PACKED_SPACING * sigma;
    let row_height = d * 3.0_f64.sqrt() / 2.0;

    let mut positions = Vec::with_capacity(n);
    positions.push(DVec2::ZERO);
    let mut filling_low = true;

    for _ in 1..n {
        let prev = positions[positions.len() - 1];
        let step = if filling_low && prev.x + d + 2.0 * sigma >= sim_box.lx {
            filling_low = false;
            DVec2::new(d / 2.0 - prev.x, row_height)
        } else if !filling_low && prev.x + d + sigma >= sim_box.lx {
            filling_low = true;
            DVec2::new(-prev.x, row_height)
        } else {
            DVec2::new(d, 0.0)
        };
        positions.push(prev + step);
    }

    if positions[n - 1].y >= sim_box.ly {
        return Err(does_not_fit(n, sigma, sim_box));
    }
    verify(positions, sigma, sim_box)
}

/// Place `n_x × n_y` disks on a triangular lattice commensurate with the box.
///
/// Row `i` sits at `y = i·ly/n_y`; odd rows are shifted right by half the
/// in-row spacing `lx/n_x`.  Disk `i·n_x + j` is the `j`-th disk of row `i`.
pub fn build_crystal(n_x: usize, n_y: usize, sigma: f64, sim_box: SimBox) -> HdResult<Vec<DVec2>> {
    let n = n_x * n_y;
    if n == 0 {
        return Ok(Vec::new());
    }
    let dx = sim_box.lx / n_x as f64;
    if dx < 2.0 * sigma * (1.0 - CONTACT_TOLERANCE) {
        return Err(does_not_fit(n, sigma, sim_box));
    }
    let dy = sim_box.ly / n_y as f64;

    let positions = (0..n_y)
        .flat_map(|i| {
            let shift = if i % 2 == 1 { 0.5 * dx } else { 0.0 };
            (0..n_x).map(move |j| sim_box.wrap(DVec2::new(dx * j as f64 + shift, dy * i as f64)))
        })
        .collect();
    verify(positions, sigma, sim_box)
}

fn verify(positions: Vec<DVec2>, sigma: f64, sim_box: SimBox) -> HdResult<Vec<DVec2>> {
    let positions: Vec<DVec2> = positions.into_iter().map(|p| sim_box.wrap(p)).collect();
    let slack = CONTACT_TOLERANCE * 2.0 * sigma;
    match state::first_overlap(&positions, sim_box, sigma, slack) {
        Some(_) => Err(does_not_fit(positions.len(), sigma, sim_box)),
        None => Ok(positions),
    }
}

fn does_not_fit(count: usize, sigma: f64, sim_box: SimBox) -> HdError {
    HdError::DoesNotFit { count, sigma, lx: sim_box.lx, ly: sim_box.ly }
}

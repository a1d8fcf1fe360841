//! Plain data row types written by the writers.

use hd_core::Configuration;
use hd_ecmc::PressureEstimate;

/// Disk centers at one sampling instant, flattened as `x0, y0, x1, y1, …`
/// in disk-index order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub sample:    u64,
    pub positions: Vec<f64>,
}

impl SampleRow {
    pub fn from_state(sample: u64, state: &Configuration) -> Self {
        Self { sample, positions: state.flat_positions() }
    }
}

/// Reduced pressure `βP` over one sampling interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureRow {
    pub sample:     u64,
    pub pressure:   f64,
    pub pressure_x: Option<f64>,
    pub pressure_y: Option<f64>,
}

impl PressureRow {
    pub fn from_estimate(sample: u64, estimate: &PressureEstimate) -> Self {
        Self {
            sample,
            pressure:   estimate.combined,
            pressure_x: estimate.x,
            pressure_y: estimate.y,
        }
    }
}

//! Counters reported at chain and run boundaries.

use hd_core::DiskId;

/// What happened during one event chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainSummary {
    /// Disk drawn at the start of the chain.
    pub first_active: DiskId,
    /// Disk holding the active role when the chain ended.
    pub last_active:  DiskId,
    /// Sum of all advance times; equals the chain time up to round-off.
    pub elapsed:      f64,
    pub collisions:   u64,
    pub horizons:     u64,
}

impl ChainSummary {
    pub(crate) fn starting_at(active: DiskId) -> Self {
        Self {
            first_active: active,
            last_active:  active,
            elapsed:      0.0,
            collisions:   0,
            horizons:     0,
        }
    }
}

/// Totals over a whole run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Completed event chains (always 0 for molecular dynamics).
    pub chains:     u64,
    pub collisions: u64,
    pub horizons:   u64,
    pub samples:    u64,
    /// Total advance time: chain time for event chains, physical time for MD.
    pub elapsed:    f64,
}

impl RunStats {
    pub(crate) fn record_chain(&mut self, chain: &ChainSummary) {
        self.chains += 1;
        self.collisions += chain.collisions;
        self.horizons += chain.horizons;
        self.elapsed += chain.elapsed;
    }
}

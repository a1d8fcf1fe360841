//! Sample observer trait for progress reporting and data collection.

use hd_collision::Scheduled;
use hd_core::Configuration;
use hd_ecmc::PressureEstimate;

use crate::{ChainSummary, RunStats};

/// Callbacks invoked by the schedulers' `run` methods.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SampleObserver for Printer {
///     fn on_sample(&mut self, index: u64, state: &Configuration, _p: Option<&PressureEstimate>) {
///         println!("{index}: {:?}", state.flat_positions());
///     }
/// }
/// ```
pub trait SampleObserver {
    /// Called after every processed event, once the configuration has been
    /// advanced and updated.
    fn on_event(&mut self, _event: &Scheduled, _state: &Configuration) {}

    /// Called at the end of every event chain.  `chain` counts from 0.
    fn on_chain_end(&mut self, _chain: u64, _summary: &ChainSummary) {}

    /// Called at every sampling instant with read-only access to the current
    /// configuration.  `pressure` is only present for variants that measure
    /// it.
    fn on_sample(
        &mut self,
        _index:    u64,
        _state:    &Configuration,
        _pressure: Option<&PressureEstimate>,
    ) {}

    /// Called once after the last sample.
    fn on_run_end(&mut self, _stats: &RunStats) {}
}

/// A [`SampleObserver`] that does nothing.
pub struct NoopObserver;

impl SampleObserver for NoopObserver {}

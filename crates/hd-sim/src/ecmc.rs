//! The event-chain scheduler.

use glam::DVec2;
use hd_collision::{EarliestEvent, Event, Horizon, Scheduled};
use hd_core::{ChainConfig, Configuration, DiskId, DiskSystem, SimRng};
use hd_ecmc::ChainPhysics;
use tracing::{debug, info, trace};

use crate::{ChainSummary, RunStats, SampleObserver};

/// Event-chain Monte Carlo over a periodic hard-disk configuration.
///
/// Each chain runs through the states
///
/// ```text
/// Start   draw the active disk, let the physics draw the chain velocity,
///         remaining = chain_time
/// Seek    earliest of: contact with every other disk (index order),
///         horizon, chain end
/// Advance move the active disk by v·max(t, 0), wrap, remaining −= max(t, 0)
///         pair    → physics update, target becomes active, Seek
///         horizon → Seek
///         end     → Terminate
/// ```
///
/// A sample is emitted after every `chains_per_sample` chains.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct EcmcSim<P: ChainPhysics> {
    pub system:  DiskSystem,
    pub config:  ChainConfig,
    /// Owned exclusively by the scheduler; observers get read-only views.
    pub state:   Configuration,
    pub physics: P,
    pub horizon: Horizon,
    pub(crate) rng:   SimRng,
    pub(crate) stats: RunStats,
}

impl<P: ChainPhysics> EcmcSim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `n_samples × chains_per_sample` chains, emitting a sample after
    /// each group of `chains_per_sample`.
    pub fn run<O: SampleObserver>(&mut self, observer: &mut O) -> RunStats {
        let n = self.state.len();
        info!(
            algorithm = self.physics.name(),
            disks = n,
            sigma = self.system.sigma,
            lx = self.system.sim_box.lx,
            ly = self.system.sim_box.ly,
            chain_time = self.config.chain_time,
            chains_per_sample = self.config.chains_per_sample,
            samples = self.config.n_samples,
            "starting event-chain run"
        );

        for sample in 0..self.config.n_samples {
            for _ in 0..self.config.chains_per_sample {
                let summary = self.run_chain(observer);
                observer.on_chain_end(self.stats.chains - 1, &summary);
            }
            let pressure = self.physics.take_pressure(&self.system, n);
            debug!(sample, pressure = ?pressure.map(|p| p.combined), "sample");
            self.stats.samples += 1;
            observer.on_sample(sample, &self.state, pressure.as_ref());
        }

        observer.on_run_end(&self.stats);
        info!(
            chains = self.stats.chains,
            collisions = self.stats.collisions,
            horizons = self.stats.horizons,
            samples = self.stats.samples,
            "event-chain run finished"
        );
        self.stats.clone()
    }

    /// Run a single chain of duration `config.chain_time`.
    pub fn run_chain<O: SampleObserver>(&mut self, observer: &mut O) -> ChainSummary {
        let mut active = self.rng.disk(self.state.len());
        self.physics.begin_chain(&mut self.state, active, &mut self.rng);
        let mut summary = ChainSummary::starting_at(active);
        let mut remaining = self.config.chain_time;

        while remaining > 0.0 {
            let velocity = self.physics.velocity(&self.state, active);
            let Some(next) = self.next_event(active, velocity, remaining) else {
                break;
            };

            let step = next.time.max(0.0);
            self.state.advance_disk(active, velocity * step, &self.system.sim_box);
            remaining -= step;
            summary.elapsed += step;
            trace!(event = %next.event, time = step, remaining, "chain event");

            match next.event {
                Event::PairCollision { partner, .. } => {
                    self.physics.collide(&self.system, &mut self.state, active, partner, &mut self.rng);
                    active = partner;
                    summary.collisions += 1;
                }
                Event::Horizon => summary.horizons += 1,
                Event::ChainEnd | Event::SampleBoundary => remaining = 0.0,
            }
            observer.on_event(&next, &self.state);
        }

        self.physics.end_chain(summary.elapsed);
        summary.last_active = active;
        self.stats.record_chain(&summary);
        debug!(
            chain = self.stats.chains,
            first = %summary.first_active,
            last = %summary.last_active,
            collisions = summary.collisions,
            horizons = summary.horizons,
            "chain finished"
        );
        summary
    }

    /// Totals so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    // ── Event search ──────────────────────────────────────────────────────

    fn next_event(&self, active: DiskId, velocity: DVec2, remaining: f64) -> Option<Scheduled> {
        let mut earliest = EarliestEvent::new();
        for target in DiskId::all(self.state.len()) {
            if target == active {
                continue;
            }
            let time = self.physics.collision_time(&self.system, &self.state, active, target);
            earliest.offer(Event::PairCollision { disk: active, partner: target }, time);
        }
        earliest.offer(Event::Horizon, self.horizon.chain_time(velocity.length()));
        earliest.offer(Event::ChainEnd, remaining);
        earliest.take()
    }
}

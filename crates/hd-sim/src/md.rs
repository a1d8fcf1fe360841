//! The event-driven molecular-dynamics scheduler.

use hd_collision::{
    EarliestEvent, Event, Horizon, Scheduled, SpeedBound, contact_normal, elastic_exchange,
    pair_collision_time,
};
use hd_core::{Configuration, DiskId, DiskSystem, MdConfig};
use tracing::{debug, info, trace};

use crate::{RunStats, SampleObserver};

/// Event-driven MD: every disk moves all the time.
///
/// Per step the earliest of
///
/// - every pair contact `i < j` (full relative velocity, minimum image),
/// - the horizon `distance / v_max / 2`,
/// - the next sampling instant
///
/// is selected, the whole configuration drifts to that instant and the event
/// is applied.  Contacts are equal-mass elastic collisions and raise the
/// speed bound; sampling instants refresh it exactly.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct MdSim {
    pub system:  DiskSystem,
    pub config:  MdConfig,
    pub state:   Configuration,
    pub horizon: Horizon,
    pub(crate) speed:          SpeedBound,
    pub(crate) time_to_sample: f64,
    pub(crate) time:           f64,
    pub(crate) stats:          RunStats,
}

impl MdSim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.n_samples` sampling instants have passed.
    pub fn run<O: SampleObserver>(&mut self, observer: &mut O) -> RunStats {
        info!(
            algorithm = "md",
            disks = self.state.len(),
            sigma = self.system.sigma,
            lx = self.system.sim_box.lx,
            ly = self.system.sim_box.ly,
            sample_time = self.config.sample_time,
            samples = self.config.n_samples,
            energy = self.state.kinetic_energy(),
            "starting molecular-dynamics run"
        );

        let mut sample = 0;
        while sample < self.config.n_samples {
            let Some(next) = self.step() else { break };
            observer.on_event(&next, &self.state);
            if next.event == Event::SampleBoundary {
                debug!(sample, time = self.time, energy = self.state.kinetic_energy(), "sample");
                observer.on_sample(sample, &self.state, None);
                sample += 1;
            }
        }

        observer.on_run_end(&self.stats);
        info!(
            collisions = self.stats.collisions,
            horizons = self.stats.horizons,
            samples = self.stats.samples,
            time = self.time,
            "molecular-dynamics run finished"
        );
        self.stats.clone()
    }

    /// Find, advance to and apply the next event.
    ///
    /// Returns `None` only for an empty configuration.
    pub fn step(&mut self) -> Option<Scheduled> {
        if self.state.is_empty() {
            return None;
        }
        let next = self.next_event()?;
        let dt = next.time.max(0.0);
        self.state.advance_all(dt, &self.system.sim_box);
        self.time_to_sample -= dt;
        self.time += dt;
        self.stats.elapsed += dt;
        trace!(event = %next.event, time = dt, "md event");

        match next.event {
            Event::PairCollision { disk, partner } => self.collide(disk, partner),
            Event::Horizon => self.stats.horizons += 1,
            Event::SampleBoundary => {
                self.time_to_sample = self.config.sample_time;
                self.speed.refresh(&self.state.velocities);
                self.stats.samples += 1;
            }
            Event::ChainEnd => {}
        }
        Some(next)
    }

    /// Physical time since the start of the run.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current upper bound on any disk's speed.
    pub fn speed_bound(&self) -> f64 {
        self.speed.value()
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn next_event(&self) -> Option<Scheduled> {
        let sim_box = &self.system.sim_box;
        let p = &self.state.positions;
        let v = &self.state.velocities;
        let mut earliest = EarliestEvent::new();
        for i in 0..p.len() {
            for j in i + 1..p.len() {
                let time = pair_collision_time(sim_box, self.system.sigma, p[i], v[i], p[j], v[j]);
                earliest.offer(
                    Event::PairCollision { disk: DiskId(i as u32), partner: DiskId(j as u32) },
                    time,
                );
            }
        }
        earliest.offer(Event::Horizon, self.horizon.md_time(self.speed.value()));
        earliest.offer(Event::SampleBoundary, self.time_to_sample);
        earliest.take()
    }

    fn collide(&mut self, a: DiskId, b: DiskId) {
        let normal = contact_normal(&self.system.sim_box, self.state.position(a), self.state.position(b));
        let (va, vb) = elastic_exchange(normal, self.state.velocity(a), self.state.velocity(b));
        self.state.set_velocity(a, va);
        self.state.set_velocity(b, vb);
        self.speed.observe(va);
        self.speed.observe(vb);
        self.stats.collisions += 1;
    }
}

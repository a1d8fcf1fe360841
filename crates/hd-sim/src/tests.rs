//! Integration tests for hd-sim.

use glam::DVec2;
use hd_collision::Scheduled;
use hd_core::{
    BoxShape, ChainConfig, Configuration, DiskSystem, MdConfig, SimBox, SystemParams, build_crystal,
};
use hd_ecmc::PressureEstimate;

use crate::{ChainSummary, RunStats, SampleObserver, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SLACK: f64 = 1e-9;

fn params() -> SystemParams {
    SystemParams::new(4, 4, 0.5, BoxShape::Square)
}

fn chain_config(chain_time: f64, chains_per_sample: u64, n_samples: u64) -> ChainConfig {
    ChainConfig { chain_time, chains_per_sample, n_samples, seed: 1 }
}

/// Records everything the schedulers report.
#[derive(Default)]
struct Recorder {
    events:   Vec<Scheduled>,
    chains:   Vec<ChainSummary>,
    samples:  Vec<Vec<f64>>,
    pressure: Vec<Option<PressureEstimate>>,
    overlaps: usize,
    system:   Option<DiskSystem>,
    finished: Option<RunStats>,
}

impl Recorder {
    fn checking(system: DiskSystem) -> Self {
        Self { system: Some(system), ..Self::default() }
    }
}

impl SampleObserver for Recorder {
    fn on_event(&mut self, event: &Scheduled, _state: &Configuration) {
        self.events.push(*event);
    }

    fn on_chain_end(&mut self, _chain: u64, summary: &ChainSummary) {
        self.chains.push(*summary);
    }

    fn on_sample(&mut self, _index: u64, state: &Configuration, pressure: Option<&PressureEstimate>) {
        if let Some(system) = &self.system {
            if state.first_overlap(system, SLACK).is_some() {
                self.overlaps += 1;
            }
        }
        self.samples.push(state.flat_positions());
        self.pressure.push(pressure.copied());
    }

    fn on_run_end(&mut self, stats: &RunStats) {
        self.finished = Some(stats.clone());
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use hd_core::HdError;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_from_params() {
        let sim = SimBuilder::from_params(&params())
            .unwrap()
            .build_ecmc(hd_ecmc::Newtonian, ChainConfig::default())
            .unwrap();
        assert_eq!(sim.state.len(), 16);
        assert!(sim.horizon.distance > 0.0);
    }

    #[test]
    fn unfit_layout_fails_before_running() {
        let result = SimBuilder::from_params(&SystemParams::new(10, 10, 0.9, BoxShape::Square));
        assert!(matches!(result, Err(SimError::Core(HdError::DoesNotFit { count: 100, .. }))));
    }

    #[test]
    fn empty_layout_errors() {
        let system = DiskSystem::new(SimBox::unit(), 0.05).unwrap();
        let result = SimBuilder::new(system, vec![]).build_md(MdConfig::default());
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn overlapping_layout_errors() {
        let system = DiskSystem::new(SimBox::unit(), 0.05).unwrap();
        let result = SimBuilder::new(system, vec![DVec2::new(0.1, 0.1), DVec2::new(0.15, 0.1)])
            .build_ecmc(hd_ecmc::Forward::new(), ChainConfig::default());
        assert!(matches!(result, Err(SimError::Core(HdError::Overlap { .. }))));
    }

    #[test]
    fn crowded_box_has_no_horizon() {
        let system = DiskSystem::new(SimBox::unit(), 0.25).unwrap();
        let result = SimBuilder::new(system, vec![DVec2::new(0.5, 0.5)])
            .build_ecmc(hd_ecmc::Straight::new(), ChainConfig::straight_default());
        assert!(matches!(result, Err(SimError::Core(HdError::Config(_)))));
    }

    #[test]
    fn velocity_count_mismatch_errors() {
        let system = DiskSystem::new(SimBox::unit(), 0.05).unwrap();
        let result = SimBuilder::new(system, vec![DVec2::new(0.1, 0.1), DVec2::new(0.5, 0.5)])
            .velocities(vec![DVec2::X])
            .build_md(MdConfig::default());
        assert!(matches!(result, Err(SimError::Core(HdError::LengthMismatch { .. }))));
    }

    #[test]
    fn invalid_chain_config_errors() {
        let result = SimBuilder::from_params(&params())
            .unwrap()
            .build_ecmc(hd_ecmc::Newtonian, chain_config(-1.0, 1, 1));
        assert!(result.is_err());
    }

    #[test]
    fn positions_are_wrapped_on_build() {
        let system = DiskSystem::new(SimBox::unit(), 0.05).unwrap();
        let sim = SimBuilder::new(system, vec![DVec2::new(1.2, -0.3)])
            .build_md(MdConfig::default())
            .unwrap();
        let p = sim.state.positions[0];
        assert!((p.x - 0.2).abs() < 1e-12 && (p.y - 0.7).abs() < 1e-12, "{p:?}");
    }
}

// ── Event chains ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ecmc_tests {
    use hd_collision::Event;
    use hd_core::DiskId;
    use hd_ecmc::{ChainPhysics, Forward, Newtonian, Straight};

    use super::*;

    /// Configuration after every processed event.
    #[derive(Default)]
    struct Trace {
        steps: Vec<(Scheduled, Configuration)>,
    }

    impl SampleObserver for Trace {
        fn on_event(&mut self, event: &Scheduled, state: &Configuration) {
            self.steps.push((*event, state.clone()));
        }
    }

    /// Four disks of radius 0.15 on a 2 × 2 crystal in the unit box.
    fn four_disk_run(seed: u64) -> Vec<f64> {
        let system = DiskSystem::new(SimBox::unit(), 0.15).unwrap();
        let positions = build_crystal(2, 2, 0.15, system.sim_box).unwrap();
        let config = ChainConfig { seed, ..chain_config(80.0, 1, 1) };
        let mut sim = SimBuilder::new(system, positions).build_ecmc(Newtonian, config).unwrap();

        let mut rec = Recorder::checking(system);
        sim.run(&mut rec);
        assert_eq!(rec.samples.len(), 1);
        assert_eq!(rec.overlaps, 0);
        rec.samples.remove(0)
    }

    #[test]
    fn four_disk_newtonian_is_reproducible() {
        let first = four_disk_run(1);
        let second = four_disk_run(1);
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(four_disk_run(1), four_disk_run(2));
    }

    fn assert_chain_time_used<P: ChainPhysics>(physics: P, chain_time: f64) {
        let mut sim = SimBuilder::from_params(&params())
            .unwrap()
            .build_ecmc(physics, chain_config(chain_time, 1, 1))
            .unwrap();
        for _ in 0..5 {
            let mut rec = Recorder::default();
            let summary = sim.run_chain(&mut rec);
            let consumed: f64 = rec.events.iter().map(|e| e.time.max(0.0)).sum();
            assert!((consumed - chain_time).abs() < 1e-9, "consumed {consumed}");
            assert!((summary.elapsed - chain_time).abs() < 1e-9, "elapsed {}", summary.elapsed);
        }
    }

    #[test]
    fn chain_time_is_consumed_exactly() {
        assert_chain_time_used(Newtonian, 3.0);
        assert_chain_time_used(Forward::new(), 3.0);
        assert_chain_time_used(Straight::new(), 0.24);
    }

    fn assert_no_overlap<P: ChainPhysics>(physics: P, chain_time: f64) {
        let params = params();
        let system = params.system().unwrap();
        let mut sim = SimBuilder::from_params(&params)
            .unwrap()
            .build_ecmc(physics, chain_config(chain_time, 5, 10))
            .unwrap();
        let mut rec = Recorder::checking(system);
        let stats = sim.run(&mut rec);
        assert_eq!(rec.overlaps, 0);
        assert_eq!(rec.samples.len(), 10);
        assert_eq!(stats.chains, 50);
        assert!(stats.collisions > 0);
        for p in sim.state.positions.iter() {
            assert!(system.sim_box.contains(*p));
        }
    }

    #[test]
    fn samples_never_overlap() {
        assert_no_overlap(Newtonian, 2.0);
        assert_no_overlap(Forward::new(), 2.0);
        assert_no_overlap(Straight::new(), 0.24);
    }

    #[test]
    fn observer_sees_every_chain_and_sample() {
        let mut sim = SimBuilder::from_params(&params())
            .unwrap()
            .build_ecmc(Forward::new(), chain_config(1.0, 3, 4))
            .unwrap();
        let mut rec = Recorder::default();
        let stats = sim.run(&mut rec);
        assert_eq!(rec.chains.len(), 12);
        assert_eq!(rec.samples.len(), 4);
        assert_eq!(rec.finished, Some(stats.clone()));
        let collisions: u64 = rec.chains.iter().map(|c| c.collisions).sum();
        assert_eq!(collisions, stats.collisions);
        assert!(rec.pressure.iter().all(Option::is_none));
    }

    #[test]
    fn collisions_hand_over_the_active_disk() {
        let mut sim = SimBuilder::from_params(&params())
            .unwrap()
            .build_ecmc(Newtonian, chain_config(5.0, 1, 1))
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run_chain(&mut rec);

        let mut active = summary.first_active;
        for e in &rec.events {
            if let hd_collision::Event::PairCollision { disk, partner } = e.event {
                assert_eq!(disk, active);
                assert_ne!(partner, active);
                active = partner;
            }
        }
        assert_eq!(active, summary.last_active);
    }

    /// Two small disks far apart: chains several horizons long.
    ///
    /// Returns how many horizon steps directly followed another horizon.
    fn assert_horizons_keep_the_chain<P: ChainPhysics>(physics: P) -> usize {
        let system = DiskSystem::new(SimBox::unit(), 0.01).unwrap();
        let positions = vec![DVec2::new(0.25, 0.25), DVec2::new(0.75, 0.75)];
        let mut sim = SimBuilder::new(system, positions)
            .build_ecmc(physics, chain_config(5.0, 1, 1))
            .unwrap();
        let distance = sim.horizon.distance;

        let mut repeated = 0;
        for _ in 0..10 {
            let mut before = sim.state.clone();
            let mut trace = Trace::default();
            let summary = sim.run_chain(&mut trace);

            let mut active = summary.first_active;
            let mut last: Option<(Event, DVec2)> = None;
            for (next, after) in &trace.steps {
                let step = system.sim_box.separation(after.position(active), before.position(active));
                for id in DiskId::all(after.len()).filter(|id| *id != active) {
                    assert_eq!(after.position(id), before.position(id));
                }
                match next.event {
                    Event::Horizon => {
                        assert!((step.length() - distance).abs() < 1e-9, "moved {}", step.length());
                        if last.is_some() {
                            assert_eq!(after.velocities, before.velocities);
                        }
                        if let Some((Event::Horizon, previous)) = last {
                            assert!((step.normalize() - previous.normalize()).length() < 1e-9);
                            repeated += 1;
                        }
                    }
                    Event::PairCollision { partner, .. } => active = partner,
                    Event::ChainEnd | Event::SampleBoundary => {}
                }
                last = Some((next.event, step));
                before = after.clone();
            }
            assert_eq!(active, summary.last_active);
        }
        repeated
    }

    #[test]
    fn horizon_keeps_active_disk_and_velocity() {
        assert!(assert_horizons_keep_the_chain(Newtonian) > 0);
        assert!(assert_horizons_keep_the_chain(Forward::new()) > 0);
    }

    #[test]
    fn straight_reports_pressure_every_sample() {
        let params = params();
        let system = params.system().unwrap();
        let density = 16.0 / system.sim_box.area();
        let mut sim = SimBuilder::from_params(&params)
            .unwrap()
            .build_ecmc(Straight::new(), chain_config(0.24, 50, 3))
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.pressure.len(), 3);
        for p in &rec.pressure {
            let p = p.unwrap();
            assert!(p.combined >= density);
            assert!(p.x.is_some() || p.y.is_some());
        }
    }
}

// ── Molecular dynamics ────────────────────────────────────────────────────────

#[cfg(test)]
mod md_tests {
    use hd_collision::Event;

    use super::*;

    fn md(sample_time: f64, n_samples: u64) -> crate::MdSim {
        SimBuilder::from_params(&params())
            .unwrap()
            .build_md(MdConfig { sample_time, n_samples, seed: 1 })
            .unwrap()
    }

    #[test]
    fn initial_velocities_have_zero_momentum() {
        let sim = md(1.0, 1);
        assert!(sim.state.momentum().length() < 1e-12);
        assert!(sim.state.kinetic_energy() > 0.0);
    }

    #[test]
    fn head_on_pair_swaps_velocities() {
        let system = DiskSystem::new(SimBox::unit(), 0.05).unwrap();
        let mut sim = SimBuilder::new(system, vec![DVec2::new(0.2, 0.5), DVec2::new(0.6, 0.5)])
            .velocities(vec![DVec2::X, -DVec2::X])
            .build_md(MdConfig::default())
            .unwrap();

        let next = sim.step().unwrap();
        assert!(matches!(next.event, Event::PairCollision { .. }));
        assert!((next.time - 0.15).abs() < 1e-12);
        assert!((sim.state.velocities[0] + DVec2::X).length() < 1e-12);
        assert!((sim.state.velocities[1] - DVec2::X).length() < 1e-12);
    }

    #[test]
    fn horizon_leaves_velocities_alone() {
        // Parallel tracks half a box apart never meet.
        let system = DiskSystem::new(SimBox::unit(), 0.01).unwrap();
        let velocities = vec![DVec2::new(1.0, 0.0), DVec2::new(0.5, 0.0)];
        let mut sim = SimBuilder::new(system, vec![DVec2::new(0.1, 0.1), DVec2::new(0.6, 0.6)])
            .velocities(velocities.clone())
            .build_md(MdConfig::default())
            .unwrap();
        let expected = sim.horizon.distance / 1.0 / 2.0;

        for _ in 0..20 {
            let before = sim.state.clone();
            let next = sim.step().unwrap();
            assert_eq!(next.event, Event::Horizon);
            assert!((next.time - expected).abs() < 1e-12, "time {}", next.time);
            assert_eq!(sim.state.velocities, before.velocities);
            for (i, v) in velocities.iter().enumerate() {
                let moved = system.sim_box.separation(sim.state.positions[i], before.positions[i]);
                assert!((moved - *v * next.time).length() < 1e-12, "{moved:?}");
            }
        }
        assert_eq!(sim.stats().horizons, 20);
        assert_eq!(sim.stats().collisions, 0);
    }

    #[test]
    fn collisions_conserve_energy_and_momentum() {
        let mut sim = md(100.0, 1);
        let e0 = sim.state.kinetic_energy();
        let p0 = sim.state.momentum();
        let mut collisions = 0;
        for _ in 0..500 {
            let next = sim.step().unwrap();
            if matches!(next.event, Event::PairCollision { .. }) {
                collisions += 1;
                assert!((sim.state.kinetic_energy() - e0).abs() < 1e-9);
                assert!((sim.state.momentum() - p0).length() < 1e-9);
            }
        }
        assert!(collisions > 0);
    }

    #[test]
    fn speed_bound_covers_every_disk() {
        let mut sim = md(0.05, 1);
        for _ in 0..300 {
            let next = sim.step().unwrap();
            assert!(sim.speed_bound() + 1e-12 >= sim.state.max_speed());
            if next.event == Event::SampleBoundary {
                assert_eq!(sim.speed_bound(), sim.state.max_speed());
            }
        }
    }

    #[test]
    fn samples_on_a_fixed_cadence() {
        let params = params();
        let system = params.system().unwrap();
        let mut sim = md(0.5, 3);
        let mut rec = Recorder::checking(system);
        let stats = sim.run(&mut rec);

        assert_eq!(rec.samples.len(), 3);
        assert_eq!(stats.samples, 3);
        assert_eq!(stats.chains, 0);
        assert_eq!(rec.overlaps, 0);
        assert!((sim.time() - 1.5).abs() < 1e-9, "time {}", sim.time());
    }

    #[test]
    fn md_is_reproducible() {
        let run = || {
            let mut sim = md(0.5, 2);
            let mut rec = Recorder::default();
            sim.run(&mut rec);
            rec.samples
        };
        assert_eq!(run(), run());
    }
}

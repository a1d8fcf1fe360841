//! Fluent builder for the schedulers.

use glam::DVec2;
use hd_collision::{Horizon, SpeedBound};
use hd_core::{
    ChainConfig, Configuration, DiskSystem, HdError, MdConfig, SimRng, SystemParams,
    lattice::CONTACT_TOLERANCE,
};
use hd_ecmc::ChainPhysics;

use crate::{EcmcSim, MdSim, RunStats, SimError, SimResult};

/// Fluent builder for [`EcmcSim`] and [`MdSim`].
///
/// # Required inputs
///
/// - [`DiskSystem`] — box and disk radius
/// - initial positions, usually from [`SystemParams::initial_positions`]
///
/// # Optional inputs
///
/// | Method              | Default                                            |
/// |---------------------|----------------------------------------------------|
/// | `.velocities(v)`    | MD: isotropic unit vectors, drift removed; ECMC: drawn per chain |
///
/// Every build validates that the layout is non-empty, overlap-free and that
/// the horizon distance is positive, so no scheduler ever starts from an
/// invalid configuration.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_params(&params)?
///     .build_ecmc(Newtonian, ChainConfig::default())?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    system:     DiskSystem,
    positions:  Vec<DVec2>,
    velocities: Option<Vec<DVec2>>,
}

impl SimBuilder {
    pub fn new(system: DiskSystem, positions: Vec<DVec2>) -> Self {
        Self { system, positions, velocities: None }
    }

    /// Derive the box and radius from `params` and build the lattice layout.
    ///
    /// Fails with [`HdError::DoesNotFit`] before any event loop exists.
    pub fn from_params(params: &SystemParams) -> SimResult<Self> {
        let system = params.system()?;
        let positions = params.initial_positions()?;
        Ok(Self::new(system, positions))
    }

    /// Supply initial velocities (must be one per disk).
    pub fn velocities(mut self, velocities: Vec<DVec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    pub fn system(&self) -> &DiskSystem {
        &self.system
    }

    /// Validate inputs and return a ready-to-run chain scheduler.
    pub fn build_ecmc<P: ChainPhysics>(self, physics: P, config: ChainConfig) -> SimResult<EcmcSim<P>> {
        config.validate()?;
        let (system, horizon, state) = self.validate()?;
        Ok(EcmcSim {
            system,
            rng: SimRng::new(config.seed),
            config,
            state,
            physics,
            horizon,
            stats: RunStats::default(),
        })
    }

    /// Validate inputs and return a ready-to-run MD scheduler.
    pub fn build_md(mut self, config: MdConfig) -> SimResult<MdSim> {
        config.validate()?;
        let supplied = self.velocities.is_some();
        if !supplied {
            let mut rng = SimRng::new(config.seed);
            let velocities = (0..self.positions.len()).map(|_| rng.unit_vector()).collect();
            self.velocities = Some(velocities);
        }
        let (system, horizon, mut state) = self.validate()?;
        if !supplied {
            state.remove_drift();
        }
        Ok(MdSim {
            system,
            speed: SpeedBound::from_velocities(&state.velocities),
            time_to_sample: config.sample_time,
            time: 0.0,
            config,
            state,
            horizon,
            stats: RunStats::default(),
        })
    }

    // ── Validation ────────────────────────────────────────────────────────

    fn validate(self) -> SimResult<(DiskSystem, Horizon, Configuration)> {
        if self.positions.is_empty() {
            return Err(SimError::Config("at least one disk is required".into()));
        }
        let horizon = Horizon::new(&self.system)?;
        if let Some(bad) = self.positions.iter().find(|p| !p.is_finite()) {
            return Err(HdError::Config(format!("non-finite position {bad}")).into());
        }

        let sim_box = self.system.sim_box;
        let positions: Vec<DVec2> = self.positions.into_iter().map(|p| sim_box.wrap(p)).collect();
        let state = match self.velocities {
            Some(v) => Configuration::with_velocities(positions, v)?,
            None => Configuration::new(positions),
        };

        let slack = CONTACT_TOLERANCE * self.system.contact_distance();
        state.check_no_overlap(&self.system, slack)?;
        Ok((self.system, horizon, state))
    }
}

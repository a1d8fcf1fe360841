//! hdsim: command-line driver for the hard-disk schedulers.
//!
//! Builds a lattice of `n_x * n_y` disks at packing fraction `eta` in a
//! unit-area periodic box and runs one of the sampling algorithms on it.
//!
//! # Quick Start
//!
//! ```bash
//! # 1000 Newtonian chains on a 16x16 square system, samples to stdout
//! hdsim newtonian --nx 16 --ny 16 --eta 0.7
//!
//! # straight chains with pressure, CSV output
//! hdsim --output-dir out straight --eta 0.72 --samples 50
//!
//! # molecular dynamics with debug logging
//! RUST_LOG=debug hdsim md --sample-time 5
//!
//! # everything from a TOML file
//! hdsim from-file run.toml
//! ```
//!
//! Samples are written one per line as `x0 y0 x1 y1 ...` unless
//! `--output-dir` is given, in which case `samples.csv` and (for straight
//! chains) `pressure.csv` are written there.  Logs go to stderr.

mod run_file;

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use hd_core::{BoxShape, ChainConfig, Configuration, MdConfig, SystemParams};
use hd_ecmc::{Forward, Newtonian, PressureEstimate, Straight};
use hd_output::{CsvWriter, OutputWriter, SampleOutputObserver, TextWriter};
use hd_sim::{RunStats, SampleObserver, SimBuilder};

use run_file::{Algorithm, RunFile};

// ── Command line ──────────────────────────────────────────────────────────────

/// Hard-disk Monte Carlo and molecular dynamics in a periodic box.
#[derive(Parser)]
#[command(name = "hdsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Write samples.csv / pressure.csv here instead of text on stdout.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Event-chain Monte Carlo with velocity transfer on contact.
    Newtonian {
        #[command(flatten)]
        system: SystemArgs,
        #[command(flatten)]
        chain: ChainArgs,
    },

    /// Event-chain Monte Carlo with forward lifting.
    Forward {
        #[command(flatten)]
        system: SystemArgs,
        #[command(flatten)]
        chain: ChainArgs,
    },

    /// Axis-aligned event chains; also reports the pressure.
    Straight {
        #[command(flatten)]
        system: SystemArgs,
        #[command(flatten)]
        chain: ChainArgs,
    },

    /// Event-driven molecular dynamics.
    Md {
        #[command(flatten)]
        system: SystemArgs,
        #[command(flatten)]
        md: MdArgs,
    },

    /// Read the algorithm and all parameters from a TOML file.
    FromFile {
        /// Path to the run file.
        path: PathBuf,
    },
}

#[derive(Args)]
struct SystemArgs {
    /// Disks per lattice row.
    #[arg(long, default_value_t = 16)]
    nx: usize,

    /// Lattice rows.
    #[arg(long, default_value_t = 16)]
    ny: usize,

    /// Packing fraction.
    #[arg(long, default_value_t = 0.7)]
    eta: f64,

    #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
    shape: ShapeArg,
}

#[derive(Copy, Clone, ValueEnum)]
enum ShapeArg {
    Square,
    Rectangle,
    Crystal,
}

/// Unset values take the algorithm's defaults.
#[derive(Args)]
struct ChainArgs {
    /// Duration of one event chain.
    #[arg(long)]
    chain_time: Option<f64>,

    /// Chains between two samples.
    #[arg(long)]
    chains_per_sample: Option<u64>,

    #[arg(long)]
    samples: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct MdArgs {
    /// Physical time between two samples.
    #[arg(long)]
    sample_time: Option<f64>,

    #[arg(long)]
    samples: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,
}

impl SystemArgs {
    fn params(&self) -> SystemParams {
        let shape = match self.shape {
            ShapeArg::Square    => BoxShape::Square,
            ShapeArg::Rectangle => BoxShape::Rectangle,
            ShapeArg::Crystal   => BoxShape::Crystal,
        };
        SystemParams::new(self.nx, self.ny, self.eta, shape)
    }
}

impl ChainArgs {
    fn apply(&self, base: ChainConfig) -> ChainConfig {
        ChainConfig {
            chain_time:        self.chain_time.unwrap_or(base.chain_time),
            chains_per_sample: self.chains_per_sample.unwrap_or(base.chains_per_sample),
            n_samples:         self.samples.unwrap_or(base.n_samples),
            seed:              self.seed.unwrap_or(base.seed),
        }
    }
}

impl MdArgs {
    fn apply(&self, base: MdConfig) -> MdConfig {
        MdConfig {
            sample_time: self.sample_time.unwrap_or(base.sample_time),
            n_samples:   self.samples.unwrap_or(base.n_samples),
            seed:        self.seed.unwrap_or(base.seed),
        }
    }
}

// ── Job ───────────────────────────────────────────────────────────────────────

/// A fully resolved run.
struct Job {
    algorithm: Algorithm,
    system:    SystemParams,
    chain:     ChainConfig,
    md:        MdConfig,
}

impl Job {
    fn from_command(command: Commands) -> Result<Self> {
        let job = match command {
            Commands::Newtonian { system, chain } => Job {
                algorithm: Algorithm::Newtonian,
                system:    system.params(),
                chain:     chain.apply(ChainConfig::default()),
                md:        MdConfig::default(),
            },
            Commands::Forward { system, chain } => Job {
                algorithm: Algorithm::Forward,
                system:    system.params(),
                chain:     chain.apply(ChainConfig::default()),
                md:        MdConfig::default(),
            },
            Commands::Straight { system, chain } => Job {
                algorithm: Algorithm::Straight,
                system:    system.params(),
                chain:     chain.apply(ChainConfig::straight_default()),
                md:        MdConfig::default(),
            },
            Commands::Md { system, md } => Job {
                algorithm: Algorithm::Md,
                system:    system.params(),
                chain:     ChainConfig::default(),
                md:        md.apply(MdConfig::default()),
            },
            Commands::FromFile { path } => {
                let run = RunFile::load(&path)?;
                Job {
                    algorithm: run.algorithm,
                    chain:     run.chain_config(),
                    md:        run.md_config(),
                    system:    run.system,
                }
            }
        };
        Ok(job)
    }
}

// ── Reporting observer ────────────────────────────────────────────────────────

/// Forwards to the output observer and averages the pressure estimates.
struct Reporter<W: OutputWriter> {
    output:         SampleOutputObserver<W>,
    pressure_sum:   f64,
    pressure_count: u64,
}

impl<W: OutputWriter> Reporter<W> {
    fn new(writer: W) -> Self {
        Self { output: SampleOutputObserver::new(writer), pressure_sum: 0.0, pressure_count: 0 }
    }

    fn mean_pressure(&self) -> Option<f64> {
        (self.pressure_count > 0).then(|| self.pressure_sum / self.pressure_count as f64)
    }
}

impl<W: OutputWriter> SampleObserver for Reporter<W> {
    fn on_sample(&mut self, index: u64, state: &Configuration, pressure: Option<&PressureEstimate>) {
        if let Some(p) = pressure {
            self.pressure_sum += p.combined;
            self.pressure_count += 1;
        }
        self.output.on_sample(index, state, pressure);
    }

    fn on_run_end(&mut self, stats: &RunStats) {
        self.output.on_run_end(stats);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let job = Job::from_command(cli.command)?;

    match cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(&dir, job.system.disk_count())?;
            run(&job, writer)?;
            info!(dir = %dir.display(), "output written");
        }
        None => {
            let stdout = io::stdout();
            run(&job, TextWriter::new(BufWriter::new(stdout.lock())))?;
        }
    }
    Ok(())
}

fn run<W: OutputWriter>(job: &Job, writer: W) -> Result<()> {
    let builder = SimBuilder::from_params(&job.system)
        .with_context(|| format!("building the initial {:?} layout", job.system.shape))?;
    let mut reporter = Reporter::new(writer);

    let start = Instant::now();
    let stats = match job.algorithm {
        Algorithm::Newtonian => builder.build_ecmc(Newtonian, job.chain.clone())?.run(&mut reporter),
        Algorithm::Forward   => builder.build_ecmc(Forward::new(), job.chain.clone())?.run(&mut reporter),
        Algorithm::Straight  => builder.build_ecmc(Straight::new(), job.chain.clone())?.run(&mut reporter),
        Algorithm::Md        => builder.build_md(job.md.clone())?.run(&mut reporter),
    };

    if let Some(e) = reporter.output.take_error() {
        return Err(e).context("writing samples");
    }

    info!(
        samples    = stats.samples,
        chains     = stats.chains,
        collisions = stats.collisions,
        horizons   = stats.horizons,
        wall_secs  = start.elapsed().as_secs_f64(),
        "run complete"
    );
    if let Some(p) = reporter.mean_pressure() {
        info!(pressure = p, "mean reduced pressure");
    }
    Ok(())
}

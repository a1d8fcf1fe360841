//! TOML run description for `hdsim from-file`.
//!
//! ```toml
//! algorithm = "straight"
//!
//! [system]
//! n_x   = 16
//! n_y   = 16
//! eta   = 0.7
//! shape = "square"
//!
//! [chain]          # ignored by md
//! chain_time        = 0.24
//! chains_per_sample = 1000
//! n_samples         = 100
//! seed              = 7
//!
//! [md]             # ignored by the chain variants
//! sample_time = 15.0
//! ```
//!
//! Missing `[chain]` keys fall back to the algorithm's defaults (short
//! chains for `straight`), missing `[md]` keys to the MD defaults.

use std::path::Path;

use anyhow::{Context, Result};
use hd_core::{ChainConfig, MdConfig, SystemParams};
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Newtonian,
    Forward,
    Straight,
    Md,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RunFile {
    pub algorithm: Algorithm,
    pub system:    SystemParams,
    #[serde(default)]
    pub chain:     ChainTable,
    pub md:        Option<MdConfig>,
}

/// The `[chain]` table; unset keys are filled in per algorithm.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainTable {
    pub chain_time:        Option<f64>,
    pub chains_per_sample: Option<u64>,
    pub n_samples:         Option<u64>,
    pub seed:              Option<u64>,
}

impl ChainTable {
    pub fn over(&self, base: ChainConfig) -> ChainConfig {
        ChainConfig {
            chain_time:        self.chain_time.unwrap_or(base.chain_time),
            chains_per_sample: self.chains_per_sample.unwrap_or(base.chains_per_sample),
            n_samples:         self.n_samples.unwrap_or(base.n_samples),
            seed:              self.seed.unwrap_or(base.seed),
        }
    }
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading run file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing run file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The chain schedule, with the straight defaults for straight runs.
    pub fn chain_config(&self) -> ChainConfig {
        let base = match self.algorithm {
            Algorithm::Straight => ChainConfig::straight_default(),
            _ => ChainConfig::default(),
        };
        self.chain.over(base)
    }

    pub fn md_config(&self) -> MdConfig {
        self.md.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use hd_core::BoxShape;

    use super::*;

    #[test]
    fn parses_full_file() {
        let run = RunFile::parse(
            r#"
            algorithm = "forward"

            [system]
            n_x = 4
            n_y = 4
            eta = 0.5
            shape = "crystal"

            [chain]
            chain_time = 2.0
            n_samples = 10
            "#,
        )
        .unwrap();
        assert_eq!(run.algorithm, Algorithm::Forward);
        assert_eq!(run.system, SystemParams::new(4, 4, 0.5, BoxShape::Crystal));
        let chain = run.chain_config();
        assert_eq!(chain.chain_time, 2.0);
        assert_eq!(chain.n_samples, 10);
        assert_eq!(chain.chains_per_sample, 1);
    }

    #[test]
    fn straight_falls_back_to_short_chains() {
        let run = RunFile::parse(
            r#"
            algorithm = "straight"
            [system]
            n_x = 2
            n_y = 2
            eta = 0.3
            shape = "square"
            "#,
        )
        .unwrap();
        assert_eq!(run.chain_config(), ChainConfig::straight_default());
        assert_eq!(run.md_config(), MdConfig::default());
    }

    #[test]
    fn partial_chain_table_keeps_straight_defaults() {
        let run = RunFile::parse(
            r#"
            algorithm = "straight"
            [system]
            n_x = 2
            n_y = 2
            eta = 0.3
            shape = "square"

            [chain]
            n_samples = 5
            "#,
        )
        .unwrap();
        let chain = run.chain_config();
        assert_eq!(chain.chain_time, 0.24);
        assert_eq!(chain.chains_per_sample, 1000);
        assert_eq!(chain.n_samples, 5);
        assert_eq!(chain.seed, 1);
    }

    #[test]
    fn unknown_algorithm_rejected() {
        let err = RunFile::parse("algorithm = \"metropolis\"\n[system]\nn_x=1\nn_y=1\neta=0.1\nshape=\"square\"\n");
        assert!(err.is_err());
    }
}

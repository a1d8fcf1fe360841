//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HdError` as one variant
//! via `#[from]`, so a fit failure raised by the lattice builders surfaces
//! unchanged at the top of a run.

use thiserror::Error;

use crate::DiskId;

/// The top-level error type for `hd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HdError {
    /// The requested disks cannot be placed in the box without overlap.
    #[error("{count} disks of radius {sigma} do not fit into a {lx} x {ly} box")]
    DoesNotFit {
        count: usize,
        sigma: f64,
        lx:    f64,
        ly:    f64,
    },

    #[error("disks {a} and {b} overlap (center distance {distance})")]
    Overlap {
        a:        DiskId,
        b:        DiskId,
        distance: f64,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match disk count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

/// Shorthand result type for all `hd-*` crates.
pub type HdResult<T> = Result<T, HdError>;

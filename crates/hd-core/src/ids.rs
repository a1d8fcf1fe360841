//! Disk identifiers.

use std::fmt;

/// Index of a disk in a [`Configuration`][crate::Configuration], in `[0, N)`.
///
/// Disk order is fixed for a run: samples list positions in id order and
/// every all-pairs scan visits pairs `(i, j)` with `i < j` in that order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskId(pub u32);

impl DiskId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Every id of an `n`-disk configuration in index order.
    pub fn all(n: usize) -> impl Iterator<Item = DiskId> {
        (0..n as u32).map(DiskId)
    }
}

impl fmt::Display for DiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiskId({})", self.0)
    }
}

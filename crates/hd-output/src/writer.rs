//! The `OutputWriter` trait implemented by all writers.

use crate::{OutputResult, PressureRow, SampleRow};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`SampleOutputObserver`][crate::SampleOutputObserver]
/// and retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Write the positions of one sample.
    fn write_sample(&mut self, row: &SampleRow) -> OutputResult<()>;

    /// Write the pressure measured over one sampling interval.
    ///
    /// Default: dropped.
    fn write_pressure(&mut self, _row: &PressureRow) -> OutputResult<()> {
        Ok(())
    }

    /// Flush all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

//! Bridge from `SampleObserver` to an `OutputWriter`.

use hd_core::Configuration;
use hd_ecmc::PressureEstimate;
use hd_sim::{RunStats, SampleObserver};

use crate::row::{PressureRow, SampleRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// Writes every sample, plus the pressure estimate when the variant has one,
/// to an [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is held back and
/// the run carries on.  Call [`take_error`][Self::take_error] once `run`
/// has returned.
pub struct SampleOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SampleOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The first write error of the run; `None` if every write succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SampleObserver for SampleOutputObserver<W> {
    fn on_sample(&mut self, index: u64, state: &Configuration, pressure: Option<&PressureEstimate>) {
        let result = self.writer.write_sample(&SampleRow::from_state(index, state));
        self.store_err(result);
        if let Some(estimate) = pressure {
            let result = self.writer.write_pressure(&PressureRow::from_estimate(index, estimate));
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _stats: &RunStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

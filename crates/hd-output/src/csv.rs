//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `samples.csv` — `sample,x0,y0,x1,y1,…`
//! - `pressure.csv` — `sample,pressure,pressure_x,pressure_y`; a missing
//!   per-axis estimate is an empty cell

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, PressureRow, SampleRow};
use crate::writer::OutputWriter;

/// Writes samples and pressure to two CSV files.
pub struct CsvWriter {
    samples:  Writer<File>,
    pressure: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows
    /// for `disk_count` disks.
    pub fn new(dir: &Path, disk_count: usize) -> OutputResult<Self> {
        let mut samples = Writer::from_path(dir.join("samples.csv"))?;
        let header = std::iter::once("sample".to_owned())
            .chain((0..disk_count).flat_map(|i| [format!("x{i}"), format!("y{i}")]));
        samples.write_record(header)?;

        let mut pressure = Writer::from_path(dir.join("pressure.csv"))?;
        pressure.write_record(["sample", "pressure", "pressure_x", "pressure_y"])?;

        Ok(Self {
            samples,
            pressure,
            finished: false,
        })
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_sample(&mut self, row: &SampleRow) -> OutputResult<()> {
        let record = std::iter::once(row.sample.to_string())
            .chain(row.positions.iter().map(f64::to_string));
        self.samples.write_record(record)?;
        Ok(())
    }

    fn write_pressure(&mut self, row: &PressureRow) -> OutputResult<()> {
        self.pressure.write_record(&[
            row.sample.to_string(),
            row.pressure.to_string(),
            optional(row.pressure_x),
            optional(row.pressure_y),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.pressure.flush()?;
        Ok(())
    }
}

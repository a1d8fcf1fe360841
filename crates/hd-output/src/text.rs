//! Plain-text sample stream.
//!
//! One line per sample: the `2N` coordinates `x0 y0 x1 y1 …` separated by
//! single spaces, in disk-index order.  Floats are printed with the shortest
//! representation that reads back to the same value.  Pressure rows are not
//! part of this stream.

use std::io::Write;

use crate::{OutputResult, SampleRow};
use crate::writer::OutputWriter;

pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_sample(&mut self, row: &SampleRow) -> OutputResult<()> {
        let mut coords = row.positions.iter();
        if let Some(first) = coords.next() {
            write!(self.out, "{first}")?;
            for c in coords {
                write!(self.out, " {c}")?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

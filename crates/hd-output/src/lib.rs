//! `hd-output` — sample writers for the hard-disk schedulers.
//!
//! | Writer       | Output                                                        |
//! |--------------|---------------------------------------------------------------|
//! | `TextWriter` | one line per sample: `x0 y0 x1 y1 …` on any `io::Write`       |
//! | `CsvWriter`  | `samples.csv` and `pressure.csv` in an output directory       |
//!
//! All writers implement [`OutputWriter`] and are driven by
//! [`SampleOutputObserver`], which implements `hd_sim::SampleObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hd_output::{SampleOutputObserver, TextWriter};
//!
//! let mut obs = SampleOutputObserver::new(TextWriter::new(std::io::stdout().lock()));
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SampleOutputObserver;
pub use row::{PressureRow, SampleRow};
pub use text::TextWriter;
pub use writer::OutputWriter;

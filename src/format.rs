//! Delimited text serialization of sample points.
//!
//! One `t<delim>value` line per point, newline terminated, no header row.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{SignalError, SignalResult};
use crate::params::SamplePoint;

/// Layout of a sample file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFormat {
    delimiter: char,
    precision: Option<usize>,
}

impl SampleFormat {
    /// Create a format with the given field separator.
    ///
    /// Fails with [`SignalError::InvalidArgument`] when the delimiter could appear inside a
    /// rendered number (`inf` and `NaN` included) or would split the line.
    pub fn new(delimiter: char) -> SignalResult<Self> {
        if delimiter.is_alphanumeric() || matches!(delimiter, '.' | '+' | '-' | '\n' | '\r') {
            return Err(SignalError::invalid(
                "delimiter must not appear inside a number or end a line",
                f64::from(u32::from(delimiter)),
            ));
        }
        Ok(Self {
            delimiter,
            precision: None,
        })
    }

    /// Write a fixed number of decimals instead of the shortest exact representation.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Field separator between `t` and the value.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Fixed number of decimals, or `None` for the shortest exact representation.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn format_line(&self, point: &SamplePoint) -> String {
        match self.precision {
            Some(p) => format!("{:.p$}{}{:.p$}\n", point.t, self.delimiter, point.value),
            None => format!("{}{}{}\n", point.t, self.delimiter, point.value),
        }
    }
}

impl Default for SampleFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: None,
        }
    }
}

/// Write every point to `writer`, returning the number of bytes written.
pub fn write_samples<W: Write>(
    writer: &mut W,
    points: &[SamplePoint],
    format: &SampleFormat,
) -> SignalResult<u64> {
    let mut written = 0u64;
    for point in points {
        let line = format.format_line(point);
        writer.write_all(line.as_bytes())?;
        written += line.len() as u64;
    }
    Ok(written)
}

/// Parse the text of a sample file.
///
/// Blank lines are skipped. Any other line must hold exactly two numeric fields.
pub fn parse_samples(text: &str, format: &SampleFormat) -> SignalResult<Vec<SamplePoint>> {
    let mut points = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let malformed = || SignalError::Parse {
            line: index + 1,
            content: line.to_string(),
        };

        let mut fields = line.split(format.delimiter);
        let (Some(t), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        let t = t.trim().parse::<f64>().map_err(|_| malformed())?;
        let value = value.trim().parse::<f64>().map_err(|_| malformed())?;
        points.push(SamplePoint::new(t, value));
    }
    Ok(points)
}

/// Read a sample file written by [`write_samples`].
pub fn read_samples(path: &Path, format: &SampleFormat) -> SignalResult<Vec<SamplePoint>> {
    let text = fs::read_to_string(path)?;
    parse_samples(&text, format)
}

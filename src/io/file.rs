//! Simplify a GeoJSON file into another file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tracing::info;

use crate::algorithm::Simplify;
use crate::error::{Result, SimplifyError};
use crate::io::geojson::{read_geojson, write_geojson};

/// Default tolerance, in degrees. Roughly 11 meters at the equator.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Where to read from, where to write to, and how aggressively to simplify.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Minimum planar distance, in degrees, between two consecutive kept positions.
    pub tolerance: f64,
}

impl SimplifyOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Reject tolerances that are negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SimplifyError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Sizes before and after a call to [`simplify_file`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyReport {
    /// Size of the input file, in bytes.
    pub input_bytes: u64,
    /// Size of the written output file, in bytes.
    pub output_bytes: u64,
    /// Number of features, or `None` when the document is a bare geometry.
    pub num_features: Option<usize>,
    pub input_coords: usize,
    pub output_coords: usize,
}

impl SimplifyReport {
    /// How much smaller the output is than the input, as a percentage of the input size.
    ///
    /// Negative when the output grew.
    pub fn reduction_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.output_bytes as f64 / self.input_bytes as f64) * 100.0
    }
}

/// Read the GeoJSON document at `options.input`, simplify it, and write it compactly to
/// `options.output`.
///
/// The output file is only created once the whole document has been read and simplified,
/// so a malformed input never leaves a partial output behind.
pub fn simplify_file(options: &SimplifyOptions) -> Result<SimplifyReport> {
    options.validate()?;

    info!("Reading {}", options.input.display());
    let input_bytes = fs::metadata(&options.input)?.len();
    let document = read_geojson(BufReader::new(File::open(&options.input)?))?;

    info!("Simplifying with tolerance {}", options.tolerance);
    let simplified = document.simplify(&options.tolerance);

    info!("Writing {}", options.output.display());
    write_geojson(&simplified, BufWriter::new(File::create(&options.output)?))?;
    let output_bytes = fs::metadata(&options.output)?.len();

    Ok(SimplifyReport {
        input_bytes,
        output_bytes,
        num_features: simplified.num_features(),
        input_coords: document.num_coords(),
        output_coords: simplified.num_coords(),
    })
}

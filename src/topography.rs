//! # USGS topography gateway
//!
//! Loader for the local USGS topography dataset, a CSV file of
//! latitude/longitude/elevation triples. The schema is dictated by the external
//! dataset, not by this crate.
//!
//! A missing dataset file degrades to an empty record list rather than failing
//! the request; a present but malformed file is a real error and propagates.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::skyfall_errors::SkyfallError;

/// Default location of the topography dataset, relative to the working
/// directory.
pub const TOPOGRAPHY_DATASET: &str = "data/USGC.csv";

/// One sample of the topography dataset.
///
/// Units: `lat`/`lon` in decimal degrees, `elevation` in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopographyRecord {
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
}

/// Load the topography dataset from a CSV file.
///
/// Arguments
/// ---------
/// * `path`: path to the dataset file, with a `lat,lon,elevation` header row
///
/// Return
/// ------
/// * The records in file order; an empty vector if the file does not exist
/// * [`SkyfallError::CsvError`] for a malformed row
/// * [`SkyfallError::IoError`] for any other file access failure
pub fn load_topography(path: &Path) -> Result<Vec<TopographyRecord>, SkyfallError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "topography dataset not found, returning no records");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut csv_reader = csv::Reader::from_reader(file);
    csv_reader
        .deserialize()
        .map(|record| record.map_err(SkyfallError::from))
        .collect()
}

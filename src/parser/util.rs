//! Utility functions for opening input and output files.

use anyhow::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use crate::error::ChipPrepError;

/// Creates a buffered reader that automatically handles gzip-compressed files.
///
/// This function checks if the file path ends with ".gz" and wraps the file
/// in a GzDecoder if so. Otherwise, it returns a plain buffered reader.
pub fn create_buffered_reader(file: File, path: &Path) -> Box<dyn BufRead + Send> {
    if path.to_string_lossy().ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Open an input file for buffered reading.
///
/// A missing file fails with [`ChipPrepError::FileNotFound`].
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path).map_err(|e| ChipPrepError::from_io(path, e))?;
    Ok(create_buffered_reader(file, path))
}

/// Create (or truncate) an output file for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| ChipPrepError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

//! Error taxonomy shared by both tools.
//!
//! Library operations return `anyhow::Result`; the root cause of every
//! failure they raise themselves is a [`ChipPrepError`], so callers can
//! `downcast_ref` to tell the cases apart.

use std::io;
use std::path::PathBuf;

/// Failures raised while filtering or transforming BED files.
///
/// None of these are recoverable: the run stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum ChipPrepError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A file could not be created, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line has fewer fields than the configured column requires.
    #[error("line {line_number}: column {column} out of range ({num_fields} fields): {line:?}")]
    IndexOutOfRange {
        line_number: u64,
        column: usize,
        num_fields: usize,
        line: String,
    },

    #[error("line {line_number}: chromosome '{chrom}' not found in chromosome sizes")]
    KeyNotFound { chrom: String, line_number: u64 },

    /// A field that must hold an integer does not.
    #[error("line {line_number}: invalid {field} '{value}': expected an integer")]
    Parse {
        field: &'static str,
        value: String,
        line_number: u64,
    },

    /// A window bound does not fit in a 64-bit coordinate.
    #[error("line {line_number}: TSS window around {tss} overflows the coordinate range")]
    CoordinateOverflow { tss: i64, line_number: u64 },

    /// A strand value other than '+' or '-' under the strict strand policy.
    #[error("line {line_number}: invalid strand '{value}': expected '+' or '-'")]
    InvalidStrand { value: String, line_number: u64 },
}

impl ChipPrepError {
    /// Wrap an I/O error, turning `NotFound` into [`ChipPrepError::FileNotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            ChipPrepError::FileNotFound(path)
        } else {
            ChipPrepError::Io { path, source }
        }
    }
}

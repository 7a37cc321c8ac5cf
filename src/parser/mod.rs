//! Parsers for genomic file formats.

pub mod bed;
pub mod chrom_sizes;
pub mod util;

pub use bed::split_fields;
pub use chrom_sizes::ChromSizes;
pub use util::{create_output, open_input};

//! chipprep - BED preprocessing for ChIP-seq pipelines.
//!
//! This library backs two command-line tools:
//!
//! - `genes-from-bed`: keep the lines of an annotation file whose feature
//!   column equals "gene", copied byte-for-byte.
//! - `genes-to-tss`: turn gene-body intervals into strand-aware windows
//!   around the transcription start site, clipped to chromosome bounds.
//!
//! # Example
//!
//! ```ignore
//! use chipprep::config::TssConfig;
//! use chipprep::parser::ChromSizes;
//! use chipprep::tss::transform_bed;
//! use std::io::BufReader;
//!
//! let mut sizes = ChromSizes::new();
//! sizes.insert("chr1", 1000);
//! let bed = "chr1\t500\t600\tgeneA\t0\t+\n";
//! let mut out = Vec::new();
//! transform_bed(BufReader::new(bed.as_bytes()), &mut out, &sizes, &TssConfig::new(50, 10, 5))?;
//! assert_eq!(out, b"chr1\t450\t510\tgeneA\t0\t+\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod parser;
pub mod progress;
pub mod tss;
pub mod types;

pub use config::{FilterConfig, StrandPolicy, TssConfig};
pub use error::ChipPrepError;
pub use filter::{filter_genes, run_gene_filter, FilterStats};
pub use parser::ChromSizes;
pub use progress::{NoProgress, ProgressObserver, StdoutProgress};
pub use tss::{run_tss_transform, transform_bed, TransformStats};
pub use types::{GeneInterval, Strand, TssWindow};

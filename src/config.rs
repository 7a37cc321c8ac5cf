//! Configuration and defaults for chipprep.
//!
//! This module contains the configuration structures and default values
//! that control the gene filter and the TSS window transformer.

use anyhow::{bail, Result};

/// Feature literal the gene filter keeps by default.
pub const DEFAULT_FEATURE: &str = "gene";

/// Number of lines between progress reports of the gene filter.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Strand column of a standard BED6 file.
pub const DEFAULT_STRAND_COL: usize = 5;

/// Largest accepted upstream or downstream radius (1 Tbp).
pub const MAX_RADIUS: i64 = 1_000_000_000_000;

/// How strand values other than '+' and '-' are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrandPolicy {
    /// Anything other than '+' is handled as minus strand.
    #[default]
    Lenient,
    /// Anything other than '+' or '-' is an error.
    Strict,
}

/// Configuration for the gene filter.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Zero-based column holding the feature type.
    pub gene_col: usize,
    /// Value the column must equal for a line to be kept.
    pub feature: String,
    /// Report progress every this many lines (0 disables reporting).
    pub progress_interval: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            gene_col: 2, // feature column of a GTF file
            feature: DEFAULT_FEATURE.to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl FilterConfig {
    /// Create a config filtering on the given column with default values otherwise.
    pub fn new(gene_col: usize) -> Self {
        FilterConfig {
            gene_col,
            ..Self::default()
        }
    }
}

/// Configuration for the TSS window transformer.
#[derive(Debug, Clone)]
pub struct TssConfig {
    /// Upstream radius in bp.
    pub us_radius: i64,
    /// Downstream radius in bp.
    pub ds_radius: i64,
    /// Zero-based column holding the strand.
    pub strand_col: usize,
    pub strand_policy: StrandPolicy,
}

impl Default for TssConfig {
    fn default() -> Self {
        TssConfig {
            us_radius: 0,
            ds_radius: 0,
            strand_col: DEFAULT_STRAND_COL,
            strand_policy: StrandPolicy::Lenient,
        }
    }
}

impl TssConfig {
    /// Create a config with the given radii and strand column.
    pub fn new(us_radius: i64, ds_radius: i64, strand_col: usize) -> Self {
        TssConfig {
            us_radius,
            ds_radius,
            strand_col,
            ..Self::default()
        }
    }

    /// Reject negative radii and radii above [`MAX_RADIUS`].
    pub fn validate(&self) -> Result<()> {
        if self.us_radius < 0 {
            bail!("The upstream radius cannot be lower than 0 bps.");
        }
        if self.ds_radius < 0 {
            bail!("The downstream radius cannot be lower than 0 bps.");
        }
        if self.us_radius > MAX_RADIUS {
            bail!("The upstream radius cannot exceed {} bps.", MAX_RADIUS);
        }
        if self.ds_radius > MAX_RADIUS {
            bail!("The downstream radius cannot exceed {} bps.", MAX_RADIUS);
        }
        Ok(())
    }

    /// Number of fields every BED line must have: columns 0-4 plus the strand column.
    pub fn required_fields(&self) -> usize {
        std::cmp::max(5, self.strand_col + 1)
    }
}

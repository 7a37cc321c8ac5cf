//! CLI entry point for the gene filter.
//!
//! Copies the lines of an annotation file whose feature column equals
//! "gene" into a new file.

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;

use chipprep::cli::{init_logging, parse_args};
use chipprep::config::{FilterConfig, DEFAULT_FEATURE};
use chipprep::filter::run_gene_filter;
use chipprep::progress::StdoutProgress;

/// Filter out genes from a BED or GTF file.
#[derive(Parser, Debug)]
#[command(name = "genes-from-bed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Annotation file (BED or GTF, optionally .gz)
    bed: PathBuf,

    /// Zero-based index of the feature column
    gene_col: usize,

    /// Output file
    output: PathBuf,

    /// Feature value to keep
    #[arg(long = "feature", default_value = DEFAULT_FEATURE)]
    feature: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args: Args = parse_args();
    init_logging(args.verbose);

    let config = FilterConfig {
        feature: args.feature.clone(),
        ..FilterConfig::new(args.gene_col)
    };

    run_gene_filter(&args.bed, &args.output, &config, &mut StdoutProgress)?;

    info!("Done!");
    Ok(())
}

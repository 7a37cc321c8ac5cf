//! CLI entry point for the TSS window transformer.
//!
//! Converts a BED file of gene bodies into windows from `us_radius`
//! upstream to `ds_radius` downstream of each TSS.

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;

use chipprep::cli::{init_logging, parse_args};
use chipprep::config::{StrandPolicy, TssConfig};
use chipprep::tss::run_tss_transform;

/// Convert gene-body intervals to strand-aware TSS windows.
#[derive(Parser, Debug)]
#[command(name = "genes-to-tss")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// BED file of gene bodies (optionally .gz)
    input_bed: PathBuf,

    /// Chromosome sizes file (chrom<TAB>length)
    chrom_sizes: PathBuf,

    /// Output BED file
    output_bed: PathBuf,

    /// Upstream radius in bp
    #[arg(allow_negative_numbers = true)]
    us_radius: i64,

    /// Downstream radius in bp
    #[arg(allow_negative_numbers = true)]
    ds_radius: i64,

    /// Zero-based index of the strand column
    strand_col: usize,

    /// Fail on strand values other than '+' or '-' instead of treating them as minus strand
    #[arg(long = "strict-strand")]
    strict_strand: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args: Args = parse_args();
    init_logging(args.verbose);

    let mut config = TssConfig::new(args.us_radius, args.ds_radius, args.strand_col);
    if args.strict_strand {
        config.strand_policy = StrandPolicy::Strict;
    }

    run_tss_transform(&args.input_bed, &args.chrom_sizes, &args.output_bed, &config)?;

    info!("Done!");
    Ok(())
}

//! TSS (Transcription Start Site) window transformation.
//!
//! Converts gene-body intervals into windows anchored at the TSS. For the
//! plus strand the TSS is the interval start, for the minus strand the
//! interval end, and upstream/downstream swap direction accordingly:
//!
//! ```text
//!  plus:   start-us ......|TSS=start|...... start+ds      ---gene--->
//!  minus:  end-ds   ......|TSS=end  |...... end+us        <---gene---
//! ```
//!
//! Windows are clipped to 0 on the plus strand and to the chromosome
//! length on the minus strand.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::{StrandPolicy, TssConfig};
use crate::error::ChipPrepError;
use crate::output::format_bed_line;
use crate::parser::bed::split_fields;
use crate::parser::util::{create_output, open_input};
use crate::parser::ChromSizes;
use crate::types::{GeneInterval, Strand, TssWindow};

/// Counters collected while transforming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub records: u64,
    pub plus_strand: u64,
    pub minus_strand: u64,
    /// Records whose window was cut at a chromosome boundary.
    pub clipped: u64,
}

/// Window `[max(start - us, 0), start + ds)` around a plus-strand TSS.
///
/// `None` if `start + ds` does not fit in an `i64`; an underflowing
/// `start - us` is clipped to 0 like any other negative start.
pub fn plus_strand_window(start: i64, us_radius: i64, ds_radius: i64) -> Option<TssWindow> {
    let end = start.checked_add(ds_radius)?;
    let (window_start, clipped) = match start.checked_sub(us_radius) {
        Some(raw_start) if raw_start >= 0 => (raw_start, false),
        _ => (0, true),
    };
    Some(TssWindow {
        start: window_start,
        end,
        clipped,
    })
}

/// Window `[end - ds, min(end + us, chrom_len))` around a minus-strand TSS.
///
/// The start is not clipped. `None` if `end - ds` does not fit in an
/// `i64`; an overflowing `end + us` is clipped to `chrom_len`.
pub fn minus_strand_window(
    end: i64,
    us_radius: i64,
    ds_radius: i64,
    chrom_len: i64,
) -> Option<TssWindow> {
    let start = end.checked_sub(ds_radius)?;
    let (window_end, clipped) = match end.checked_add(us_radius) {
        Some(raw_end) if raw_end <= chrom_len => (raw_end, false),
        _ => (chrom_len, true),
    };
    Some(TssWindow {
        start,
        end: window_end,
        clipped,
    })
}

/// Resolve the strand of an interval under the given policy.
pub fn resolve_strand(
    strand: &str,
    policy: StrandPolicy,
    line_number: u64,
) -> Result<Strand, ChipPrepError> {
    match policy {
        StrandPolicy::Lenient => Ok(if strand == "+" {
            Strand::Positive
        } else {
            Strand::Negative
        }),
        StrandPolicy::Strict => {
            Strand::from_symbol(strand).ok_or_else(|| ChipPrepError::InvalidStrand {
                value: strand.to_string(),
                line_number,
            })
        }
    }
}

/// Compute the TSS window of one interval.
///
/// Only the minus strand needs the chromosome length, so an unknown
/// chromosome on the plus strand is not an error.
pub fn compute_window(
    interval: &GeneInterval<'_>,
    strand: Strand,
    sizes: &ChromSizes,
    config: &TssConfig,
    line_number: u64,
) -> Result<TssWindow, ChipPrepError> {
    let tss = strand.tss(interval.start, interval.end);
    let window = match strand {
        Strand::Positive => plus_strand_window(tss, config.us_radius, config.ds_radius),
        Strand::Negative => {
            let chrom_len = sizes
                .get(interval.chrom)
                .ok_or_else(|| ChipPrepError::KeyNotFound {
                    chrom: interval.chrom.to_string(),
                    line_number,
                })?;
            minus_strand_window(tss, config.us_radius, config.ds_radius, chrom_len)
        }
    };
    window.ok_or(ChipPrepError::CoordinateOverflow { tss, line_number })
}

/// Transform every BED line from `reader` into a TSS window line on `writer`.
///
/// One output line per input line, in input order. The first bad line
/// aborts the whole transformation.
pub fn transform_bed<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    sizes: &ChromSizes,
    config: &TssConfig,
) -> Result<TransformStats> {
    let mut stats = TransformStats::default();
    let required_fields = config.required_fields();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.context("Failed to read BED line")?;
        let line_number = idx as u64 + 1;

        let fields = split_fields(&line);
        let interval =
            GeneInterval::from_fields(&fields, config.strand_col, required_fields, line_number)?;
        let strand = resolve_strand(interval.strand, config.strand_policy, line_number)?;
        let window = compute_window(&interval, strand, sizes, config, line_number)?;

        stats.records += 1;
        match strand {
            Strand::Positive => stats.plus_strand += 1,
            Strand::Negative => stats.minus_strand += 1,
        }
        if window.clipped {
            stats.clipped += 1;
            debug!(
                "line {}: {} strand window for {} clipped to {}-{}",
                line_number, strand, interval.name, window.start, window.end
            );
        }

        writeln!(writer, "{}", format_bed_line(&interval, &window))
            .context("Failed to write BED line")?;
    }

    writer.flush().context("Failed to flush output")?;
    Ok(stats)
}

/// Transform the BED file at `input` into TSS windows written to `output`.
///
/// The chromosome sizes are read completely before the first BED line.
pub fn run_tss_transform(
    input: &Path,
    chrom_sizes: &Path,
    output: &Path,
    config: &TssConfig,
) -> Result<TransformStats> {
    config.validate()?;

    info!("Parsing chromosome sizes: {}", chrom_sizes.display());
    let sizes = ChromSizes::from_path(chrom_sizes)?;
    if sizes.is_empty() {
        warn!(
            "No chromosome sizes in {}; any minus-strand record will fail",
            chrom_sizes.display()
        );
    } else {
        info!("{} chromosomes loaded", sizes.len());
    }

    info!("Processing BED file: {}", input.display());
    let reader = open_input(input)?;

    info!("Writing output to: {}", output.display());
    let writer = create_output(output)?;

    let stats = transform_bed(reader, writer, &sizes, config)
        .with_context(|| format!("Failed to transform {}", input.display()))?;

    info!(
        "{} records ({} plus, {} minus), {} clipped at chromosome bounds",
        stats.records, stats.plus_strand, stats.minus_strand, stats.clipped
    );
    Ok(stats)
}

//! Output formatting for TSS windows.

use crate::types::{GeneInterval, TssWindow};

/// Format one output BED line (without terminator).
///
/// Columns: chrom, window start, window end, name, score, strand, then the
/// interval's extra columns unchanged.
pub fn format_bed_line(interval: &GeneInterval<'_>, window: &TssWindow) -> String {
    let mut line = format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        interval.chrom, window.start, window.end, interval.name, interval.score, interval.strand
    );

    for field in interval.extra {
        line.push('\t');
        line.push_str(field);
    }

    line
}

//! Gene filter.
//!
//! Keeps the lines of a tab-delimited annotation file (BED or GTF) whose
//! feature column equals a literal such as "gene". Kept lines are copied
//! byte-for-byte, line terminator included; '#' comment lines are dropped.

use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::FilterConfig;
use crate::error::ChipPrepError;
use crate::parser::util::{create_output, open_input};
use crate::progress::ProgressObserver;

/// Counters collected while filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read, comment lines included.
    pub lines_read: u64,
    pub comments_skipped: u64,
    pub lines_kept: u64,
}

/// Return the `column`-th tab-separated field of `line` after trailing
/// whitespace is removed, or the field count if the line is too short.
///
/// Leading whitespace is kept, so a line starting with a tab has an empty
/// first field and its columns are not shifted.
fn field_at(line: &[u8], column: usize) -> std::result::Result<&[u8], usize> {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |pos| pos + 1);
    let trimmed = &line[..end];

    trimmed
        .split(|&b| b == b'\t')
        .nth(column)
        .ok_or_else(|| trimmed.split(|&b| b == b'\t').count())
}

/// Filter annotation lines from `reader` into `writer`.
///
/// Every `config.progress_interval` lines (comments counted) the observer
/// is told how many lines have been processed. Fails with
/// [`ChipPrepError::IndexOutOfRange`] on the first non-comment line that
/// has no `config.gene_col` field.
pub fn filter_genes<R, W, P>(
    mut reader: R,
    mut writer: W,
    config: &FilterConfig,
    progress: &mut P,
) -> Result<FilterStats>
where
    R: BufRead,
    W: Write,
    P: ProgressObserver + ?Sized,
{
    let mut stats = FilterStats::default();
    let feature = config.feature.as_bytes();
    let mut line = Vec::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut line)
            .context("Failed to read annotation line")?;
        if bytes_read == 0 {
            break;
        }

        stats.lines_read += 1;
        if config.progress_interval > 0 && stats.lines_read % config.progress_interval == 0 {
            progress.on_progress(stats.lines_read);
        }

        if line.first() == Some(&b'#') {
            stats.comments_skipped += 1;
            continue;
        }

        let field = field_at(&line, config.gene_col).map_err(|num_fields| {
            ChipPrepError::IndexOutOfRange {
                line_number: stats.lines_read,
                column: config.gene_col,
                num_fields,
                line: String::from_utf8_lossy(&line).trim_end().to_string(),
            }
        })?;

        if field == feature {
            writer
                .write_all(&line)
                .context("Failed to write annotation line")?;
            stats.lines_kept += 1;
        }
    }

    writer.flush().context("Failed to flush output")?;
    Ok(stats)
}

/// Filter the annotation file at `input` into a new file at `output`.
pub fn run_gene_filter<P>(
    input: &Path,
    output: &Path,
    config: &FilterConfig,
    progress: &mut P,
) -> Result<FilterStats>
where
    P: ProgressObserver + ?Sized,
{
    info!("Filtering annotations: {}", input.display());
    let reader = open_input(input)?;

    info!("Writing output to: {}", output.display());
    let writer = create_output(output)?;

    let stats = filter_genes(reader, writer, config, progress)
        .with_context(|| format!("Failed to filter {}", input.display()))?;

    info!(
        "{} lines read, {} comments skipped, {} '{}' lines kept",
        stats.lines_read, stats.comments_skipped, stats.lines_kept, config.feature
    );
    Ok(stats)
}

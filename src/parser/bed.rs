//! BED record parsing.
//!
//! Turns a tab-split BED line into a [`GeneInterval`] view. Parsing is
//! strict: short rows and non-integer coordinates are errors, not skipped.

use crate::error::ChipPrepError;
use crate::types::GeneInterval;

/// Split a BED line into fields, ignoring surrounding whitespace.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split('\t').collect()
}

/// Parse a coordinate field.
fn parse_coord(field: &'static str, value: &str, line_number: u64) -> Result<i64, ChipPrepError> {
    value.parse().map_err(|_| ChipPrepError::Parse {
        field,
        value: value.to_string(),
        line_number,
    })
}

impl<'a> GeneInterval<'a> {
    /// Build an interval from the fields of one BED line.
    ///
    /// `required_fields` is the minimum field count for the configured
    /// strand column (at least 5: chrom, start, end, name, score).
    pub fn from_fields(
        fields: &'a [&'a str],
        strand_col: usize,
        required_fields: usize,
        line_number: u64,
    ) -> Result<Self, ChipPrepError> {
        if fields.len() < required_fields {
            return Err(ChipPrepError::IndexOutOfRange {
                line_number,
                column: required_fields - 1,
                num_fields: fields.len(),
                line: fields.join("\t"),
            });
        }

        let start = parse_coord("start", fields[1], line_number)?;
        let end = parse_coord("end", fields[2], line_number)?;

        let extra: &[&str] = if fields.len() > 6 { &fields[6..] } else { &[] };

        Ok(GeneInterval {
            chrom: fields[0],
            start,
            end,
            name: fields[3],
            score: fields[4],
            strand: fields[strand_col],
            extra,
        })
    }
}

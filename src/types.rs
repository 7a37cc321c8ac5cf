//! Core data structures for chipprep.
//!
//! This module contains the record views and small value types shared by
//! the gene filter and the TSS window transformer.

use std::fmt;

/// Orientation of a gene, which decides where its TSS lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Positive,
    Negative,
}

impl Strand {
    /// Strand for a BED strand symbol; `None` for anything but '+' or '-'.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Strand::Positive),
            "-" => Some(Strand::Negative),
            _ => None,
        }
    }

    /// TSS coordinate of a `[start, end)` gene body on this strand.
    pub fn tss(self, start: i64, end: i64) -> i64 {
        match self {
            Strand::Positive => start,
            Strand::Negative => end,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Positive => f.write_str("plus"),
            Strand::Negative => f.write_str("minus"),
        }
    }
}

/// A BED record viewed as a gene body.
///
/// Borrows from the line it was parsed from; `strand` is the raw text of
/// the configured strand column, which need not be column 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneInterval<'a> {
    pub chrom: &'a str,
    /// 0-based start.
    pub start: i64,
    /// Half-open end.
    pub end: i64,
    pub name: &'a str,
    pub score: &'a str,
    pub strand: &'a str,
    /// Fields at index 6 and beyond, in file order.
    pub extra: &'a [&'a str],
}

/// A window around a transcription start site, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TssWindow {
    pub start: i64,
    pub end: i64,
    /// True when either bound was pulled in to stay on the chromosome.
    pub clipped: bool,
}

//! Chromosome sizes parser.
//!
//! Reads the two-column `chrom<TAB>length` table (e.g. UCSC `*.chrom.sizes`)
//! used to keep TSS windows on the chromosome.

use ahash::AHashMap;
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

use crate::error::ChipPrepError;
use crate::parser::util::open_input;

/// Chromosome name to length lookup, built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ChromSizes {
    lengths: AHashMap<String, i64>,
}

impl ChromSizes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a chromosome sizes file (supports .gz).
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = open_input(path)?;
        Self::from_reader(reader)
            .with_context(|| format!("Failed to parse chromosome sizes: {}", path.display()))
    }

    /// Parse chromosome sizes from a reader.
    ///
    /// Every line must carry a name and an integer length; a name seen
    /// twice keeps the last length.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut sizes = ChromSizes::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result.context("Failed to read chromosome sizes line")?;
            let line_number = idx as u64 + 1;

            let fields: Vec<&str> = line.trim().split('\t').collect();
            let Some(length_str) = fields.get(1) else {
                return Err(ChipPrepError::IndexOutOfRange {
                    line_number,
                    column: 1,
                    num_fields: fields.len(),
                    line: line.clone(),
                }
                .into());
            };

            let length = length_str
                .parse::<i64>()
                .ok()
                .filter(|len| *len >= 0)
                .ok_or_else(|| ChipPrepError::Parse {
                    field: "chromosome length",
                    value: length_str.to_string(),
                    line_number,
                })?;

            sizes.insert(fields[0], length);
        }

        Ok(sizes)
    }

    /// Set the length of a chromosome.
    pub fn insert(&mut self, chrom: &str, length: i64) {
        self.lengths.insert(chrom.to_string(), length);
    }

    /// Length of a chromosome, if known.
    pub fn get(&self, chrom: &str) -> Option<i64> {
        self.lengths.get(chrom).copied()
    }

    /// Number of chromosomes in the table.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

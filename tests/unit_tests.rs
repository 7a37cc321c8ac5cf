//! Library-level tests for the gene filter and the TSS window transformer.
//!
//! These tests check the coordinate arithmetic on both strands and the
//! filtering guarantees on in-memory inputs.

use chipprep::config::{FilterConfig, TssConfig};
use chipprep::error::ChipPrepError;
use chipprep::filter::filter_genes;
use chipprep::parser::ChromSizes;
use chipprep::progress::NoProgress;
use chipprep::tss::{minus_strand_window, plus_strand_window, transform_bed};
use std::io::BufReader;

// -------------------------------------------------------------------------
// Helper functions
// -------------------------------------------------------------------------

fn chrom_sizes(content: &str) -> ChromSizes {
    ChromSizes::from_reader(BufReader::new(content.as_bytes())).unwrap()
}

fn transform(content: &str, sizes: &ChromSizes, config: &TssConfig) -> String {
    let mut output = Vec::new();
    transform_bed(BufReader::new(content.as_bytes()), &mut output, sizes, config).unwrap();
    String::from_utf8(output).unwrap()
}

fn filter(content: &str, gene_col: usize) -> String {
    let mut output = Vec::new();
    filter_genes(
        BufReader::new(content.as_bytes()),
        &mut output,
        &FilterConfig::new(gene_col),
        &mut NoProgress,
    )
    .unwrap();
    String::from_utf8(output).unwrap()
}

fn column(line: &str, idx: usize) -> i64 {
    line.split('\t').nth(idx).unwrap().parse().unwrap()
}

// -------------------------------------------------------------------------
// 1. Window arithmetic
// -------------------------------------------------------------------------

mod test_window_arithmetic {
    use super::*;

    #[test]
    fn test_plus_strand_formula() {
        for (start, us, ds) in [(0, 0, 0), (10, 5, 5), (10, 50, 5), (1_000_000, 2500, 500)] {
            let window = plus_strand_window(start, us, ds).unwrap();
            assert_eq!(window.start, std::cmp::max(start - us, 0));
            assert_eq!(window.end, start + ds);
        }
    }

    #[test]
    fn test_minus_strand_formula() {
        let chrom_len = 1000;
        for (end, us, ds) in [(600, 50, 10), (990, 50, 10), (1000, 0, 0), (20, 5, 100)] {
            let window = minus_strand_window(end, us, ds, chrom_len).unwrap();
            assert_eq!(window.start, end - ds);
            assert_eq!(window.end, std::cmp::min(end + us, chrom_len));
        }
    }

    #[test]
    fn test_minus_strand_clipped_exactly_to_chrom_len() {
        let window = minus_strand_window(990, 50, 10, 1000).unwrap();
        assert_eq!(window.end, 1000);
        assert!(window.clipped);
    }

    #[test]
    fn test_zero_radii_collapse_to_tss() {
        let plus = plus_strand_window(500, 0, 0).unwrap();
        assert_eq!((plus.start, plus.end), (500, 500));

        let minus = minus_strand_window(600, 0, 0, 1000).unwrap();
        assert_eq!((minus.start, minus.end), (600, 600));
    }
}

// -------------------------------------------------------------------------
// 2. TSS window transformer
// -------------------------------------------------------------------------

mod test_transform_bed {
    use super::*;

    #[test]
    fn test_plus_strand_scenario() {
        let sizes = chrom_sizes("chr1\t1000");
        let output = transform(
            "chr1\t500\t600\tgeneA\t0\t+",
            &sizes,
            &TssConfig::new(50, 10, 5),
        );
        assert_eq!(output, "chr1\t450\t510\tgeneA\t0\t+\n");
    }

    #[test]
    fn test_minus_strand_scenario() {
        let sizes = chrom_sizes("chr1\t1000");
        let output = transform(
            "chr1\t500\t600\tgeneA\t0\t-",
            &sizes,
            &TssConfig::new(50, 10, 5),
        );
        assert_eq!(output, "chr1\t590\t650\tgeneA\t0\t-\n");
    }

    #[test]
    fn test_minus_strand_boundary_clip() {
        let sizes = chrom_sizes("chr1\t1000");
        let output = transform(
            "chr1\t500\t980\tgeneA\t0\t-",
            &sizes,
            &TssConfig::new(50, 10, 5),
        );
        assert_eq!(output, "chr1\t970\t1000\tgeneA\t0\t-\n");
    }

    #[test]
    fn test_order_preserved() {
        let sizes = chrom_sizes("chr1\t1000\nchr2\t500\n");
        let input = "chr2\t100\t200\tb\t0\t-\nchr1\t100\t200\ta\t0\t+\nchr2\t10\t20\tc\t0\t+\n";
        let output = transform(input, &sizes, &TssConfig::new(10, 10, 5));
        let names: Vec<&str> = output
            .lines()
            .map(|l| l.split('\t').nth(3).unwrap())
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_one_output_line_per_input_line() {
        let sizes = chrom_sizes("chr1\t100000\n");
        let mut input = String::new();
        for i in 0..50 {
            let strand = if i % 2 == 0 { "+" } else { "-" };
            input.push_str(&format!(
                "chr1\t{}\t{}\tg{}\t0\t{}\n",
                i * 100,
                i * 100 + 80,
                i,
                strand
            ));
        }
        let output = transform(&input, &sizes, &TssConfig::new(200, 50, 5));
        assert_eq!(output.lines().count(), 50);
    }

    #[test]
    fn test_rerun_with_zero_radii_keeps_plus_starts() {
        let sizes = chrom_sizes("chr1\t1000");
        let input = "chr1\t500\t600\ta\t0\t+\nchr1\t20\t300\tb\t0\t+\n";
        let first = transform(input, &sizes, &TssConfig::new(50, 10, 5));
        let second = transform(&first, &sizes, &TssConfig::new(0, 0, 5));

        for (a, b) in first.lines().zip(second.lines()) {
            assert_eq!(column(a, 1), column(b, 1));
        }
    }

    #[test]
    fn test_strand_column_other_than_five() {
        let sizes = chrom_sizes("chr1\t1000");
        let output = transform(
            "chr1\t500\t600\tgeneA\t0\t.\t-",
            &sizes,
            &TssConfig::new(50, 10, 6),
        );
        // The strand column value replaces column 5; column 6 is still copied
        assert_eq!(output, "chr1\t590\t650\tgeneA\t0\t-\t-\n");
    }

    #[test]
    fn test_missing_score_column_fails() {
        let sizes = chrom_sizes("chr1\t1000");
        let mut output = Vec::new();
        let err = transform_bed(
            BufReader::new("chr1\t500\t600\tgeneA\n".as_bytes()),
            &mut output,
            &sizes,
            &TssConfig::new(50, 10, 3),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChipPrepError>(),
            Some(ChipPrepError::IndexOutOfRange { line_number: 1, .. })
        ));
    }
}

// -------------------------------------------------------------------------
// 3. Gene filter
// -------------------------------------------------------------------------

mod test_filter_genes {
    use super::*;

    #[test]
    fn test_scenario_copies_line_verbatim() {
        let line = "chr1\t100\t200\tgeneA\t0\t+\tgene\n";
        assert_eq!(filter(line, 6), line);
    }

    #[test]
    fn test_comment_lines_never_kept() {
        let input = "#chr1\t100\t200\tgeneA\t0\t+\tgene\n# gene\n";
        assert_eq!(filter(input, 6), "");
    }

    #[test]
    fn test_only_exact_matches_kept_in_order() {
        let input = "a\tgene\nb\tgenes\nc\tGene\nd\tgene\ne\t gene\n";
        assert_eq!(filter(input, 1), "a\tgene\nd\tgene\n");
    }

    #[test]
    fn test_trailing_whitespace_ignored_for_match() {
        let input = "a\tgene \t\n";
        // Trailing whitespace is trimmed before splitting
        assert_eq!(filter(input, 1), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(filter("", 3), "");
    }
}

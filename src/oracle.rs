//! Oracle-file evaluation.
//!
//! An oracle file holds one identifier and its expected split per line,
//! tab-separated, with the expected tokens comma-separated:
//!
//! ```text
//! getInteger	get,Integer
//! usage_getdata	usage,get,data
//! ```
//!
//! Lines that are empty or start with `#` are skipped. Evaluation runs the
//! splitter over every entry in parallel and reports exact-match accuracy;
//! token comparison is case-insensitive.

use crate::error::{Result, SplitterError};
use crate::splitter::Splitter;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// One oracle entry: an identifier and its expected split.
#[derive(Debug, Clone)]
pub struct OracleEntry {
    pub identifier: String,
    pub expected: Vec<String>,
}

/// Result of evaluating a single oracle entry.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub identifier: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub matched: bool,
}

/// Aggregate oracle evaluation results.
#[derive(Debug, Clone, Default)]
pub struct OracleReport {
    pub total: usize,
    pub matched: usize,
    pub case_results: Vec<CaseResult>,
}

impl OracleReport {
    /// Exact-match accuracy (matched / total).
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }

    /// Print one line per failing case to stdout.
    pub fn print_details(&self) {
        println!("\n=== Oracle Results ===\n");
        for case in &self.case_results {
            if case.matched {
                continue;
            }
            println!(
                "[FAIL] {} - expected `{}` got `{}`",
                case.identifier,
                case.expected.join(","),
                case.actual.join(",")
            );
        }
    }

    /// Print summary metrics to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Summary ===\n");
        println!("Total identifiers: {}", self.total);
        println!(
            "Matched:           {} ({:.1}%)",
            self.matched,
            self.accuracy() * 100.0
        );
        println!(
            "Missed:            {} ({:.1}%)",
            self.total - self.matched,
            (1.0 - self.accuracy()) * 100.0
        );
    }
}

/// Load an oracle file.
pub fn load_oracle<P: AsRef<Path>>(path: P) -> Result<Vec<OracleEntry>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = simdutf8::basic::from_utf8(&bytes).map_err(|_| SplitterError::CorruptArtifact {
        path: path.to_path_buf(),
        reason: "oracle file is not valid UTF-8".to_string(),
    })?;

    let mut entries = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (identifier, tokens) =
            line.split_once('\t')
                .ok_or_else(|| SplitterError::CorruptArtifact {
                    path: path.to_path_buf(),
                    reason: format!("line {}: no tab separator", line_number + 1),
                })?;
        let expected: Vec<String> = tokens
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if identifier.is_empty() || expected.is_empty() {
            return Err(SplitterError::CorruptArtifact {
                path: path.to_path_buf(),
                reason: format!("line {}: empty identifier or token list", line_number + 1),
            });
        }
        entries.push(OracleEntry {
            identifier: identifier.trim().to_string(),
            expected,
        });
    }
    Ok(entries)
}

/// Evaluate a splitter against oracle entries, in parallel.
pub fn evaluate(splitter: &Splitter, entries: &[OracleEntry]) -> OracleReport {
    let case_results: Vec<CaseResult> = entries
        .par_iter()
        .map(|entry| {
            let actual = splitter.split(&entry.identifier);
            let matched = actual.len() == entry.expected.len()
                && actual
                    .iter()
                    .zip(&entry.expected)
                    .all(|(a, b)| a.eq_ignore_ascii_case(b));
            CaseResult {
                identifier: entry.identifier.clone(),
                expected: entry.expected.clone(),
                actual,
                matched,
            }
        })
        .collect();

    let matched = case_results.iter().filter(|c| c.matched).count();
    OracleReport {
        total: case_results.len(),
        matched,
        case_results,
    }
}

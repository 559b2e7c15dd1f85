//! Frequency table loading and case folding.
//!
//! The table maps tokens to positive occurrence counts mined from a large
//! code corpus. Two artifact forms are supported: a portable two-column
//! CSV (`word,frequency`) and a compact binary container, gzip-wrapped
//! when the file extension is `.pklz` or `.gz`. Both are read eagerly and
//! the table is immutable afterwards.

use crate::error::{Result, SplitterError};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use foldhash::{HashMap, HashMapExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

/// Immutable token-frequency table with its maximum count and total mass.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    highest: u64,
    total: u64,
}

impl FrequencyTable {
    /// Build a table from in-memory entries. Zero counts are discarded and
    /// duplicate keys keep the larger count.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for (word, value) in entries {
            let word = word.into();
            if word.is_empty() || value == 0 {
                continue;
            }
            let slot = counts.entry(word).or_insert(0);
            if value > *slot {
                *slot = value;
            }
        }
        Self::from_counts(counts)
    }

    /// Load a table from a file, dispatching on the extension: `.csv` is
    /// parsed as text, anything else as the binary container.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv")) {
            Self::from_csv_path(path)
        } else {
            Self::from_binary_path(path)
        }
    }

    /// Load a table from a two-column `word,frequency` CSV file. No header
    /// row is expected; one that happens to be present is rejected because
    /// its frequency column does not parse.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(&path)?;
        Self::parse_csv(&bytes, path.as_ref())
    }

    /// Load a table from CSV text supplied by a reader.
    pub fn from_csv_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse_csv(&bytes, Path::new("<csv reader>"))
    }

    fn parse_csv(bytes: &[u8], origin: &Path) -> Result<Self> {
        if simdutf8::basic::from_utf8(bytes).is_err() {
            return Err(SplitterError::CorruptArtifact {
                path: origin.to_path_buf(),
                reason: "frequency CSV is not valid UTF-8".to_string(),
            });
        }

        // Newline count bounds the entry count, so the map never rehashes.
        let mut counts = HashMap::with_capacity(bytecount::count(bytes, b'\n') + 1);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes);
        for record in reader.records() {
            let record = record?;
            let word = record.get(0).unwrap_or_default();
            let frequency = record.get(1).ok_or_else(|| SplitterError::CorruptArtifact {
                path: origin.to_path_buf(),
                reason: format!("row for {word:?} has no frequency column"),
            })?;
            let value: u64 =
                frequency
                    .trim()
                    .parse()
                    .map_err(|_| SplitterError::CorruptArtifact {
                        path: origin.to_path_buf(),
                        reason: format!("bad frequency {frequency:?} for {word:?}"),
                    })?;
            if word.is_empty() || value == 0 {
                return Err(SplitterError::CorruptArtifact {
                    path: origin.to_path_buf(),
                    reason: format!("entry {word:?},{value} violates non-empty/positive rule"),
                });
            }
            let slot = counts.entry(word.to_string()).or_insert(0);
            if value > *slot {
                *slot = value;
            }
        }
        Ok(Self::from_counts(counts))
    }

    /// Load a table from the binary container. A `.pklz` or `.gz` extension
    /// means gzip-wrapped; any other extension is read raw.
    pub fn from_binary_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);
        let counts: HashMap<String, u64> = if has_gzip_extension(path) {
            bincode::deserialize_from(GzDecoder::new(file))
        } else {
            bincode::deserialize_from(file)
        }
        .map_err(|e| SplitterError::CorruptArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if counts.keys().any(String::is_empty) || counts.values().any(|&v| v == 0) {
            return Err(SplitterError::CorruptArtifact {
                path: path.to_path_buf(),
                reason: "container holds an empty token or zero count".to_string(),
            });
        }
        Ok(Self::from_counts(counts))
    }

    /// Write the table as a binary container, gzip-wrapped when the
    /// extension is `.pklz` or `.gz`.
    pub fn to_binary_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = BufWriter::new(File::create(path)?);
        let corrupt = |e: bincode::Error| SplitterError::CorruptArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        if has_gzip_extension(path) {
            let mut encoder = GzEncoder::new(file, Compression::default());
            bincode::serialize_into(&mut encoder, &self.counts).map_err(corrupt)?;
            encoder.finish()?;
        } else {
            bincode::serialize_into(file, &self.counts).map_err(corrupt)?;
        }
        Ok(())
    }

    /// Collapse keys to lowercase, keeping the maximum count across case
    /// variants. The highest count is unchanged by construction.
    pub fn fold_case(self) -> Self {
        let mut folded: HashMap<String, u64> = HashMap::with_capacity(self.counts.len());
        for (word, value) in self.counts {
            let slot = folded.entry(word.to_lowercase()).or_insert(0);
            if value > *slot {
                *slot = value;
            }
        }
        Self {
            total: folded.values().sum(),
            highest: self.highest,
            counts: folded,
        }
    }

    /// Exact-key lookup.
    pub fn lookup(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// The maximum count in the table, zero when empty.
    pub fn highest(&self) -> u64 {
        self.highest
    }

    /// Sum of all counts in the table.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn from_counts(counts: HashMap<String, u64>) -> Self {
        let highest = counts.values().copied().max().unwrap_or(0);
        let total = counts.values().sum();
        Self {
            counts,
            highest,
            total,
        }
    }
}

fn has_gzip_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("pklz") || e.eq_ignore_ascii_case("gz"))
}

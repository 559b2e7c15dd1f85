//! English dictionary, special computing terms, and stemming.
//!
//! The dictionary is an immutable lowercase word set (an English word list
//! plus a lemma list in the shipped artifact) consulted through direct and
//! stemmed probes. Stemming uses the English Snowball stemmer, except that
//! words ending in `'s'` just drop the final `'s'`: the Snowball rules
//! mangle technical plurals like `mutexes` and `args` badly enough to
//! matter here.

use crate::constants;
use crate::error::{Result, SplitterError};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use foldhash::HashSet;
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Immutable word set with a stemmer, plus the built-in special computing
/// terms consulted for recognition.
pub struct Dictionary {
    words: HashSet<String>,
    stemmer: Stemmer,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Dictionary {
    /// A dictionary with no English words. Recognition still works for the
    /// special computing terms and the common terms with numbers, which is
    /// the degraded mode used when no dictionary artifact is available.
    pub fn builtin() -> Self {
        Self::from_words(std::iter::empty::<String>())
    }

    /// Build a dictionary from an iterator of words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Load a word set from a binary artifact: a serialized set of strings,
    /// gzip-wrapped when the extension is `.pklz` or `.gz`.
    pub fn from_binary_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);
        let gzipped = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("pklz") || e.eq_ignore_ascii_case("gz"));
        let words: HashSet<String> = if gzipped {
            bincode::deserialize_from(GzDecoder::new(file))
        } else {
            bincode::deserialize_from(file)
        }
        .map_err(|e| SplitterError::CorruptArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_words(words))
    }

    /// Write the word set as a binary artifact, gzip-wrapped when the
    /// extension is `.pklz` or `.gz`.
    pub fn to_binary_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = BufWriter::new(File::create(path)?);
        let gzipped = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("pklz") || e.eq_ignore_ascii_case("gz"));
        let corrupt = |e: bincode::Error| SplitterError::CorruptArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        if gzipped {
            let mut encoder = GzEncoder::new(file, Compression::default());
            bincode::serialize_into(&mut encoder, &self.words).map_err(corrupt)?;
            encoder.finish()?;
        } else {
            bincode::serialize_into(file, &self.words).map_err(corrupt)?;
        }
        Ok(())
    }

    /// Number of English words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no English words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stem a word. Words longer than one character ending in `'s'` drop
    /// the final `'s'`; everything else goes through the Snowball stemmer.
    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.len() > 1 && lower.ends_with('s') {
            let mut stripped = lower;
            stripped.pop();
            stripped
        } else {
            self.stemmer.stem(&lower).into_owned()
        }
    }

    /// Direct membership test, case-insensitive, no stemming.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Whether a word of length > 1 is in the dictionary directly or via
    /// its stem.
    pub fn in_dictionary(&self, word: &str) -> bool {
        if word.chars().count() <= 1 {
            return false;
        }
        let lower = word.to_lowercase();
        self.words.contains(lower.as_str()) || self.words.contains(self.stem(&lower).as_str())
    }

    /// Whether a token is a special case: a common term with numbers or a
    /// special computing term, directly or via its stem.
    pub fn is_special_case(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        constants::is_common_term_with_numbers(&lower)
            || constants::is_special_computing_term(&lower)
            || constants::is_special_computing_term(&self.stem(&lower))
    }

    /// Recognition test used by the scored splitter: special cases plus
    /// dictionary words.
    pub fn recognized(&self, token: &str) -> bool {
        self.is_special_case(token) || self.in_dictionary(token)
    }
}

//! idsplit: frequency-guided identifier splitting
//!
//! Splits program-source identifiers (`getInteger`, `readUTF8stream`,
//! `ABCFooBar`, `isbetterfile`) into word-like tokens, as a foundation for
//! natural-language processing of source code: feature extraction, topic
//! modeling, code search, and program comprehension.
//!
//! # Quick Start
//!
//! ```
//! use idsplit::{Dictionary, FrequencyTable, Splitter};
//!
//! // A table and dictionary are normally loaded from artifacts; small
//! // in-memory ones work the same way.
//! let table = FrequencyTable::from_entries([
//!     ("get", 1_500_000u64),
//!     ("data", 800_000),
//! ]);
//! let dictionary = Dictionary::from_words(["usage", "get", "data"]);
//!
//! let splitter = Splitter::new(table, dictionary);
//! assert_eq!(splitter.split("usage_getdata"), vec!["usage", "get", "data"]);
//! ```
//!
//! With the default artifacts installed (see
//! [`Splitter::from_default_artifacts`]), the module-level convenience
//! entry point lazily builds one shared instance:
//!
//! ```no_run
//! let tokens = idsplit::split("readUTF8stream").unwrap();
//! assert_eq!(tokens, vec!["read", "UTF8", "stream"]);
//! ```
//!
//! # How it works
//!
//! 1. An **elementary pass** splits on hard delimiters, digit runs, and
//!    forward camel-case transitions, protecting common terms with
//!    embedded numbers (`utf8`, `ipv4`, `sha256`).
//! 2. **Camel arbitration** decides, at acronym tails like `GPSmodule`,
//!    whether the uppercase letter belongs to the acronym or to the
//!    following word, by comparing frequency scores.
//! 3. **Same-case segmentation** recursively searches single-case runs
//!    (`isbetterfile`) for cut points whose halves outscore the whole
//!    string under a thresholded, exponent-rescaled frequency score, with
//!    a dictionary/stemmer recognition check, prefix/suffix veto lists,
//!    and re-ranked alternate splits.
//!
//! Pure rule-based splitters (no table, no dictionary) are exported from
//! the same crate: [`elementary_split`], [`pure_camel_split`],
//! [`safe_simple_split`], [`delimiter_split`], and [`digit_split`].

mod constants;
mod dictionary;
mod elementary;
mod error;
mod frequency;
pub mod oracle;
mod params;
mod splitter;

// Re-export the public API.
pub use dictionary::Dictionary;
pub use elementary::{
    HARD_DELIMITERS, delimiter_split, digit_split, elementary_split, pure_camel_split,
    safe_simple_split,
};
pub use error::{Result, SplitterError};
pub use frequency::FrequencyTable;
pub use params::Parameters;
pub use splitter::Splitter;

use std::sync::OnceLock;

static DEFAULT_SPLITTER: OnceLock<Splitter> = OnceLock::new();

/// Split an identifier with a process-wide default splitter, keeping digit
/// runs as tokens.
///
/// The default instance is built lazily on first use from the default
/// artifacts and reused afterwards; see
/// [`Splitter::from_default_artifacts`] for the lookup rules. Construction
/// failure is the only error this function can return.
pub fn split(identifier: &str) -> Result<Vec<String>> {
    split_with(identifier, true)
}

/// Like [`split`], with control over digit handling.
pub fn split_with(identifier: &str, keep_numbers: bool) -> Result<Vec<String>> {
    if let Some(splitter) = DEFAULT_SPLITTER.get() {
        return Ok(splitter.split_with(identifier, keep_numbers));
    }
    // Lost races just drop the duplicate instance.
    let splitter = Splitter::from_default_artifacts()?;
    Ok(DEFAULT_SPLITTER
        .get_or_init(|| splitter)
        .split_with(identifier, keep_numbers))
}

//! The scored splitter: frequency-guided identifier segmentation.
//!
//! An elementary pass handles delimiters, digits, and forward camel-case.
//! Remaining pieces go through camel arbitration (does the uppercase letter
//! at an acronym boundary belong to the left or the right token?) and then
//! a recursive same-case segmentation that hunts for cut points whose
//! halves outscore the whole string, vetoed by the prefix/suffix lists and
//! backed by a pool of alternate candidate splits.
//!
//! Raw frequencies span orders of magnitude, so comparisons happen on
//! `raw^exponent` with a small exponent; the rescaled values stay additive
//! without being normalized into probabilities.

use crate::constants;
use crate::dictionary::Dictionary;
use crate::elementary;
use crate::error::{Result, SplitterError};
use crate::frequency::FrequencyTable;
use crate::params::Parameters;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::trace;

/// Floor for the same-case threshold, so a strong sub-piece can still beat
/// a whole string that scores zero.
const MIN_SPLIT_SCORE: f64 = 5e-7;

/// Upper-to-lower boundary inside a piece that survived the elementary
/// camel split, i.e. the tail of an acronym run (`ABCFoo`, `GPSmodule`).
static ACRONYM_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z][a-z]").expect("invalid acronym pattern"));

/// Frequency-guided identifier splitter.
///
/// Owns its frequency table, dictionary, and parameters exclusively after
/// construction and never mutates them: [`Splitter::split`] is reentrant
/// and any number of threads may share one instance.
///
/// # Example
///
/// ```
/// use idsplit::{Dictionary, FrequencyTable, Splitter};
///
/// let table = FrequencyTable::from_entries([("some", 500_000u64), ("var", 600_000)]);
/// let dictionary = Dictionary::from_words(["some", "var"]);
/// let splitter = Splitter::new(table, dictionary);
/// assert_eq!(splitter.split("somevar"), vec!["some", "var"]);
/// ```
#[derive(Debug)]
pub struct Splitter {
    table: FrequencyTable,
    local: Option<FrequencyTable>,
    local_log_total: f64,
    dictionary: Dictionary,
    params: Parameters,
    highest: f64,
    recognition_floor: f64,
}

impl Splitter {
    /// Build a splitter with default parameters.
    pub fn new(frequencies: FrequencyTable, dictionary: Dictionary) -> Self {
        Self::build(frequencies, dictionary, Parameters::default())
    }

    /// Build a splitter with explicit parameters, validating them.
    pub fn with_params(
        frequencies: FrequencyTable,
        dictionary: Dictionary,
        params: Parameters,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self::build(frequencies, dictionary, params))
    }

    /// Build a splitter from the default artifacts: `frequencies.pklz` or
    /// `frequencies.csv`, plus `dictionary.pklz`, inside the directory
    /// named by `IDSPLIT_DATA_DIR` (default `./data`).
    ///
    /// A missing frequency artifact is fatal; a missing dictionary
    /// artifact degrades to [`Dictionary::builtin`].
    pub fn from_default_artifacts() -> Result<Self> {
        let dir = std::env::var_os("IDSPLIT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        let binary = dir.join("frequencies.pklz");
        let csv = dir.join("frequencies.csv");
        let table = if binary.exists() {
            FrequencyTable::from_binary_path(&binary)?
        } else if csv.exists() {
            FrequencyTable::from_csv_path(&csv)?
        } else {
            return Err(SplitterError::MissingFrequencyArtifact(binary));
        };

        let dict_path = dir.join("dictionary.pklz");
        let dictionary = if dict_path.exists() {
            Dictionary::from_binary_path(&dict_path)?
        } else {
            Dictionary::builtin()
        };

        Ok(Self::new(table, dictionary))
    }

    fn build(frequencies: FrequencyTable, dictionary: Dictionary, params: Parameters) -> Self {
        let table = if params.exact_case {
            frequencies
        } else {
            frequencies.fold_case()
        };
        let highest = table.highest() as f64;
        let recognition_floor = params.recognition_bias * highest;
        Self {
            table,
            local: None,
            local_log_total: 1.0,
            dictionary,
            params,
            highest,
            recognition_floor,
        }
    }

    /// Attach a project-specific frequency table. Local counts dominate:
    /// a token in both tables scores `local + global / log10(local_total)`,
    /// a token only in the local table scores its local count, and a token
    /// only in the global table scores its damped global count.
    pub fn with_local_frequencies(mut self, local: FrequencyTable) -> Self {
        let local = if self.params.exact_case {
            local
        } else {
            local.fold_case()
        };
        self.local_log_total = (local.total() as f64).log10().max(1.0);
        self.local = Some(local);
        self
    }

    /// The parameters this splitter was built with.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Split an identifier, keeping digit runs as tokens.
    pub fn split(&self, identifier: &str) -> Vec<String> {
        self.split_with(identifier, true)
    }

    /// Split an identifier. With `keep_numbers` false, leading digits are
    /// stripped and digit runs dropped, per the elementary rules.
    ///
    /// Total over any input; never fails after construction.
    pub fn split_with(&self, identifier: &str, keep_numbers: bool) -> Vec<String> {
        trace!(identifier, keep_numbers, "splitting");
        let mut results = Vec::new();
        for piece in elementary::elementary_split(identifier, keep_numbers) {
            if self.dictionary.recognized(&piece) {
                trace!(token = %piece, "recognized, emitted unchanged");
                results.push(piece);
                continue;
            }
            for part in self.arbitrate_camel(&piece) {
                let budget = part.len();
                results.extend(self.same_case_split(&part, budget));
            }
        }
        trace!(?results, "split complete");
        results
    }

    /// Decide whether the uppercase letter at an acronym tail starts the
    /// next token (`ABC|Foo`) or ends the previous one (`ABCF|oo`), by
    /// comparing the raw camel-preserving score against the biased
    /// adjusted score of the alternative.
    fn arbitrate_camel(&self, s: &str) -> Vec<String> {
        let Some(m) = ACRONYM_TAIL.find(s) else {
            return vec![s.to_string()];
        };
        let i = m.start();
        let camel_score = if i > 0 {
            self.raw_score(&s[i..])
        } else {
            self.raw_score(s)
        };
        let alt_score = self.adjusted_score(&s[i + 1..]) * self.params.camel_bias;
        trace!(piece = s, i, camel_score, alt_score, "camel arbitration");

        if camel_score >= alt_score {
            if i > 0 {
                vec![s[..i].to_string(), s[i..].to_string()]
            } else {
                vec![s.to_string()]
            }
        } else {
            vec![s[..=i].to_string(), s[i + 1..].to_string()]
        }
    }

    /// Recursive same-case segmentation.
    ///
    /// Scans every interior cut point, tracking a primary split (both
    /// halves beat the threshold, or the right half splits recursively)
    /// and a pool of alternates that qualified through recognition. The
    /// best alternate is only used when, re-ranked by piece count, it
    /// still clears the threshold. The depth budget bounds pathological
    /// recursion; exhaustion returns the string whole.
    fn same_case_split(&self, s: &str, budget: usize) -> Vec<String> {
        let char_count = s.chars().count();
        if char_count < 2 {
            return vec![s.to_string()];
        }
        if self.dictionary.recognized(s) {
            trace!(token = s, "recognized, not segmented");
            return vec![s.to_string()];
        }
        if budget == 0 {
            return vec![s.to_string()];
        }

        let threshold = self.adjusted_score(s).max(MIN_SPLIT_SCORE);
        trace!(token = s, threshold, "same-case scan");

        let mut best = -1.0_f64;
        let mut primary: Option<Vec<String>> = None;
        let mut alternates: Vec<(Vec<String>, f64)> = Vec::new();

        for (i, _) in s.char_indices().skip(1) {
            let left = &s[..i];
            let right = &s[i..];
            if constants::is_prefix(left) || (char_count > 5 && constants::is_suffix(right)) {
                continue;
            }

            let sl = self.adjusted_score(left);
            let sr = self.adjusted_score(right);
            let break_l = sl > threshold;
            let break_r = sr > threshold;
            trace!(left, right, sl, sr, break_l, break_r, "cut point");

            if break_l && break_r {
                if sl + sr > best {
                    best = sl + sr;
                    primary = Some(vec![left.to_string(), right.to_string()]);
                }
                alternates.push((vec![left.to_string(), right.to_string()], sl + sr));
            } else if break_l {
                if sl.max(sr) > self.recognition_floor && self.dictionary.recognized(right) {
                    alternates.push((vec![left.to_string(), right.to_string()], sl + sr));
                } else {
                    let tail = self.same_case_split(right, budget - 1);
                    if tail.len() > 1 {
                        let mut pieces = Vec::with_capacity(tail.len() + 1);
                        pieces.push(left.to_string());
                        pieces.extend(tail);
                        primary = Some(pieces);
                    } else if self.dictionary.is_special_case(right) {
                        alternates.push((vec![left.to_string(), right.to_string()], sl + sr));
                    }
                }
            } else if break_r {
                let left_ok = self.dictionary.recognized(left)
                    || left.chars().count() <= self.params.length_cutoff
                    || self.dictionary.is_special_case(right);
                let score_ok = sl.max(sr) > self.recognition_floor
                    || self.dictionary.recognized(right);
                if left_ok && score_ok {
                    alternates.push((vec![left.to_string(), right.to_string()], sl + sr));
                }
            }
        }

        if let Some(split) = primary {
            trace!(?split, "primary split");
            return split;
        }
        if let Some((pieces, score)) = alternates
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
        {
            let ranked = score / (pieces.len() as f64).powf(self.params.alt_exponent);
            if ranked > threshold {
                trace!(?pieces, ranked, "alternate split");
                return pieces;
            }
        }
        vec![s.to_string()]
    }

    /// Raw frequency of a token under the configured case policy. Common
    /// terms with numbers pin the table ceiling; a local table, when
    /// present, is blended with the damped global count.
    fn raw_score(&self, token: &str) -> f64 {
        if token.is_empty() {
            return 0.0;
        }
        let lower = token.to_lowercase();
        if constants::is_common_term_with_numbers(&lower) {
            return self.highest;
        }
        let global = self.probe(&self.table, token, &lower);
        let Some(local_table) = &self.local else {
            return global.unwrap_or(0.0);
        };
        match (self.probe(local_table, token, &lower), global) {
            (None, None) => 0.0,
            (Some(local), None) => local,
            (None, Some(global)) => global / self.local_log_total,
            (Some(local), Some(global)) => local + global / self.local_log_total,
        }
    }

    /// Probe one table under the case policy: exact, then capitalized,
    /// then lowercase when `exact_case`, otherwise just lowercase.
    fn probe(&self, table: &FrequencyTable, token: &str, lower: &str) -> Option<f64> {
        if self.params.exact_case {
            if let Some(count) = table.lookup(token) {
                return Some(count as f64);
            }
            if let Some(count) = table.lookup(&capitalize(lower)) {
                return Some(count as f64);
            }
        }
        table.lookup(lower).map(|count| count as f64)
    }

    /// Thresholded, exponent-rescaled score.
    fn adjusted_score(&self, token: &str) -> f64 {
        if token.is_empty() {
            return 0.0;
        }
        let raw = self.raw_score(token);
        if token.chars().count() <= self.params.length_cutoff
            && !self.dictionary.is_special_case(token)
            && raw <= self.params.short_min_freq as f64
        {
            return 0.0;
        }
        if raw <= self.params.low_freq_cutoff as f64 {
            return 0.0;
        }
        let exponent = if self.dictionary.recognized(token) {
            self.params.dict_word_exponent
        } else {
            self.params.normal_exponent
        };
        raw.powf(exponent)
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixture_table() -> FrequencyTable {
        FrequencyTable::from_entries([
            ("some", 500_000u64),
            ("var", 600_000),
            ("get", 1_500_000),
            ("data", 800_000),
            ("module", 900_000),
            ("foo", 1_200_000),
            ("bar", 1_000_000),
            ("visitor", 700_000),
            ("is", 2_000_000),
            ("better", 900_000),
            ("file", 1_800_000),
            ("nonnegative", 400_000),
            ("decimal", 600_000),
            ("type", 1_600_000),
            ("update", 1_100_000),
            ("cpu", 250),
            ("re", 800_000),
            ("token", 700_000),
            ("init", 900_000),
            ("db", 50_000),
            ("so", 50_000),
        ])
    }

    fn fixture_dictionary() -> Dictionary {
        Dictionary::from_words([
            "usage", "get", "data", "module", "visitor", "is", "better", "file", "nonnegative",
            "decimal", "type", "update", "some", "var", "big", "thing", "list", "threshold",
            "undirected",
        ])
    }

    fn fixture_splitter() -> Splitter {
        Splitter::new(fixture_table(), fixture_dictionary())
    }

    #[test]
    fn test_same_case_primary_split() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("somevar"), vec!["some", "var"]);
        assert_eq!(splitter.split("isbetterfile"), vec!["is", "better", "file"]);
    }

    #[test]
    fn test_recursive_descent() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("nonnegativedecimaltype"), vec![
            "nonnegative",
            "decimal",
            "type"
        ]);
    }

    #[test]
    fn test_delimiters_then_scoring() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("usage_getdata"), vec!["usage", "get", "data"]);
    }

    #[test]
    fn test_acronym_boundary_arbitration() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("GPSmodule"), vec!["GPS", "module"]);
        assert_eq!(splitter.split("ABCFooBar"), vec!["ABC", "Foo", "Bar"]);
        assert_eq!(splitter.split("ASTVisitor"), vec!["AST", "Visitor"]);
    }

    #[test]
    fn test_recognized_pieces_pass_through() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("getMAX"), vec!["get", "MAX"]);
        assert_eq!(splitter.split("bigTHING"), vec!["big", "THING"]);
        assert_eq!(splitter.split("SqlList"), vec!["Sql", "List"]);
        assert_eq!(splitter.split("mpegts"), vec!["mpegts"]);
        assert_eq!(splitter.split("argv"), vec!["argv"]);
        assert_eq!(splitter.split("threshold"), vec!["threshold"]);
    }

    #[test]
    fn test_common_term_preserved_through_scoring() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("aUTF8var"), vec!["a", "UTF8", "var"]);
    }

    #[test]
    fn test_strong_alternate_with_low_frequency_special_term() {
        // "cpu" sits below the low-frequency cutoff so its adjusted score
        // is zero, but recognition qualifies [update, cpu] as an alternate
        // that survives the length re-ranking.
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("updatecpu"), vec!["update", "cpu"]);
    }

    #[test]
    fn test_short_left_alternate() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("qtfile"), vec!["qt", "file"]);
    }

    #[test]
    fn test_prefix_veto_blocks_split() {
        // "re" scores well and "token" breaks the threshold, but "re" is on
        // the prefix veto list, so the cut is skipped.
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("retoken"), vec!["retoken"]);
    }

    #[test]
    fn test_unknown_string_returned_whole() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split("zzqxv"), vec!["zzqxv"]);
    }

    #[test]
    fn test_split_dropping_numbers() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.split_with("somevar3", false), vec!["some", "var"]);
        assert_eq!(splitter.split_with("somevar3", true), vec!["some", "var", "3"]);
    }

    #[test]
    fn test_empty_identifier() {
        let splitter = fixture_splitter();
        assert!(splitter.split("").is_empty());
    }

    #[test]
    fn test_raw_score_case_folding() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.raw_score("GET"), 1_500_000.0);
        assert_eq!(splitter.raw_score("Get"), 1_500_000.0);
        assert_eq!(splitter.raw_score("missing"), 0.0);
    }

    #[test]
    fn test_raw_score_exact_case_probes() {
        let table = FrequencyTable::from_entries([("Get", 500u64), ("get", 900)]);
        let params = Parameters {
            exact_case: true,
            ..Parameters::default()
        };
        let splitter = Splitter::with_params(table, Dictionary::builtin(), params).unwrap();
        // Exact hit first, then capitalized, then lowercase.
        assert_eq!(splitter.raw_score("Get"), 500.0);
        assert_eq!(splitter.raw_score("GET"), 500.0);
        assert_eq!(splitter.raw_score("get"), 900.0);
    }

    #[test]
    fn test_local_frequencies_blend() {
        let global = FrequencyTable::from_entries([("parse", 1_000_000u64), ("data", 800_000)]);
        let local = FrequencyTable::from_entries([("reqid", 40_000u64), ("parse", 10_000)]);
        let splitter = Splitter::new(global, Dictionary::builtin()).with_local_frequencies(local);

        // Local-only tokens score their local count.
        assert_eq!(splitter.raw_score("reqid"), 40_000.0);
        // Global-only tokens are damped by the log of the local mass.
        let damped = splitter.raw_score("data");
        assert!(damped > 0.0 && damped < 800_000.0);
        // Tokens in both tables blend.
        assert!(splitter.raw_score("parse") > 10_000.0);
    }

    #[test]
    fn test_common_terms_pin_the_ceiling() {
        let splitter = fixture_splitter();
        assert_eq!(splitter.raw_score("utf8"), 2_000_000.0);
        assert_eq!(splitter.raw_score("SHA256"), 2_000_000.0);
    }

    #[test]
    fn test_adjusted_score_cutoffs() {
        let splitter = fixture_splitter();
        // Below the low-frequency cutoff.
        assert_eq!(splitter.adjusted_score("cpu"), 0.0);
        // Short token without special status needs the short minimum.
        assert_eq!(splitter.adjusted_score("so"), 0.0);
        // A short special term only needs the low-frequency cutoff.
        assert!(splitter.adjusted_score("db") > 0.0);
        // "is" is short but clears the short minimum.
        assert!(splitter.adjusted_score("is") > 0.0);
        assert_eq!(splitter.adjusted_score(""), 0.0);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = Parameters {
            normal_exponent: 2.0,
            ..Parameters::default()
        };
        let result = Splitter::with_params(fixture_table(), fixture_dictionary(), params);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_artifacts() {
        // Point the data dir somewhere empty; construction must fail with
        // the missing-artifact error.
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: test-only env mutation, no concurrent reader in this test.
        unsafe { std::env::set_var("IDSPLIT_DATA_DIR", dir.path()) };
        let result = Splitter::from_default_artifacts();
        unsafe { std::env::remove_var("IDSPLIT_DATA_DIR") };
        assert!(matches!(
            result,
            Err(SplitterError::MissingFrequencyArtifact(_))
        ));
    }

    // Words the veto properties pair with the morpheme lists. None of them
    // is itself a veto term and none starts with one of the other words.
    const VETO_REST_WORDS: &[&str] = &["file", "data", "token", "module", "count"];

    /// Table where every veto prefix scores well above the cutoffs, so the
    /// prefix/rest cut would win without the veto.
    fn prefix_veto_splitter() -> Splitter {
        let entries = constants::PREFIX_TERMS
            .iter()
            .map(|p| (p.to_string(), 500_000u64))
            .chain(VETO_REST_WORDS.iter().map(|w| (w.to_string(), 800_000)));
        Splitter::new(FrequencyTable::from_entries(entries), Dictionary::builtin())
    }

    /// Table where every veto suffix scores well above the cutoffs, so the
    /// word/suffix cut would win without the veto.
    fn suffix_veto_splitter() -> Splitter {
        let entries = constants::SUFFIX_TERMS
            .iter()
            .map(|s| (s.to_string(), 500_000u64))
            .chain(VETO_REST_WORDS.iter().map(|w| (w.to_string(), 800_000)));
        Splitter::new(FrequencyTable::from_entries(entries), Dictionary::builtin())
    }

    proptest! {
        // For every veto prefix p and high-scoring rest, the scan never
        // cuts between p and rest: the first output token is never the
        // bare prefix, even though both sides clear the threshold.
        #[test]
        fn prop_prefix_veto_holds_for_every_prefix(
            prefix_index in 0usize..512,
            rest_index in 0usize..8,
        ) {
            let prefix = constants::PREFIX_TERMS[prefix_index % constants::PREFIX_TERMS.len()];
            let rest = VETO_REST_WORDS[rest_index % VETO_REST_WORDS.len()];
            let id = format!("{prefix}{rest}");

            let splitter = prefix_veto_splitter();
            let tokens = splitter.split(&id);
            let joined = tokens.concat();
            prop_assert_eq!(joined, id);
            prop_assert_ne!(
                tokens.first().map(String::as_str),
                Some(prefix),
                "cut fell between veto prefix and remainder: {:?}",
                tokens
            );
        }

        // For every veto suffix and high-scoring word, the scan never cuts
        // between word and suffix (the veto applies to strings longer than
        // five characters): the last output token is never the bare suffix.
        #[test]
        fn prop_suffix_veto_holds_for_every_suffix(
            word_index in 0usize..8,
            suffix_index in 0usize..512,
        ) {
            let word = VETO_REST_WORDS[word_index % VETO_REST_WORDS.len()];
            let suffix = constants::SUFFIX_TERMS[suffix_index % constants::SUFFIX_TERMS.len()];
            let id = format!("{word}{suffix}");
            prop_assume!(id.chars().count() > 5);

            let splitter = suffix_veto_splitter();
            let tokens = splitter.split(&id);
            let joined = tokens.concat();
            prop_assert_eq!(joined, id);
            prop_assert_ne!(
                tokens.last().map(String::as_str),
                Some(suffix),
                "cut fell between word and veto suffix: {:?}",
                tokens
            );
        }
    }
}

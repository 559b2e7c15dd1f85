//! Property-based checks over the splitters.

use idsplit::{Dictionary, FrequencyTable, HARD_DELIMITERS, Splitter, elementary_split};
use proptest::prelude::*;

fn fixture_splitter() -> Splitter {
    let table = FrequencyTable::from_entries([
        ("get", 1_500_000u64),
        ("set", 1_300_000),
        ("data", 800_000),
        ("file", 1_800_000),
        ("read", 1_000_000),
        ("write", 900_000),
        ("index", 700_000),
        ("count", 650_000),
        ("is", 2_000_000),
        ("better", 900_000),
    ])
    .fold_case();
    Splitter::new(table, fixture_dictionary())
}

fn fixture_dictionary() -> Dictionary {
    Dictionary::from_words(fixture_dictionary_words().iter().copied())
}

fn strip_delimiters(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !HARD_DELIMITERS.contains(c))
        .collect()
}

proptest! {
    // Every token in every split of any ASCII identifier is non-empty.
    #[test]
    fn prop_totality(id in "[A-Za-z0-9_.:$~/@]{0,24}") {
        let splitter = fixture_splitter();
        for token in splitter.split(&id) {
            prop_assert!(!token.is_empty());
        }
        for token in splitter.split_with(&id, false) {
            prop_assert!(!token.is_empty());
        }
    }

    // With keep_numbers, concatenating the split gives back the identifier
    // minus the hard delimiters: case and digits are preserved.
    #[test]
    fn prop_concatenation(id in "[A-Za-z0-9_.:$~/@]{0,24}") {
        let splitter = fixture_splitter();
        let joined: String = splitter.split(&id).concat();
        prop_assert_eq!(joined, strip_delimiters(&id));
    }

    // The elementary splitter obeys the same round-trip on its own.
    #[test]
    fn prop_elementary_concatenation(id in "[A-Za-z0-9_.:$~/@]{0,24}") {
        let joined: String = elementary_split(&id, true).concat();
        prop_assert_eq!(joined, strip_delimiters(&id));
    }

    // A lowercase, delimiter-free, digit-free identifier comes back either
    // whole or as a segmentation that concatenates to the input.
    #[test]
    fn prop_lowercase_segmentation(id in "[a-z]{1,16}") {
        let splitter = fixture_splitter();
        let tokens = splitter.split(&id);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.concat(), id);
    }

    // Re-splitting a lowercase dictionary token from any split is a no-op.
    #[test]
    fn prop_resplit_idempotence(id in "[a-z_]{1,20}") {
        let splitter = fixture_splitter();
        for token in splitter.split(&id) {
            let lowercase = token.chars().all(|c| c.is_ascii_lowercase());
            if lowercase && fixture_dictionary_words().contains(&token.as_str()) {
                prop_assert_eq!(splitter.split(&token), vec![token.clone()]);
            }
        }
    }

    // Common terms with numbers survive as single tokens wherever they are
    // embedded between alphabetic runs.
    #[test]
    fn prop_exception_preservation(
        before in "[a-z]{1,4}",
        term_index in 0usize..30,
        after in "[a-z]{1,4}",
    ) {
        let term = common_terms()[term_index % common_terms().len()];
        let id = format!("{before}{term}{after}");
        let splitter = fixture_splitter();
        let tokens = splitter.split(&id);
        prop_assert!(
            tokens.iter().any(|t| t.eq_ignore_ascii_case(term)),
            "term {} lost in {:?}",
            term,
            tokens
        );
    }

    // Any recognized token without delimiters or a lower-to-upper boundary
    // passes through unchanged, whatever its casing.
    #[test]
    fn prop_recognition_short_circuit(
        word_index in 0usize..512,
        case_index in 0usize..3,
    ) {
        let pool = recognized_pool();
        let word = pool[word_index % pool.len()];
        let token = match case_index {
            0 => word.to_lowercase(),
            1 => word.to_uppercase(),
            _ => capitalize(word),
        };

        // Sanity: the recognition predicate itself must accept the token.
        let dictionary = fixture_dictionary();
        prop_assume!(dictionary.recognized(&token));

        let splitter = fixture_splitter();
        prop_assert_eq!(splitter.split(&token), vec![token.clone()]);
    }
}

fn fixture_dictionary_words() -> &'static [&'static str] {
    &[
        "get", "set", "data", "file", "read", "write", "index", "count", "is", "better",
    ]
}

fn common_terms() -> &'static [&'static str] {
    &[
        "utf8", "utf16", "i18n", "l10n", "ipv4", "ipv6", "mp3", "mp4", "md5", "sha1", "sha256",
        "base64", "win32", "win64",
    ]
}

/// Recognized tokens for the short-circuit property: fixture dictionary
/// words, digit-free special computing terms, and the protected common
/// terms (whose digits survive the elementary pass intact).
fn recognized_pool() -> Vec<&'static str> {
    let special = [
        "argv", "mpegts", "ast", "sql", "max", "json", "mutex", "stderr", "cpu", "html",
        "kernel", "regex", "timestamp",
    ];
    fixture_dictionary_words()
        .iter()
        .copied()
        .chain(special)
        .chain(common_terms().iter().copied())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

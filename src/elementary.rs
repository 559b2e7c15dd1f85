//! Pure, stateless identifier splitters.
//!
//! Everything here is rule-based: hard delimiters, digit runs, and
//! camel-case transitions, with a protected set of terms-with-numbers
//! (`utf8`, `ipv4`, ...) that must survive intact. No frequency table or
//! dictionary is consulted; the scored splitter builds on
//! [`elementary_split`] for its first pass.

use crate::constants;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that always separate tokens.
pub const HARD_DELIMITERS: &[char] = &['_', '.', ':', '$', '~', '/', '@'];

/// Lowercase-to-uppercase boundary, the forward camel-case transition.
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("invalid camel pattern"));

/// Two adjacent capitals, used to detect acronym runs.
static TWO_CAPITALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][A-Z]").expect("invalid capitals pattern"));

/// Case-insensitive alternation over the common terms with numbers, longest
/// first so `sha256` wins over `sha1` at the same position.
static PROTECTED_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    let mut terms: Vec<&str> = constants::COMMON_TERMS_WITH_NUMBERS.to_vec();
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let pattern = format!("(?i)({})", terms.join("|"));
    Regex::new(&pattern).expect("invalid protected-terms pattern")
});

/// Split only on the hard delimiter characters.
pub fn delimiter_split(identifier: &str) -> Vec<String> {
    identifier
        .split(|c: char| HARD_DELIMITERS.contains(&c))
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split only at digit runs, discarding the digits.
pub fn digit_split(identifier: &str) -> Vec<String> {
    identifier
        .split(|c: char| c.is_ascii_digit())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split only at forward camel-case transitions: `fooBarBaz` becomes
/// `foo Bar Baz`, while `SQLite` and other acronym runs stay whole.
/// Delimiters and digits are untouched.
pub fn pure_camel_split(identifier: &str) -> Vec<String> {
    CAMEL_BOUNDARY
        .replace_all(identifier, "${1} ${2}")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split on hard delimiters and camel-case transitions, but leave any piece
/// containing adjacent capitals whole: splitting `aFastNDecoder` without a
/// dictionary risks cutting an acronym in the wrong place.
pub fn safe_simple_split(identifier: &str) -> Vec<String> {
    let translated = translate_delimiters(identifier);
    translated
        .split_whitespace()
        .flat_map(|piece| {
            if TWO_CAPITALS.is_match(piece) {
                vec![piece.to_string()]
            } else {
                pure_camel_split(piece)
            }
        })
        .collect()
}

/// The full elementary splitter: hard delimiters, protected terms,
/// camel-case transitions, and digit runs.
///
/// With `keep_numbers` true, digit runs come out as their own tokens and
/// every character except delimiters survives. With `keep_numbers` false,
/// leading digits are stripped from the identifier and digit runs are
/// dropped. Either way, members of the common-terms-with-numbers set and
/// pieces ending in a common numeric suffix (`size64`) stay whole.
///
/// Empty input yields an empty list; the function never fails.
pub fn elementary_split(identifier: &str, keep_numbers: bool) -> Vec<String> {
    let identifier = if keep_numbers {
        identifier
    } else {
        identifier.trim_start_matches(|c: char| c.is_ascii_digit())
    };

    let translated = translate_delimiters(identifier);
    let protected = PROTECTED_TERMS.replace_all(&translated, " ${1} ");
    let cameled = CAMEL_BOUNDARY.replace_all(&protected, "${1} ${2}");

    let mut tokens = Vec::new();
    for piece in cameled.split_whitespace() {
        if constants::is_common_term_with_numbers(piece) {
            tokens.push(piece.to_string());
        } else if constants::has_common_suffix_number(piece)
            && !piece.starts_with(|c: char| c.is_ascii_digit())
        {
            tokens.push(piece.to_string());
        } else {
            push_digit_runs(piece, keep_numbers, &mut tokens);
        }
    }
    tokens
}

fn translate_delimiters(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| if HARD_DELIMITERS.contains(&c) { ' ' } else { c })
        .collect()
}

/// Split a piece at digit-run boundaries, keeping or dropping the digit
/// runs per `keep_numbers`.
fn push_digit_runs(piece: &str, keep_numbers: bool, out: &mut Vec<String>) {
    let mut run_start = 0;
    let mut run_is_digit: Option<bool> = None;
    for (i, c) in piece.char_indices() {
        let is_digit = c.is_ascii_digit();
        match run_is_digit {
            Some(prev) if prev == is_digit => {}
            Some(prev) => {
                if !prev || keep_numbers {
                    out.push(piece[run_start..i].to_string());
                }
                run_start = i;
                run_is_digit = Some(is_digit);
            }
            None => run_is_digit = Some(is_digit),
        }
    }
    if let Some(last_is_digit) = run_is_digit {
        if !last_is_digit || keep_numbers {
            out.push(piece[run_start..].to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_split() {
        assert_eq!(delimiter_split("a_b.c:d$e~f/g@h"), vec![
            "a", "b", "c", "d", "e", "f", "g", "h"
        ]);
        assert_eq!(delimiter_split("__x__"), vec!["x"]);
        assert!(delimiter_split("").is_empty());
    }

    #[test]
    fn test_digit_split() {
        assert_eq!(digit_split("foo2bar2"), vec!["foo", "bar"]);
        assert_eq!(digit_split("99bottles"), vec!["bottles"]);
    }

    #[test]
    fn test_pure_camel_split() {
        assert_eq!(pure_camel_split("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
        assert_eq!(pure_camel_split("SQLite"), vec!["SQLite"]);
        assert_eq!(pure_camel_split("ABCFooBar"), vec!["ABCFoo", "Bar"]);
        assert_eq!(pure_camel_split("alllower"), vec!["alllower"]);
    }

    #[test]
    fn test_safe_simple_split() {
        assert_eq!(safe_simple_split("a_fooBar"), vec!["a", "foo", "Bar"]);
        assert_eq!(safe_simple_split("aFastNDecoder"), vec!["aFastNDecoder"]);
        assert_eq!(safe_simple_split("foo.barBaz"), vec!["foo", "bar", "Baz"]);
    }

    #[test]
    fn test_elementary_keeps_digit_runs() {
        assert_eq!(elementary_split("fooBar2day", true), vec![
            "foo", "Bar", "2", "day"
        ]);
        assert_eq!(elementary_split("foo3000", true), vec!["foo", "3000"]);
        assert_eq!(elementary_split("99foo3000", true), vec!["99", "foo", "3000"]);
    }

    #[test]
    fn test_elementary_drops_digits() {
        assert_eq!(elementary_split("fooBar2day", false), vec!["foo", "Bar", "day"]);
        assert_eq!(elementary_split("foo3000", false), vec!["foo"]);
        assert_eq!(elementary_split("99foo3000", false), vec!["foo"]);
        assert_eq!(elementary_split("J2SE4me", false), vec!["J", "SE", "me"]);
    }

    #[test]
    fn test_elementary_protects_common_terms() {
        assert_eq!(elementary_split("aUTF8var", true), vec!["a", "UTF8", "var"]);
        assert_eq!(elementary_split("IPv4addr", true), vec!["IPv4", "addr"]);
        assert_eq!(elementary_split("win32", true), vec!["win32"]);
        assert_eq!(elementary_split("mysha1sum", true), vec!["my", "sha1", "sum"]);
    }

    #[test]
    fn test_elementary_common_suffix_numbers() {
        assert_eq!(elementary_split("size64", true), vec!["size64"]);
        assert_eq!(elementary_split("buf1024", false), vec!["buf1024"]);
        assert_eq!(elementary_split("row10", false), vec!["row"]);
        assert_eq!(elementary_split("row10", true), vec!["row", "10"]);
    }

    #[test]
    fn test_elementary_delimiters_and_camel() {
        assert_eq!(elementary_split("usage_getdata", true), vec!["usage", "getdata"]);
        assert_eq!(elementary_split("getX", true), vec!["get", "X"]);
        assert_eq!(elementary_split("GPSmodule", true), vec!["GPSmodule"]);
        assert_eq!(elementary_split("ABCFooBar", true), vec!["ABCFoo", "Bar"]);
    }

    #[test]
    fn test_elementary_empty_input() {
        assert!(elementary_split("", true).is_empty());
        assert!(elementary_split("123", false).is_empty());
        assert_eq!(elementary_split("123", true), vec!["123"]);
    }
}

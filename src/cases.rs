//! Identifier and file-name case conversion.
//!
//! All naming derived from the project tree (most importantly protocol file
//! names) funnels through these four converters so every consumer agrees on
//! word boundaries. The rules: `_`, `-`, whitespace and any other
//! non-alphanumeric character separate words (apostrophes are deleted
//! outright), a lower→upper transition starts a new word, acronyms keep
//! their tail letter (`HTTPServer` → `http_server`), and a digit followed by
//! a letter starts a new word while a letter followed by a digit does not
//! (`v1` stays one word, `v1invoices` splits after the `1`).

use convert_case::{Boundary, Case, Casing};

const BOUNDARIES: &[Boundary] = &[
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::Acronym,
    Boundary::DigitUpper,
    Boundary::DigitLower,
];

/// Convert to `PascalCase`.
pub fn pascal(input: &str) -> String {
    convert(input, Case::Pascal)
}

/// Convert to `camelCase`.
pub fn camel(input: &str) -> String {
    convert(input, Case::Camel)
}

/// Convert to `snake_case`.
pub fn snake(input: &str) -> String {
    convert(input, Case::Snake)
}

/// Convert to `kebab-case`.
pub fn kebab(input: &str) -> String {
    convert(input, Case::Kebab)
}

fn convert(input: &str, case: Case) -> String {
    scrub(input).set_boundaries(BOUNDARIES).to_case(case)
}

/// Delete apostrophes and reduce every run of other non-alphanumeric
/// characters to a single space, leaving word splitting to the boundary set
/// above. Runs must collapse here: adjacent separators would otherwise come
/// out of the splitter as empty words and double the output delimiter.
fn scrub(input: &str) -> String {
    let spaced: String = input
        .chars()
        .filter(|&c| c != '\'')
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case() {
        for (input, expected) in [
            ("word", "Word"),
            ("two-words", "TwoWords"),
            ("TwoWords", "TwoWords"),
            ("Only-% alpha \nNumeric!123", "OnlyAlphaNumeric123"),
            ("123abC", "123AbC"),
            ("can'tBe-apostrophe", "CantBeApostrophe"),
        ] {
            assert_eq!(pascal(input), expected, "pascal({input:?})");
        }
    }

    #[test]
    fn camel_case() {
        for (input, expected) in [
            ("Word", "word"),
            ("two-words", "twoWords"),
            ("twoWords", "twoWords"),
            ("Only-% alpha \nNumeric!123", "onlyAlphaNumeric123"),
            ("123abC", "123AbC"),
            ("can'tBe-apostrophe", "cantBeApostrophe"),
        ] {
            assert_eq!(camel(input), expected, "camel({input:?})");
        }
    }

    #[test]
    fn snake_case() {
        for (input, expected) in [
            ("word", "word"),
            ("TwoWords", "two_words"),
            ("two_words", "two_words"),
            ("Only-% alpha \nNumeric!123", "only_alpha_numeric_123"),
            ("123abC", "123_ab_c"),
            ("can'tBe-apostrophe", "cant_be_apostrophe"),
        ] {
            assert_eq!(snake(input), expected, "snake({input:?})");
        }
    }

    #[test]
    fn kebab_case() {
        for (input, expected) in [
            ("word", "word"),
            ("TwoWords", "two-words"),
            ("two_words", "two-words"),
            ("Only-% alpha \nNumeric!123", "only-alpha-numeric-123"),
            ("123abC", "123-ab-c"),
            ("can'tBe-apostrophe", "cant-be-apostrophe"),
        ] {
            assert_eq!(kebab(input), expected, "kebab({input:?})");
        }
    }

    #[test]
    fn separator_runs_collapse_to_one_delimiter() {
        assert_eq!(snake("a--b__c"), "a_b_c");
        assert_eq!(kebab("tabs\t\tand  spaces"), "tabs-and-spaces");
        assert_eq!(pascal("  leading and trailing "), "LeadingAndTrailing");
    }

    #[test]
    fn version_glues_letter_to_digits() {
        // Protocol file names depend on "v1" staying a single word while the
        // digit-to-letter edge right after it splits.
        assert_eq!(snake("billing_v1invoices"), "billing_v1_invoices");
        assert_eq!(snake("billing_v12Payments"), "billing_v12_payments");
    }

    #[test]
    fn acronyms_keep_their_tail() {
        assert_eq!(snake("HTTPServer"), "http_server");
        assert_eq!(pascal("http_server"), "HttpServer");
    }
}

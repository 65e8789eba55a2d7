//! Text normalization for comparison and search.
//!
//! Every comparison in the crate (query matching, ordering keys, composite
//! ids) goes through [`normalize`]. Stored field values are never rewritten:
//! the parser keeps what the input said, and normalization is applied to
//! transient keys only.
//!
//! The folding is Latin-script oriented: NFD decomposition followed by
//! dropping combining marks, so "García" and "garcia" compare equal. Scripts
//! without combining-mark accents pass through unchanged apart from
//! lowercasing.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize `input` for comparison.
///
/// NFD-decomposes, strips combining diacritical marks, lowercases, collapses
/// internal whitespace runs to single spaces and trims. Total and idempotent:
/// never fails, and `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }

    out
}

/// Keep only the ASCII digits of `input`.
///
/// Used for punctuation-tolerant phone matching and for the composite-id
/// fallback. `digits("11-5555-2020")` is `"1155552020"`.
pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Combining marks as produced by NFD on Latin-script text.
///
/// U+0300..U+036F covers the combining diacritical marks block; the two
/// supplements catch the rarer extended marks so folding stays idempotent.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_diacritics_and_case() {
        assert_eq!(normalize("María García"), "maria garcia");
        assert_eq!(normalize("JOSÉ"), "jose");
        assert_eq!(normalize("Müller"), "muller");
        assert_eq!(normalize("É"), normalize("E"));
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  a\t b "), "a b");
        assert_eq!(normalize("a\n\nb"), "a b");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["María  García", "  ÁÉÍÓÚ  ñ ", "plain ascii", "", "12-34"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn digit_extraction() {
        assert_eq!(digits("11-5555-2020"), "1155552020");
        assert_eq!(digits("+54 (11) 5555"), "54115555");
        assert_eq!(digits("no digits"), "");
        assert_eq!(digits(""), "");
    }
}

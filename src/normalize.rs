use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Produces the canonical comparison form of an ingredient or item name.
///
/// The string is decomposed (NFKD), combining marks are dropped, and the
/// result is lowercased and trimmed. Two names that differ only in accents,
/// case or surrounding whitespace normalize to the same value, and applying
/// the function twice gives the same result as applying it once.
///
/// ```
/// use pantry::normalize::normalize;
///
/// assert_eq!(normalize("  Jamón "), "jamon");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Compares two names after normalization.
pub fn same_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

//! Line normalisation applied to every extracted fragment before classification.

/// Glyph substitutions applied in order. Ligatures expand to ASCII letters,
/// dashes and curly apostrophes fold to their ASCII forms.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{2013}', "-"),
    // Em dash keeps the words on either side apart.
    ('\u{2014}', " - "),
    ('\u{2019}', "'"),
];

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Canonicalise a raw text fragment. Total: unknown characters pass through.
pub fn normalize_line(raw: &str) -> String {
    let mut substituted = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match SUBSTITUTIONS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, replacement)) => substituted.push_str(replacement),
            None => substituted.push(ch),
        }
    }
    collapse_whitespace(&substituted)
}

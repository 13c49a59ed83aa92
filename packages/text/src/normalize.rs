//! Canonical text form used by every comparison in the backend.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string to its canonical comparison form.
///
/// Applies Unicode NFC so that precomposed and decomposed diacritics
/// (ubiquitous in Vietnamese input) compare equal, collapses whitespace
/// runs to single spaces, and trims the ends. Case is left alone;
/// [`tokenize`] lower-cases when matching is the goal.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let mut out = String::with_capacity(composed.len());
    let mut in_whitespace = true; // leading whitespace is dropped
    for ch in composed.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Normalize, lower-case, and split into word tokens.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("  xin \t chào\n\nbạn "), "xin chào bạn");
    }

    #[test]
    fn composes_decomposed_diacritics() {
        // "chào" with a combining grave accent vs. the precomposed form.
        let decomposed = "cha\u{0300}o";
        let precomposed = "ch\u{00E0}o";
        assert_eq!(normalize(decomposed), normalize(precomposed));
    }

    #[test]
    fn tokenize_lowercases() {
        assert_eq!(tokenize("Xin CHÀO"), vec!["xin", "chào"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }
}

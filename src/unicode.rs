//! Character-level Unicode classification for Japanese text.

/// Hiragana or katakana, U+3040..=U+30FF.
pub fn is_kana(c: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs, U+4E00..=U+9FFF.
///
/// The extension blocks are deliberately not matched; the corpus filter only
/// looks at the base block, and supplementary-plane ideographs never qualify.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Check if any character of `s` is Japanese script (kana or kanji).
/// No normalization is performed.
pub fn contains_japanese(s: &str) -> bool {
    s.chars().any(|c| is_kana(c) || is_kanji(c))
}

/// Check if `s` is a non-empty string consisting entirely of `[a-z0-9]`.
pub fn is_ascii_key(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_kana('あ'));
        assert!(is_kana('ア'));
        assert!(is_kana('ー')); // prolonged sound mark sits in the katakana block
        assert!(!is_kana('a'));
        assert!(is_kanji('漢'));
        assert!(is_kanji('学'));
        assert!(!is_kanji('あ'));
        assert!(!is_kanji('々')); // iteration mark is outside U+4E00..U+9FFF
    }

    #[test]
    fn test_contains_japanese() {
        assert!(contains_japanese("学校"));
        assert!(contains_japanese("がっこう"));
        assert!(contains_japanese("ビール"));
        assert!(contains_japanese("Tシャツ")); // mixed scripts qualify
        assert!(!contains_japanese("Wi-Fi"));
        assert!(!contains_japanese("12345"));
        assert!(!contains_japanese(""));
    }

    #[test]
    fn test_is_ascii_key() {
        assert!(is_ascii_key("gakkou"));
        assert!(is_ascii_key("abc123"));
        assert!(!is_ascii_key(""));
        assert!(!is_ascii_key("Gakkou"));
        assert!(!is_ascii_key("ga kkou"));
        assert!(!is_ascii_key("wi-fi"));
        assert!(!is_ascii_key("がっこう"));
    }
}

//! Hiragana → katakana normalization.

/// Convert every hiragana character in `s` to its katakana equivalent.
///
/// Hiragana letters U+3041..=U+3096 map to katakana by a +0x60 codepoint
/// shift; this includes ゔ (U+3094) → ヴ (U+30F4). The hiragana iteration
/// marks map to their katakana forms. Everything else passes through
/// unchanged.
pub fn hira_to_kata(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
            '\u{309D}' => '\u{30FD}',
            '\u{309E}' => '\u{30FE}',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(hira_to_kata("がっこう"), "ガッコウ");
        assert_eq!(hira_to_kata("あいうえお"), "アイウエオ");
    }

    #[test]
    fn test_voiced_u() {
        assert_eq!(hira_to_kata("ゔ"), "ヴ");
    }

    #[test]
    fn test_iteration_marks() {
        assert_eq!(hira_to_kata("ゝゞ"), "ヽヾ");
    }

    #[test]
    fn test_katakana_unchanged() {
        assert_eq!(hira_to_kata("カタカナ"), "カタカナ");
        assert_eq!(hira_to_kata("らーめん"), "ラーメン");
    }

    #[test]
    fn test_non_kana_passthrough() {
        assert_eq!(hira_to_kata("漢字abc!"), "漢字abc!");
        assert_eq!(hira_to_kata(""), "");
    }
}

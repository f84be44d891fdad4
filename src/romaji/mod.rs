//! Deterministic katakana → Hepburn romanization.
//!
//! This is the primary transform of the key-derivation pipeline. It is
//! intentionally literal: sokuon doubles the next consonant, the long-vowel
//! mark renders as `-`, and anything unmapped passes through untouched. The
//! caller strips whatever is left outside `[a-z0-9]`.

mod table;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Romanize a katakana string.
///
/// Digraphs (キャ etc.) are matched before single kana. A sokuon ッ geminates
/// the initial consonant of the following syllable; with nothing to geminate
/// it renders as `tsu`. Characters without a mapping are copied through
/// as-is, so the output is not guaranteed to be pure ASCII — that is the
/// cleaning step's job.
pub fn katakana_to_romaji(kata: &str) -> String {
    let table = table::global();
    let chars: Vec<char> = kata.chars().collect();
    let mut out = String::new();
    let mut pending_sokuon = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == 'ッ' {
            if pending_sokuon {
                out.push_str("tsu");
            }
            pending_sokuon = true;
            i += 1;
            continue;
        }

        // Longest match first: digraph, then single kana.
        let mut syllable = None;
        let mut width = 1;
        if i + 1 < chars.len() {
            let pair: String = chars[i..=i + 1].iter().collect();
            if let Some(&r) = table.get(pair.as_str()) {
                syllable = Some(r);
                width = 2;
            }
        }
        if syllable.is_none() {
            let single = c.to_string();
            syllable = table.get(single.as_str()).copied();
        }

        match syllable {
            Some(romaji) => {
                if pending_sokuon {
                    match romaji.chars().next() {
                        Some(first) if !is_vowel(first) && first != 'n' => out.push(first),
                        _ => out.push_str("tsu"),
                    }
                    pending_sokuon = false;
                }
                out.push_str(romaji);
                i += width;
            }
            None => {
                if pending_sokuon {
                    out.push_str("tsu");
                    pending_sokuon = false;
                }
                // ー and unmapped characters fall through for the cleaner.
                out.push(if c == 'ー' { '-' } else { c });
                i += 1;
            }
        }
    }

    if pending_sokuon {
        out.push_str("tsu");
    }

    out
}

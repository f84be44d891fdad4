//! Reading → ASCII key derivation.
//!
//! The pipeline: normalize hiragana to katakana, run the deterministic
//! Hepburn transform, clean the result down to `[a-z0-9]`, and only if that
//! fails hand the katakana to an optional secondary backend. An empty result
//! signals "no key derivable" to the caller.

pub mod fallback;

use std::panic::{self, AssertUnwindSafe};

pub use fallback::FallbackBackend;

use crate::{kana, romaji, unicode};

pub struct Transliterator {
    fallback: Option<Box<dyn FallbackBackend>>,
}

impl Transliterator {
    /// Build an engine with an explicit fallback slot. `None` disables the
    /// secondary path entirely.
    pub fn new(fallback: Option<Box<dyn FallbackBackend>>) -> Self {
        Self { fallback }
    }

    /// Build an engine with whatever secondary backend this build carries.
    pub fn with_detected_fallback() -> Self {
        Self::new(fallback::detect())
    }

    pub fn fallback_name(&self) -> Option<&'static str> {
        self.fallback.as_ref().map(|b| b.name())
    }

    /// Derive an ASCII romaji key for `reading`. Returns an empty string when
    /// no key is derivable.
    pub fn romaji_key(&self, reading: &str) -> String {
        if reading.is_empty() {
            return String::new();
        }

        let kata = kana::hira_to_kata(reading);
        let primary = clean_key(&romaji::katakana_to_romaji(&kata));
        if unicode::is_ascii_key(&primary) {
            return primary;
        }

        if let Some(backend) = &self.fallback {
            // A misbehaving backend must never abort the run; a panic here
            // counts as "no result".
            let secondary = panic::catch_unwind(AssertUnwindSafe(|| backend.transliterate(&kata)))
                .unwrap_or(None);
            if let Some(raw) = secondary {
                let key = clean_key(&raw);
                if !key.is_empty() {
                    return key;
                }
            }
        }

        primary
    }
}

/// Lowercase `raw` and strip everything outside `[a-z0-9]` (whitespace
/// included).
fn clean_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

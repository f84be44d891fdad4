//! Optional secondary transliteration backend.

/// A pluggable backend tried when the deterministic transform fails to
/// produce a usable key. Availability is decided once at startup via
/// [`detect`]; absence is a degraded mode, never an error.
pub trait FallbackBackend {
    fn name(&self) -> &'static str;

    /// Best-effort phonetic rendering of a katakana string. `None` means the
    /// backend had nothing usable to offer.
    fn transliterate(&self, katakana: &str) -> Option<String>;
}

/// Backend built on the KAKASI transliterator.
#[cfg(feature = "kakasi")]
struct KakasiBackend;

#[cfg(feature = "kakasi")]
impl FallbackBackend for KakasiBackend {
    fn name(&self) -> &'static str {
        "kakasi"
    }

    fn transliterate(&self, katakana: &str) -> Option<String> {
        let romaji = kakasi::convert(katakana).romaji;
        if romaji.is_empty() {
            None
        } else {
            Some(romaji)
        }
    }
}

/// Probe for a secondary backend. Returns `None` when this build carries
/// none; the probe itself never fails the process.
pub fn detect() -> Option<Box<dyn FallbackBackend>> {
    #[cfg(feature = "kakasi")]
    let backend: Option<Box<dyn FallbackBackend>> = Some(Box::new(KakasiBackend));
    #[cfg(not(feature = "kakasi"))]
    let backend: Option<Box<dyn FallbackBackend>> = None;
    backend
}

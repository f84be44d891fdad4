//! Mozc corpus traversal and aggregation.
//!
//! File format: `reading\tleft_id\tright_id\tcost\tsurface`, one record per
//! line, `#` for comments. Only the reading (field 0) and surface (field 4)
//! matter here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::translit::Transliterator;
use crate::unicode;

/// Reason recorded for entries whose reading produced no key.
pub const SKIP_REASON_NO_ROMAJI: &str = "no ASCII romaji derivable";

/// An accepted dictionary entry, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub key: String,
}

/// A Japanese entry whose reading could not be romanized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub word: String,
    pub reading: String,
    pub reason: String,
}

/// Counters for one aggregation pass.
///
/// `converted + skipped + filtered_nonjp <= processed_lines`; blank, comment
/// and malformed lines absorb the difference.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub processed_lines: u64,
    pub converted: u64,
    pub skipped: u64,
    pub filtered_nonjp: u64,
}

#[derive(Debug)]
pub struct Outcome {
    pub stats: Stats,
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("no input files match {0}")]
    NoInput(String),
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Discover input files matching `pattern` under `input_dir`, sorted
/// lexicographically by full path so traversal order never depends on the
/// filesystem.
pub fn discover_files(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, CorpusError> {
    let full_pattern = input_dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => tracing::warn!("error reading glob entry: {e}"),
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(CorpusError::NoInput(full_pattern.into_owned()));
    }
    Ok(files)
}

/// Run one aggregation pass over every matching file.
///
/// Fails only when no file matches; per-line problems are counted or
/// silently dropped, never fatal.
pub fn run(
    input_dir: &Path,
    pattern: &str,
    translit: &Transliterator,
) -> Result<Outcome, CorpusError> {
    let files = discover_files(input_dir, pattern)?;

    let mut stats = Stats::default();
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for path in &files {
        tracing::debug!(file = %path.display(), "reading corpus file");
        let bytes = fs::read(path)?;
        let content = decode_lossy(&bytes);

        for line in content.lines() {
            stats.processed_lines += 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 5 {
                continue;
            }

            let reading = fields[0].trim();
            let word = fields[4].trim();
            if word.is_empty() {
                continue;
            }

            if !unicode::contains_japanese(word) {
                stats.filtered_nonjp += 1;
                continue;
            }

            let key = translit.romaji_key(reading);
            if key.is_empty() {
                stats.skipped += 1;
                skipped.push(SkippedEntry {
                    word: word.to_string(),
                    reading: reading.to_string(),
                    reason: SKIP_REASON_NO_ROMAJI.to_string(),
                });
            } else {
                stats.converted += 1;
                entries.push(Entry {
                    word: word.to_string(),
                    key,
                });
            }
        }
    }

    Ok(Outcome {
        stats,
        entries,
        skipped,
    })
}

/// Decode permissively: malformed byte sequences are dropped, matching the
/// tolerant read mode the corpus contract requires. U+FFFD is stripped
/// unconditionally, so a replacement character already present in valid
/// input is dropped as well.
fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\u{FFFD}', "")
}

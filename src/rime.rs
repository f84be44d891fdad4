//! Rime dictionary output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use time::OffsetDateTime;

use crate::corpus::{Entry, SkippedEntry};

/// Fixed name of the diagnostic file for unromanizable entries.
pub const SKIPPED_FILE: &str = "skipped.tsv";

/// Today's date as `YYYY.MM.DD`, used as the dictionary version. Local time
/// when the offset is determinable, UTC otherwise.
pub fn today_version() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format!(
        "{:04}.{:02}.{:02}",
        now.year(),
        u8::from(now.month()),
        now.day()
    )
}

/// Write the `.dict.yaml` header and one `word<TAB>key` line per entry, in
/// aggregator order. Overwrites `path` directly.
pub fn write_dict(path: &Path, name: &str, version: &str, entries: &[Entry]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "# Rime dictionary converted from Mozc")?;
    writeln!(w, "# encoding: utf-8")?;
    writeln!(w, "---")?;
    writeln!(w, "name: {name}")?;
    writeln!(w, "version: \"{version}\"")?;
    writeln!(w, "sort: by_weight")?;
    writeln!(w, "columns:")?;
    writeln!(w, "  - text")?;
    writeln!(w, "  - code")?;
    writeln!(w, "...")?;
    writeln!(w)?;

    for entry in entries {
        writeln!(w, "{}\t{}", entry.word, entry.key)?;
    }

    w.flush()
}

/// Write the skipped-entry diagnostic file as `word<TAB>reading<TAB>reason`
/// lines. The file is created even when there is nothing to report.
pub fn write_skipped(path: &Path, skipped: &[SkippedEntry]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    for s in skipped {
        writeln!(w, "{}\t{}\t{}", s.word, s.reading, s.reason)?;
    }

    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(word: &str, key: &str) -> Entry {
        Entry {
            word: word.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn test_dict_header_and_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mozc_jp.dict.yaml");

        let entries = [entry("学校", "gakkou"), entry("東京", "toukyou")];
        write_dict(&path, "mozc_jp", "2026.08.30", &entries).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# Rime dictionary converted from Mozc");
        assert_eq!(lines[1], "# encoding: utf-8");
        assert_eq!(lines[2], "---");
        assert_eq!(lines[3], "name: mozc_jp");
        assert_eq!(lines[4], "version: \"2026.08.30\"");
        assert_eq!(lines[5], "sort: by_weight");
        assert_eq!(lines[6], "columns:");
        assert_eq!(lines[7], "  - text");
        assert_eq!(lines[8], "  - code");
        assert_eq!(lines[9], "...");
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "学校\tgakkou");
        assert_eq!(lines[12], "東京\ttoukyou");
    }

    #[test]
    fn test_dict_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dict.yaml");
        fs::write(&path, "stale contents\n").unwrap();

        write_dict(&path, "d", "2026.01.01", &[]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.starts_with("# Rime dictionary"));
    }

    #[test]
    fn test_skipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SKIPPED_FILE);

        let skipped = [SkippedEntry {
            word: "中黒".to_string(),
            reading: "・".to_string(),
            reason: crate::corpus::SKIP_REASON_NO_ROMAJI.to_string(),
        }];
        write_skipped(&path, &skipped).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "中黒\t・\tno ASCII romaji derivable\n");
    }

    #[test]
    fn test_skipped_file_created_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SKIPPED_FILE);

        write_skipped(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_today_version_shape() {
        let v = today_version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }
}

//! Plain-text export of a single note.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, TimeZone, Timelike, Utc};

use crate::entity::Note;
use crate::Result;

/// File stem used when a title sanitizes to nothing
pub const FALLBACK_FILE_STEM: &str = "nota";

const MAX_STEM_CHARS: usize = 50;

const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Turn a note title into a file stem.
///
/// - Anything other than ASCII alphanumerics, `_`, whitespace, `.` and `-` becomes `_`
/// - Runs of whitespace and underscores collapse to one `_`
/// - Leading/trailing underscores are trimmed
/// - The result is cut to 50 characters, falling back to `nota` when empty
pub fn sanitize_filename(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_separator_run = false;

    for c in title.chars() {
        let keep = c.is_ascii_alphanumeric() || c == '.' || c == '-';
        if keep {
            stem.push(c);
            in_separator_run = false;
        } else if !in_separator_run {
            // whitespace, '_' and every replaced char all fold into one '_'
            stem.push('_');
            in_separator_run = true;
        }
    }

    let trimmed = stem.trim_matches('_');
    let truncated: String = trimmed.chars().take(MAX_STEM_CHARS).collect();

    if truncated.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        truncated
    }
}

/// Format epoch milliseconds the way the notepad shows "last updated":
/// `19 de out. de 2026, 14:05`.
pub fn format_timestamp<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<String> {
    let utc = Utc.timestamp_millis_opt(millis).single()?;
    let local = utc.with_timezone(tz);

    Some(format!(
        "{:02} de {} de {}, {:02}:{:02}",
        local.day(),
        MONTHS_PT_BR[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    ))
}

/// Render the export body for a note, with dates shown in `tz`.
pub fn render_note<Tz: TimeZone>(note: &Note, tz: &Tz) -> String {
    let updated =
        format_timestamp(note.updated_at, tz).unwrap_or_else(|| "Invalid Date".to_string());

    format!(
        "Título: {}\n\nConteúdo:\n{}\n\n---\nÚltima atualização: {}",
        note.title, note.content, updated
    )
}

/// `<sanitized title>.txt`
pub fn export_filename(note: &Note) -> String {
    format!("{}.txt", sanitize_filename(&note.title))
}

/// Write the note's export into `dir` and return the path written.
///
/// Existing files are never overwritten; a ` (n)` suffix is added instead.
pub fn export_note(note: &Note, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stem = sanitize_filename(&note.title);
    let body = render_note(note, &Local);

    let mut attempt = 0u32;
    loop {
        let filename = if attempt == 0 {
            export_filename(note)
        } else {
            format!("{} ({}).txt", stem, attempt)
        };
        let path = dir.join(filename);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(body.as_bytes())?;
                tracing::debug!(id = %note.id, path = %path.display(), "exported note");
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PaletteColor;
    use chrono::FixedOffset;
    use tempfile::TempDir;

    fn note(title: &str, content: &str, updated_at: i64) -> Note {
        Note {
            id: "0b7c4a2e-0000-4000-8000-000000000000".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            color: PaletteColor::Sky,
            created_at: updated_at,
            updated_at,
        }
    }

    #[test]
    fn test_sanitize_punctuation_and_spaces() {
        assert_eq!(sanitize_filename("Hello, World! 2024"), "Hello_World_2024");
        assert_eq!(sanitize_filename("a   b"), "a_b");
        assert_eq!(sanitize_filename("a _ _ b"), "a_b");
    }

    #[test]
    fn test_sanitize_keeps_dots_and_hyphens() {
        assert_eq!(sanitize_filename("v1.2-final"), "v1.2-final");
        assert_eq!(sanitize_filename("--x--"), "--x--");
    }

    #[test]
    fn test_sanitize_trims_underscores() {
        assert_eq!(sanitize_filename("  !!notes!!  "), "notes");
        assert_eq!(sanitize_filename("__init__"), "init");
    }

    #[test]
    fn test_sanitize_non_ascii() {
        assert_eq!(sanitize_filename("Reunião às 10h"), "Reuni_o_s_10h");
        assert_eq!(sanitize_filename("日本語"), FALLBACK_FILE_STEM);
    }

    #[test]
    fn test_sanitize_fallback_for_empty() {
        assert_eq!(sanitize_filename(""), "nota");
        assert_eq!(sanitize_filename("   "), "nota");
        assert_eq!(sanitize_filename("?!*"), "nota");
    }

    #[test]
    fn test_sanitize_truncates_to_fifty_chars() {
        let title = "x".repeat(80);
        assert_eq!(sanitize_filename(&title).len(), 50);

        // truncation happens after trimming, so a trailing '_' may survive
        let title = format!("{} tail", "y".repeat(49));
        assert_eq!(sanitize_filename(&title), format!("{}_", "y".repeat(49)));
    }

    #[test]
    fn test_format_timestamp_pt_br() {
        // 2024-03-05T14:07:00Z
        let millis = 1_709_647_620_000;

        assert_eq!(
            format_timestamp(millis, &Utc).unwrap(),
            "05 de mar. de 2024, 14:07"
        );

        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_timestamp(millis, &brt).unwrap(),
            "05 de mar. de 2024, 11:07"
        );
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert!(format_timestamp(i64::MAX, &Utc).is_none());
    }

    #[test]
    fn test_render_note() {
        let n = note("Grocery", "milk\neggs", 1_709_647_620_000);

        assert_eq!(
            render_note(&n, &Utc),
            "Título: Grocery\n\nConteúdo:\nmilk\neggs\n\n---\nÚltima atualização: 05 de mar. de 2024, 14:07"
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(&note("Hello, World! 2024", "", 0)), "Hello_World_2024.txt");
    }

    #[test]
    fn test_export_never_overwrites() {
        let tmp = TempDir::new().unwrap();
        let n = note("Plan", "body", 1_709_647_620_000);

        let first = export_note(&n, tmp.path()).unwrap();
        let second = export_note(&n, tmp.path()).unwrap();

        assert_eq!(first, tmp.path().join("Plan.txt"));
        assert_eq!(second, tmp.path().join("Plan (1).txt"));

        let written = fs::read_to_string(&first).unwrap();
        assert!(written.starts_with("Título: Plan\n\nConteúdo:\nbody\n\n---\nÚltima atualização: "));
    }
}

//! Log-file discovery and record parsing.
//!
//! Capture sessions write one JSON object per line into `.txt` files
//! under the training-data directory, one file per session. This
//! module finds those files and parses them into [`Record`]s.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use mindwave_core::error::{MindwaveError, Result};
use mindwave_core::models::Record;
use tracing::warn;

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all files with `extension` recursively under `data_path`,
/// sorted by path.
pub fn find_log_files(data_path: &Path, extension: &str) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == extension)
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Parse one log file into records, one per non-empty line.
///
/// A line that is not a valid JSON object fails the whole file with
/// [`MindwaveError::Parse`] carrying the path and 1-based line number;
/// the remaining lines are not recovered.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).map_err(|source| MindwaveError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut records = Vec::new();
    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| MindwaveError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: Record =
            serde_json::from_str(trimmed).map_err(|source| MindwaveError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── find_log_files ────────────────────────────────────────────────────────

    #[test]
    fn test_find_log_files_in_flat_dir() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "a.txt", &["{}"]);
        write_log(dir.path(), "b.txt", &["{}"]);

        let files = find_log_files(dir.path(), "txt");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_find_log_files_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("session-2");
        std::fs::create_dir_all(&sub).unwrap();
        write_log(dir.path(), "root.txt", &["{}"]);
        write_log(&sub, "nested.txt", &["{}"]);

        let files = find_log_files(dir.path(), "txt");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_find_log_files_filters_extension() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "keep.txt", &["{}"]);
        write_log(dir.path(), "skip.csv", &["a,b"]);
        write_log(dir.path(), "noext", &["{}"]);

        let files = find_log_files(dir.path(), "txt");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.txt"));
    }

    #[test]
    fn test_find_log_files_sorted() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "c.txt", &["{}"]);
        write_log(dir.path(), "a.txt", &["{}"]);
        write_log(dir.path(), "b.txt", &["{}"]);

        let files = find_log_files(dir.path(), "txt");
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_find_log_files_nonexistent_path() {
        let files = find_log_files(Path::new("/tmp/does-not-exist-mindwave-test"), "txt");
        assert!(files.is_empty());
    }

    // ── read_records ──────────────────────────────────────────────────────────

    #[test]
    fn test_read_records_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "session.txt",
            &[
                r#"{"poor_signal": 0, "attention": 45}"#,
                r#"{"poor_signal": 26, "attention": 0}"#,
            ],
        );

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("attention").and_then(|v| v.as_i64()),
            Some(45)
        );
    }

    #[test]
    fn test_read_records_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "session.txt", &["", r#"{"attention": 1}"#, "  "]);

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_read_records_malformed_line_aborts_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "session.txt",
            &[r#"{"attention": 1}"#, "{not json{{", r#"{"attention": 2}"#],
        );

        let err = read_records(&path).unwrap_err();
        match err {
            MindwaveError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_records_non_object_line_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "session.txt", &["42"]);
        assert!(matches!(
            read_records(&path),
            Err(MindwaveError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_read_records_missing_file() {
        let err = read_records(Path::new("/tmp/missing-mindwave.txt")).unwrap_err();
        assert!(matches!(err, MindwaveError::FileRead { .. }));
    }
}

//! CSV output
//!
//! One row per (algorithm, size). Absent values are empty fields; several
//! error messages in one cell are joined with `"; "`.

use std::path::Path;

use crate::{
    constants::{CSV_ERROR_SEPARATOR, CSV_HEADER},
    error::AppResult,
    models::ResultSet,
};

/// Render a result set as CSV text
pub fn render_csv(results: &ResultSet) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for (algorithm, result) in results.iter() {
        for row in result.rows() {
            let fields = [
                escape_field(algorithm),
                row.size.to_string(),
                row.time_s.map(|t| t.to_string()).unwrap_or_default(),
                row.mem_bytes.map(|m| m.to_string()).unwrap_or_default(),
                escape_field(
                    &row.errors
                        .map(|errors| errors.join(CSV_ERROR_SEPARATOR))
                        .unwrap_or_default(),
                ),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }
    }

    out
}

/// Write a result set to `path` as CSV
pub fn save_csv(results: &ResultSet, path: impl AsRef<Path>) -> AppResult<()> {
    super::write_file(path.as_ref(), &render_csv(results))
}

/// Quote a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlgorithmResult;

    fn sample() -> ResultSet {
        let mut quick = AlgorithmResult::new();
        quick.push(10, Some(0.5), Some(2048.0), vec![]);
        quick.push(20, None, None, vec!["boom".into(), "bad, \"worse\"".into()]);

        let mut results = ResultSet::new();
        results.insert("quicksort", quick);
        results
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&sample());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "algorithm,size,time_s,mem_bytes,errors");
        assert_eq!(lines[1], "quicksort,10,0.5,2048,");
        assert_eq!(lines[2], "quicksort,20,,,\"boom; bad, \"\"worse\"\"\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_result_set_has_header_only() {
        assert_eq!(render_csv(&ResultSet::new()), "algorithm,size,time_s,mem_bytes,errors\n");
    }

    #[test]
    fn test_save_csv_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "stale contents that should disappear\n").unwrap();

        save_csv(&sample(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("algorithm,size"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
    }
}

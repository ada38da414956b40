use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};
use crate::input::open_maybe_gz;

#[derive(Debug, Clone)]
pub struct PredictionRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PredictionTable {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<PredictionRow>,
}

impl PredictionTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col == name)
    }

    pub fn require_column(&self, name: &'static str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| BenchError::MissingColumn {
                path: self.path.clone(),
                column: name,
            })
    }
}

/// Loads a tab-separated prediction table. The first line that is not
/// blank and not a `#` comment is the header; later such lines are data
/// rows. Field values are trimmed.
pub fn load_predictions(path: &Path) -> Result<PredictionTable> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut columns: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|err| BenchError::read(path, err))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<String> = line.split('\t').map(|f| f.trim().to_string()).collect();
        if columns.is_none() {
            columns = Some(fields);
        } else {
            rows.push(PredictionRow {
                line: line_no,
                fields,
            });
        }
    }

    let Some(columns) = columns else {
        return Err(BenchError::parse(path, "prediction file has no header row"));
    };

    Ok(PredictionTable {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_table(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.tsv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_header_and_rows() {
        let (_dir, path) = write_table("gene\tqvalue\nTP53\t0.01\nKRAS\t0.2\n");
        let table = load_predictions(&path).unwrap();
        assert_eq!(table.columns, vec!["gene", "qvalue"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[0].fields, vec!["TP53", "0.01"]);
        assert_eq!(table.rows[1].line, 3);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let (_dir, path) =
            write_table("# produced by tool v1.2\n\ngene\tqvalue\n# trailing note\nTP53\t0.01\n");
        let table = load_predictions(&path).unwrap();
        assert_eq!(table.columns, vec!["gene", "qvalue"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].line, 5);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let (_dir, path) = write_table("gene\tqvalue\n TP53 \t 0.01 \n");
        let table = load_predictions(&path).unwrap();
        assert_eq!(table.rows[0].fields, vec!["TP53", "0.01"]);
    }

    #[test]
    fn test_header_only_is_valid() {
        let (_dir, path) = write_table("gene\tqvalue\n");
        let table = load_predictions(&path).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_no_header_is_an_error() {
        let (_dir, path) = write_table("# nothing but comments\n\n");
        let err = load_predictions(&path).unwrap_err();
        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn test_require_column() {
        let (_dir, path) = write_table("gene\tqvalue\tinfo\nTP53\t0.01\tFILTER=PASS\n");
        let table = load_predictions(&path).unwrap();
        assert_eq!(table.require_column("qvalue").unwrap(), 1);
        let err = table.require_column("pvalue").unwrap_err();
        assert!(err.to_string().contains("'pvalue'"));
    }
}

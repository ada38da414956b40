use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};
use crate::input::open_maybe_gz;

#[derive(Debug, Clone)]
pub struct GoldStandard {
    pub cancer_type: String,
    pub path: PathBuf,
    /// Non-empty: loading an empty gold standard is an error.
    pub genes: BTreeSet<String>,
}

pub fn find_gold_standard_path(dir: &Path, cancer_type: &str) -> Result<PathBuf> {
    let candidates = [
        format!("{cancer_type}.txt"),
        format!("{cancer_type}.txt.gz"),
    ];
    for name in &candidates {
        let path = dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(BenchError::MissingGoldStandard {
        cancer_type: cancer_type.to_string(),
        path: dir.join(&candidates[0]),
    })
}

/// Loads the gold standard gene set for one cancer type: one gene per
/// line in the first tab-separated field, `#` comments skipped.
pub fn load_gold_standard(dir: &Path, cancer_type: &str) -> Result<GoldStandard> {
    let path = find_gold_standard_path(dir, cancer_type)?;
    let mut reader = open_maybe_gz(&path)?;
    let mut buf = String::new();
    let mut genes = BTreeSet::new();

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|err| BenchError::read(&path, err))?;
        if read == 0 {
            break;
        }
        let line = buf.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let gene = fields[0].trim();
        if gene.is_empty() {
            continue;
        }
        genes.insert(gene.to_string());
    }

    if genes.is_empty() {
        return Err(BenchError::EmptyGoldStandard {
            cancer_type: cancer_type.to_string(),
            path,
        });
    }

    Ok(GoldStandard {
        cancer_type: cancer_type.to_string(),
        path,
        genes,
    })
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::json::write_pretty_json;

pub const MANIFEST_FILE_NAME: &str = "Manifest.json";

const BASELINE_DEFAULT: &[&str] = &[
    "MutSig2CV",
    "compositeDriver",
    "2020plus",
    "OncodriveFM",
    "ActiveDriver",
    "e-Driver",
    "OncodriveCLUST",
    "MuSiC",
];

// UCEC has no curated compositeDriver result, so its panel omits it.
const BASELINE_UCEC: &[&str] = &[
    "MutSig2CV",
    "2020plus",
    "OncodriveFM",
    "ActiveDriver",
    "e-Driver",
    "OncodriveCLUST",
    "MuSiC",
];

pub fn baseline_participants(cancer_type: &str) -> &'static [&'static str] {
    if cancer_type == "UCEC" {
        BASELINE_UCEC
    } else {
        BASELINE_DEFAULT
    }
}

// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub participants: Vec<String>,
}

/// Builds entries for the requested cancer types in input order. The
/// participant is appended even when it duplicates a baseline tool.
pub fn build_manifest(cancer_types: &[String], participant: &str) -> Vec<ManifestEntry> {
    cancer_types
        .iter()
        .map(|cancer_type| {
            let mut participants: Vec<String> = baseline_participants(cancer_type)
                .iter()
                .map(|tool| tool.to_string())
                .collect();
            participants.push(participant.to_string());
            ManifestEntry {
                id: cancer_type.clone(),
                participants,
            }
        })
        .collect()
}

/// Writes `Manifest.json` into `data_dir`, which must already exist.
pub fn write_manifest(data_dir: &Path, entries: &[ManifestEntry]) -> Result<PathBuf> {
    let path = data_dir.join(MANIFEST_FILE_NAME);
    write_pretty_json(&path, &entries)?;
    Ok(path)
}

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{BenchError, Result};
use crate::input::{load_gold_standard, load_predictions};
use crate::model::score;
use crate::model::thresholds::{DEFAULT_QVALUE_MAX, apply_filter, default_filter, filter_for_tool};
use crate::report::AssessmentResult;
use crate::report::json::write_pretty_json;

#[derive(Debug, Clone)]
pub struct AssessConfig {
    pub participant_data: PathBuf,
    pub gold_standards_dir: PathBuf,
    pub cancer_types: Vec<String>,
    pub participant: String,
    pub out_dir: PathBuf,
}

pub fn run_assessment(config: &AssessConfig) -> Result<Vec<AssessmentResult>> {
    let table = load_predictions(&config.participant_data)?;
    info!(
        "loaded {} prediction rows from {}",
        table.rows.len(),
        config.participant_data.display()
    );

    let rule = match filter_for_tool(&config.participant) {
        Some(rule) => rule,
        None => {
            warn!(
                "no filter registered for tool {}; using default qvalue <= {}",
                config.participant, DEFAULT_QVALUE_MAX
            );
            default_filter()
        }
    };

    let outcome = apply_filter(&table, rule)?;
    if outcome.rows_skipped_missing > 0 {
        warn!(
            "skipped {} rows with missing values in {}",
            outcome.rows_skipped_missing,
            config.participant_data.display()
        );
    }
    info!(
        "{} rows passed the filter, {} distinct genes",
        outcome.rows_kept,
        outcome.genes.len()
    );

    fs::create_dir_all(&config.out_dir).map_err(|err| BenchError::write(&config.out_dir, err))?;

    let mut results = Vec::with_capacity(config.cancer_types.len());
    for cancer_type in &config.cancer_types {
        let gold = load_gold_standard(&config.gold_standards_dir, cancer_type)?;
        let scores = score(&outcome.genes, &gold);
        let result = AssessmentResult::new(&config.participant, &gold, scores);
        let path = config.out_dir.join(result.file_name());
        write_pretty_json(&path, &result)?;
        info!(
            "{}: predicted={} gold={} overlap={} tpr={:.4} precision={:.4} -> {}",
            cancer_type,
            outcome.genes.len(),
            gold.genes.len(),
            scores.overlap,
            scores.tpr,
            scores.precision,
            path.display()
        );
        results.push(result);
    }

    Ok(results)
}

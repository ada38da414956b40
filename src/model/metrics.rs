use std::collections::BTreeSet;

use crate::input::GoldStandard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScores {
    pub overlap: usize,
    pub tpr: f64,
    pub precision: f64,
}

pub fn tpr(overlap: usize, n_gold: usize) -> f64 {
    if n_gold == 0 {
        0.0
    } else {
        overlap as f64 / n_gold as f64
    }
}

pub fn precision(overlap: usize, n_predicted: usize) -> f64 {
    if n_predicted == 0 {
        0.0
    } else {
        overlap as f64 / n_predicted as f64
    }
}

/// Scores a predicted gene set against one cancer type's gold standard.
/// Both ratios fall back to zero on an empty denominator.
pub fn score(predicted: &BTreeSet<String>, gold: &GoldStandard) -> MetricScores {
    let overlap = predicted.intersection(&gold.genes).count();
    MetricScores {
        overlap,
        tpr: tpr(overlap, gold.genes.len()),
        precision: precision(overlap, predicted.len()),
    }
}

pub mod json;

use serde::{Deserialize, Serialize};

use crate::input::GoldStandard;
use crate::model::MetricScores;

/// One participant's scores for one cancer type: `x` is the true
/// positive rate, `y` the precision, `e` a fixed zero error bar.
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub cancer_type: String,
    pub e: u32,
    pub toolname: String,
    pub x: f64,
    pub y: f64,
}

impl AssessmentResult {
    pub fn new(toolname: &str, gold: &GoldStandard, scores: MetricScores) -> Self {
        AssessmentResult {
            cancer_type: gold.cancer_type.clone(),
            e: 0,
            toolname: toolname.to_string(),
            x: scores.tpr,
            y: scores.precision,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_{}_assessment.json", self.cancer_type, self.toolname)
    }
}

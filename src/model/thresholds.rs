use std::collections::BTreeSet;

use crate::error::{BenchError, Result};
use crate::input::PredictionTable;

pub const DEFAULT_QVALUE_MAX: f64 = 0.05;

const QVALUE_COLUMN: &str = "qvalue";
const PVALUE_COLUMN: &str = "pvalue";
const INFO_COLUMN: &str = "info";

/// Values in a statistic column that mean "no call for this gene".
/// Rows carrying one are skipped rather than rejected as malformed.
const MISSING_TOKENS: &[&str] = &["", "NA", "NaN", "nan"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterRule {
    QvalueMax(f64),
    PvalueMaxWithInfo { max: f64, info: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct ToolFilter {
    pub tool: &'static str,
    pub rule: FilterRule,
}

fn music_pvalue_max() -> f64 {
    (-8.0f64).exp()
}

// MuSiC's cutoff is e^-8, which rules out a const table.
pub fn tool_filters() -> Vec<ToolFilter> {
    vec![
        ToolFilter {
            tool: "MutSig2CV",
            rule: FilterRule::QvalueMax(0.1),
        },
        ToolFilter {
            tool: "ActiveDriver",
            rule: FilterRule::QvalueMax(0.0001),
        },
        ToolFilter {
            tool: "MuSiC",
            rule: FilterRule::PvalueMaxWithInfo {
                max: music_pvalue_max(),
                info: "FILTER=PASS",
            },
        },
    ]
}

pub fn filter_for_tool(tool: &str) -> Option<FilterRule> {
    tool_filters()
        .into_iter()
        .find(|filter| filter.tool == tool)
        .map(|filter| filter.rule)
}

pub fn default_filter() -> FilterRule {
    FilterRule::QvalueMax(DEFAULT_QVALUE_MAX)
}

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub genes: BTreeSet<String>,
    pub rows_kept: usize,
    /// Rows skipped because the statistic or gene symbol was absent.
    pub rows_skipped_missing: usize,
}

/// Collects the distinct genes whose rows satisfy the rule. Missing-value
/// tokens skip the row; any other non-numeric statistic is a parse error.
pub fn apply_filter(table: &PredictionTable, rule: FilterRule) -> Result<FilterOutcome> {
    let (value_idx, value_column, max, info_check) = match rule {
        FilterRule::QvalueMax(max) => {
            let idx = table.require_column(QVALUE_COLUMN)?;
            (idx, QVALUE_COLUMN, max, None)
        }
        FilterRule::PvalueMaxWithInfo { max, info } => {
            let value_idx = table.require_column(PVALUE_COLUMN)?;
            let info_idx = table.require_column(INFO_COLUMN)?;
            (value_idx, PVALUE_COLUMN, max, Some((info_idx, info)))
        }
    };

    let mut genes = BTreeSet::new();
    let mut rows_kept = 0usize;
    let mut rows_skipped_missing = 0usize;

    for row in &table.rows {
        let gene = row.fields.first().map(String::as_str).unwrap_or("");
        if gene.is_empty() {
            rows_skipped_missing += 1;
            continue;
        }
        let Some(token) = row.fields.get(value_idx).map(String::as_str) else {
            rows_skipped_missing += 1;
            continue;
        };
        if MISSING_TOKENS.contains(&token) {
            rows_skipped_missing += 1;
            continue;
        }
        let value: f64 = token.parse().map_err(|_| {
            BenchError::parse(
                &table.path,
                format!(
                    "line {}: invalid {} value '{}'",
                    row.line, value_column, token
                ),
            )
        })?;
        // f64::from_str also accepts NAN/+nan/-nan; any NaN is a missing value.
        if value.is_nan() {
            rows_skipped_missing += 1;
            continue;
        }
        if value > max {
            continue;
        }
        if let Some((info_idx, expected)) = info_check {
            let Some(info) = row.fields.get(info_idx).map(String::as_str) else {
                rows_skipped_missing += 1;
                continue;
            };
            if info.is_empty() {
                rows_skipped_missing += 1;
                continue;
            }
            if info != expected {
                continue;
            }
        }
        rows_kept += 1;
        genes.insert(gene.to_string());
    }

    Ok(FilterOutcome {
        genes,
        rows_kept,
        rows_skipped_missing,
    })
}

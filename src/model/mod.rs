pub mod metrics;
pub mod thresholds;

pub use metrics::{MetricScores, precision, score, tpr};
pub use thresholds::{
    DEFAULT_QVALUE_MAX, FilterOutcome, FilterRule, ToolFilter, apply_filter, default_filter,
    filter_for_tool, tool_filters,
};

//! Benchmark utilities for cancer driver gene prediction: manifest
//! generation and TPR/precision scoring against per-cancer-type gold
//! standards.

pub mod assess;
pub mod error;
pub mod input;
pub mod manifest;
pub mod model;
pub mod report;

pub use assess::{AssessConfig, run_assessment};
pub use error::{BenchError, Result};
pub use manifest::{ManifestEntry, build_manifest, write_manifest};
pub use report::AssessmentResult;

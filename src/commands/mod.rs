//! Command implementations

pub mod analyze;
pub mod report;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_word};
pub use report::{Report, build_report, export_report};

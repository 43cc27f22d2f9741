// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change analysis module.
//!
//! Classifies changed files, extracts API endpoints from changed API files
//! and assembles the analysis report.

mod analyzer;
mod classify;
mod endpoints;
mod patterns;
mod report;

pub use analyzer::ChangeAnalyzer;
pub use classify::{categorize, classify, describe_change, Categories, ChangeCategory};
pub use endpoints::{
    analyze_api_changes, ApiChange, EndpointExtractor, EndpointRecord, HttpMethod, UNKNOWN_PATH,
};
pub use patterns::PatternSet;
pub use report::{AnalysisReport, Suggestions};

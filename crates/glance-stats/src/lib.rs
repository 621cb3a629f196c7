//! Aggregation engine: record set in, derived statistics out.
//!
//! Every function here is a pure, total map over one snapshot. Missing or
//! empty collections yield the empty/default statistic, never an error.
#![forbid(unsafe_code)]

pub mod audit;
pub mod bucket;
pub mod config;
pub mod histogram;
pub mod projects;

pub use audit::{AuditStats, compute_audit_stats};
pub use bucket::bucketize;
pub use config::StatsConfig;
pub use histogram::{HistogramPoint, compute_level_histogram, compute_xp_histogram};
pub use projects::{ProjectEntry, ViewerSummary, compute_project_history, viewer_summary};

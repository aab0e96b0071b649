//! Change-report reconciliation: the diff-report data model, single-source
//! pair selection, and cross-committee aggregation.

mod aggregate;
pub mod domain;
mod selector;

pub use aggregate::aggregate_latest;
pub use domain::{DiffReport, Interval, ParseIntervalError, ScanMetadata};
pub use selector::{select_diff_pair, DiffCandidates, DiffPair, FallbackPair, IntervalReports};

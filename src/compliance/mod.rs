//! Bill compliance classification: notice adequacy, evidence normalization,
//! the ordered state decision table, progress scoring, and recomputed
//! dashboard totals.
//!
//! Everything here is a pure function over an already-fetched [`Bill`]
//! snapshot. Missing or unrecognized inputs degrade to the most conservative
//! unresolved state; no function in this module raises an error.

mod classifier;
pub mod domain;
mod evidence;
mod notice;
mod progress;
mod stats;
mod views;

#[cfg(test)]
mod tests;

pub use classifier::classify;
pub use domain::{Bill, BillId, EffectiveState, NoticeStatus, UpstreamState};
pub use evidence::EvidenceFacts;
pub use notice::{evaluate_notice, NoticeVerdict};
pub use progress::{score, ProgressResult, RequirementStatus};
pub use stats::DashboardStats;
pub use views::BillComplianceView;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{DiffReport, Interval, ScanMetadata};

/// A diff report and the narrative describing it, both resolved from the same
/// candidate source.
///
/// The pairing is the load-bearing invariant of this module: a report from one
/// scan displayed next to prose from another visually contradicts itself, which
/// is unacceptable in a public accountability tool. A candidate that can only
/// supply one half is skipped whole, never used partially.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffPair {
    pub report: DiffReport,
    pub analysis: String,
}

/// Keyed-by-interval candidate: one report per interval, plus a top-level
/// narrative produced by the same scan for reports that do not embed their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalReports {
    #[serde(default)]
    pub reports: BTreeMap<Interval, DiffReport>,
    #[serde(default)]
    pub analysis: Option<String>,
}

/// Caller-supplied pair assumed already matched to one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackPair {
    pub diff_report: DiffReport,
    pub analysis: String,
}

/// Candidate sources for one display context, in fixed priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffCandidates {
    #[serde(default)]
    pub metadata: Option<ScanMetadata>,
    #[serde(default)]
    pub by_interval: Option<IntervalReports>,
    #[serde(default)]
    pub fallback: Option<FallbackPair>,
}

/// Resolve exactly one `(report, analysis)` pair from the candidate set.
///
/// Tiers are tried in priority order and the first one that can supply both
/// halves from its own source wins; `None` means the caller renders nothing
/// rather than a placeholder or a stale pair. Stateless and deterministic:
/// re-run on every interval change or fetch.
pub fn select_diff_pair(candidates: &DiffCandidates, interval: Interval) -> Option<DiffPair> {
    resolve_metadata(candidates.metadata.as_ref())
        .or_else(|| resolve_keyed(candidates.by_interval.as_ref(), interval))
        .or_else(|| resolve_fallback(candidates.fallback.as_ref()))
}

/// Tier 1: a scan-metadata row carrying both a report and its narrative.
fn resolve_metadata(metadata: Option<&ScanMetadata>) -> Option<DiffPair> {
    let metadata = metadata?;
    let report = metadata.diff_report.clone()?;
    let analysis = metadata.analysis.clone()?;
    Some(DiffPair { report, analysis })
}

/// Tier 2: the report keyed under the requested interval (falling back to
/// daily), paired with its embedded narrative or the map's top-level one.
fn resolve_keyed(keyed: Option<&IntervalReports>, interval: Interval) -> Option<DiffPair> {
    let keyed = keyed?;
    let report = keyed
        .reports
        .get(&interval)
        .or_else(|| keyed.reports.get(&Interval::Daily))?;
    let analysis = report.analysis.clone().or_else(|| keyed.analysis.clone())?;
    Some(DiffPair {
        report: report.clone(),
        analysis,
    })
}

/// Tier 3: direct caller-supplied pair.
fn resolve_fallback(fallback: Option<&FallbackPair>) -> Option<DiffPair> {
    fallback.map(|pair| DiffPair {
        report: pair.diff_report.clone(),
        analysis: pair.analysis.clone(),
    })
}

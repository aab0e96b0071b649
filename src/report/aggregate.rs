use std::collections::BTreeSet;

use super::domain::{DiffReport, ScanMetadata};

/// Fold the latest scan per committee into one dashboard-wide report.
///
/// Counts are summed, `compliance_delta` is averaged over the scans that carry
/// one, and per-bill ID lists are unioned, deduplicated, and sorted so the
/// aggregate is deterministic regardless of committee order. The aggregate
/// carries no narrative: there is no single scan whose prose could describe it,
/// and pairing it with any one committee's analysis would break the
/// same-source rule.
///
/// Returns `None` when no committee has a usable diff report.
pub fn aggregate_latest(scans: &[ScanMetadata]) -> Option<ScanMetadata> {
    let mut merged = DiffReport::default();
    let mut delta_sum = 0.0;
    let mut delta_count = 0u32;
    let mut new_bills = BTreeSet::new();
    let mut new_hearings = BTreeSet::new();
    let mut new_summaries = BTreeSet::new();
    let mut new_votes = BTreeSet::new();
    let mut reported_out = BTreeSet::new();
    let mut scan_date = None;
    let mut usable = 0u32;

    for scan in scans {
        let Some(report) = scan.diff_report.as_ref() else {
            continue;
        };
        usable += 1;

        if let Some(delta) = report.compliance_delta {
            delta_sum += delta;
            delta_count += 1;
        }
        merged.new_bills_count += report.new_bills_count;
        new_bills.extend(report.new_bills.iter().cloned());
        new_hearings.extend(report.bills_with_new_hearings.iter().cloned());
        new_summaries.extend(report.bills_with_new_summaries.iter().cloned());
        new_votes.extend(report.bills_with_new_votes.iter().cloned());
        reported_out.extend(report.bills_reported_out.iter().cloned());

        // Interval and window dates should agree across committees scanned in
        // the same cycle; keep the first seen.
        if merged.time_interval.is_none() {
            merged.time_interval = report.time_interval;
        }
        if merged.previous_date.is_none() {
            merged.previous_date = report.previous_date;
        }
        if merged.current_date.is_none() {
            merged.current_date = report.current_date;
        }

        if let Some(date) = scan.scan_date {
            scan_date = Some(match scan_date {
                Some(latest) if latest > date => latest,
                _ => date,
            });
        }
    }

    if usable == 0 {
        return None;
    }

    merged.compliance_delta = (delta_count > 0).then(|| delta_sum / f64::from(delta_count));
    merged.new_bills = new_bills.into_iter().collect();
    merged.bills_with_new_hearings = new_hearings.into_iter().collect();
    merged.bills_with_new_summaries = new_summaries.into_iter().collect();
    merged.bills_with_new_votes = new_votes.into_iter().collect();
    merged.bills_reported_out = reported_out.into_iter().collect();

    Some(ScanMetadata {
        diff_report: Some(merged),
        analysis: None,
        scan_date,
    })
}

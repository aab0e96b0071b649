use serde::Serialize;

use super::classifier::classify;
use super::domain::{Bill, EffectiveState};

/// Dashboard-wide totals recomputed from the bill set.
///
/// Upstream aggregate payloads relabeled the same unresolved bucket under two
/// names in places, so these figures are always rebuilt by summing
/// [`classify`] over the full set rather than trusted from a feed. The two
/// unresolved counters stay separate for auditing even though the public
/// payload presents them together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_bills: u32,
    pub compliant_bills: u32,
    pub non_compliant_bills: u32,
    pub provisional_bills: u32,
    pub monitoring_bills: u32,
    pub unresolved_bills: u32,
    pub compliance_rate: f64,
}

impl DashboardStats {
    pub fn from_bills(bills: &[Bill]) -> Self {
        let mut compliant = 0u32;
        let mut non_compliant = 0u32;
        let mut provisional = 0u32;
        let mut monitoring = 0u32;

        for bill in bills {
            match classify(bill) {
                EffectiveState::Compliant => compliant += 1,
                EffectiveState::NonCompliant => non_compliant += 1,
                EffectiveState::Provisional => provisional += 1,
                EffectiveState::Monitoring => monitoring += 1,
            }
        }

        Self {
            total_bills: bills.len() as u32,
            compliant_bills: compliant,
            non_compliant_bills: non_compliant,
            provisional_bills: provisional,
            monitoring_bills: monitoring,
            unresolved_bills: provisional + monitoring,
            compliance_rate: compliance_rate(compliant, non_compliant),
        }
    }
}

/// Share of resolved bills that are compliant, as a percentage rounded to two
/// decimals. Unresolved bills are excluded from the denominator so a chamber
/// full of pending hearings does not read as failing.
fn compliance_rate(compliant: u32, non_compliant: u32) -> f64 {
    let resolved = compliant + non_compliant;
    if resolved == 0 {
        return 0.0;
    }
    (10_000.0 * f64::from(compliant) / f64::from(resolved)).round() / 100.0
}

use serde::Serialize;

use super::classifier::classify;
use super::domain::{Bill, EffectiveState};
use super::progress::{score, ProgressResult};

/// Serialized classification for one bill as the rendering layer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillComplianceView {
    pub bill_id: String,
    pub committee_id: String,
    pub state: EffectiveState,
    pub state_label: &'static str,
    pub progress: ProgressResult,
}

impl BillComplianceView {
    pub fn for_bill(bill: &Bill) -> Self {
        let state = classify(bill);
        Self {
            bill_id: bill.bill_id.0.clone(),
            committee_id: bill.committee_id.clone(),
            state,
            state_label: state.label(),
            progress: score(bill),
        }
    }
}

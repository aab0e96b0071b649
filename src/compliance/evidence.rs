use serde::Serialize;

use super::domain::Bill;

/// Normalized evidence facts for one bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvidenceFacts {
    pub reported_out: bool,
    pub summary_present: bool,
    pub votes_present: bool,
}

impl EvidenceFacts {
    /// Normalize the raw feed flags into a consistent fact set.
    ///
    /// A vote record cannot exist unless the committee reported the bill out,
    /// so published votes prove the reported-out fact even when the upstream
    /// flag was never set (a known gap in the feed). The inference is
    /// one-directional: it only turns a false flag true.
    pub fn aggregate(reported_out: bool, summary_present: bool, votes_present: bool) -> Self {
        Self {
            reported_out: reported_out || votes_present,
            summary_present,
            votes_present,
        }
    }

    pub fn from_bill(bill: &Bill) -> Self {
        Self::aggregate(bill.reported_out, bill.summary_present, bill.votes_present)
    }

    pub fn all(self) -> bool {
        self.reported_out && self.summary_present && self.votes_present
    }

    pub fn any(self) -> bool {
        self.reported_out || self.summary_present || self.votes_present
    }
}

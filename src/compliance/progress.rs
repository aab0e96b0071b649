use serde::Serialize;

use super::domain::Bill;
use super::evidence::EvidenceFacts;
use super::notice::{evaluate_notice, NoticeVerdict};

/// One requirement on the progress bar: met or not, plus its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementStatus {
    pub met: bool,
    pub label: String,
}

/// Requirements-met count and per-requirement labels for progress rendering.
///
/// Deliberately independent of the gating [`classify`] verdict: a bill that
/// failed notice can still show 3/4, because the bar communicates raw evidence
/// completeness while the badge communicates the overriding judgment. The two
/// widgets diverge by design and must never be collapsed into one value.
///
/// [`classify`]: super::classify
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressResult {
    pub met_count: u8,
    pub total_count: u8,
    pub notice: RequirementStatus,
    pub reported_out: RequirementStatus,
    pub summary: RequirementStatus,
    pub votes: RequirementStatus,
}

impl ProgressResult {
    /// Requirements in display order.
    pub fn entries(&self) -> [(&'static str, &RequirementStatus); 4] {
        [
            ("notice", &self.notice),
            ("reported_out", &self.reported_out),
            ("summary", &self.summary),
            ("votes", &self.votes),
        ]
    }
}

/// Score the four publication requirements for one bill.
pub fn score(bill: &Bill) -> ProgressResult {
    let verdict = evaluate_notice(bill.notice_status, bill.notice_gap_days);
    let facts = EvidenceFacts::from_bill(bill);
    score_from_parts(&verdict, facts)
}

pub(crate) fn score_from_parts(verdict: &NoticeVerdict, facts: EvidenceFacts) -> ProgressResult {
    let notice = RequirementStatus {
        met: verdict.adequate,
        label: verdict.label.clone(),
    };
    let reported_out = requirement(
        facts.reported_out,
        "Reported out of committee",
        "Not reported out",
    );
    let summary = requirement(facts.summary_present, "Summary published", "Summary missing");
    let votes = requirement(facts.votes_present, "Votes published", "Votes missing");

    let met_count = [&notice, &reported_out, &summary, &votes]
        .iter()
        .filter(|requirement| requirement.met)
        .count() as u8;

    ProgressResult {
        met_count,
        total_count: 4,
        notice,
        reported_out,
        summary,
        votes,
    }
}

fn requirement(met: bool, met_label: &str, unmet_label: &str) -> RequirementStatus {
    RequirementStatus {
        met,
        label: if met { met_label } else { unmet_label }.to_string(),
    }
}

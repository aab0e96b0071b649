use super::domain::{Bill, EffectiveState, NoticeStatus};
use super::evidence::EvidenceFacts;
use super::notice::{evaluate_notice, NoticeVerdict};

/// Classify one bill into its effective compliance state.
///
/// Pure and idempotent: the dashboard recomputes this on every refresh and an
/// unchanged snapshot must never flicker between equivalent states.
pub fn classify(bill: &Bill) -> EffectiveState {
    let verdict = evaluate_notice(bill.notice_status, bill.notice_gap_days);
    let facts = EvidenceFacts::from_bill(bill);
    decide_state(&verdict, facts, bill.hearing_date.is_some())
}

/// Ordered decision table; the first matching rule wins.
///
/// Insufficient notice is a hard, overriding failure: no amount of published
/// evidence can lift a bill whose hearing was announced too late. Everything
/// unresolved degrades toward `Monitoring`, never toward `Compliant`.
pub(crate) fn decide_state(
    verdict: &NoticeVerdict,
    facts: EvidenceFacts,
    has_hearing: bool,
) -> EffectiveState {
    match verdict.status {
        NoticeStatus::OutOfRange => EffectiveState::NonCompliant,
        NoticeStatus::Unknown => EffectiveState::Monitoring,
        NoticeStatus::InRange if facts.all() => EffectiveState::Compliant,
        NoticeStatus::InRange if has_hearing && facts.any() => EffectiveState::Provisional,
        NoticeStatus::InRange => EffectiveState::Monitoring,
    }
}

use chrono::NaiveDate;

use crate::compliance::domain::{Bill, BillId, NoticeStatus};

pub(super) fn hearing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

/// A bill with adequate notice, a scheduled hearing, and no evidence yet.
pub(super) fn bill(id: &str) -> Bill {
    Bill {
        bill_id: BillId(id.to_string()),
        committee_id: "house-judiciary".to_string(),
        hearing_date: Some(hearing_date()),
        notice_status: NoticeStatus::InRange,
        notice_gap_days: Some(12),
        reported_out: false,
        summary_present: false,
        votes_present: false,
        state: None,
    }
}

pub(super) fn bill_with_evidence(
    id: &str,
    reported_out: bool,
    summary_present: bool,
    votes_present: bool,
) -> Bill {
    Bill {
        reported_out,
        summary_present,
        votes_present,
        ..bill(id)
    }
}

pub(super) fn short_notice_bill(id: &str) -> Bill {
    Bill {
        notice_status: NoticeStatus::OutOfRange,
        notice_gap_days: Some(4),
        ..bill_with_evidence(id, true, true, true)
    }
}

pub(super) fn unknown_notice_bill(id: &str) -> Bill {
    Bill {
        notice_status: NoticeStatus::Unknown,
        notice_gap_days: None,
        hearing_date: None,
        ..bill(id)
    }
}

use serde::Serialize;

use super::domain::NoticeStatus;

/// Outcome of hearing-notice evaluation: whether the advance notice was
/// adequate, plus the text the dashboard shows for the notice requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeVerdict {
    pub status: NoticeStatus,
    pub adequate: bool,
    pub label: String,
}

/// Classify hearing-notice adequacy from the normalized status tag and the
/// gap-in-days when the scraper could compute one.
///
/// Total over all inputs: an `Unknown` status (missing notice, no evaluable
/// hearing, or an unrecognized tag upstream) is inadequate for classification
/// but labeled distinctly from an explicit failure, so "we cannot tell" never
/// reads as "too short".
pub fn evaluate_notice(status: NoticeStatus, gap_days: Option<i32>) -> NoticeVerdict {
    match status {
        NoticeStatus::InRange => NoticeVerdict {
            status,
            adequate: true,
            label: match gap_days {
                Some(days) => format!("{days} days notice"),
                None => "Notice compliant".to_string(),
            },
        },
        NoticeStatus::OutOfRange => NoticeVerdict {
            status,
            adequate: false,
            label: match gap_days {
                Some(days) => format!("Only {days} days notice"),
                None => "Notice missing".to_string(),
            },
        },
        NoticeStatus::Unknown => NoticeVerdict {
            status,
            adequate: false,
            label: "Notice unknown".to_string(),
        },
    }
}

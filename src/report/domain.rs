use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Scan interval a change report covers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Raised when strict interval parsing (operator configuration, CLI flags)
/// sees an unrecognized tag. Feed payloads go through the lenient
/// [`Interval::from_tag`] path instead.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized interval '{0}', expected daily, weekly, or monthly")]
pub struct ParseIntervalError(pub String);

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

/// Tolerant deserializer for interval tags inside feed payloads: an
/// unrecognized tag becomes `None` instead of rejecting the whole report.
fn interval_tag<'de, D>(deserializer: D) -> Result<Option<Interval>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Interval::from_tag))
}

/// Summary of changes between two scans of legislative data.
///
/// Field set mirrors the scanner's `diff_report` JSON; every field is
/// defaulted so a sparse payload still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    #[serde(default, deserialize_with = "interval_tag")]
    pub time_interval: Option<Interval>,
    #[serde(default)]
    pub previous_date: Option<NaiveDate>,
    #[serde(default)]
    pub current_date: Option<NaiveDate>,
    #[serde(default)]
    pub compliance_delta: Option<f64>,
    #[serde(default)]
    pub new_bills_count: u32,
    #[serde(default)]
    pub new_bills: Vec<String>,
    #[serde(default)]
    pub bills_with_new_hearings: Vec<String>,
    #[serde(default)]
    pub bills_with_new_summaries: Vec<String>,
    #[serde(default)]
    pub bills_with_new_votes: Vec<String>,
    #[serde(default)]
    pub bills_reported_out: Vec<String>,
    /// Narrative written by the same scan, when the feed embeds it on the
    /// report rather than alongside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// One scan-metadata row for a committee: the diff report and narrative the
/// scan produced, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanMetadata {
    #[serde(default)]
    pub diff_report: Option<DiffReport>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub scan_date: Option<DateTime<Utc>>,
}

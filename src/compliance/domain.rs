use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for bills tracked across compliance scans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId(pub String);

/// Advance-notice tag computed upstream from hearing announcements.
///
/// Feeds spell this inconsistently across scraper versions ("In range",
/// "in_range", "OUT-OF-RANGE"), so the tag is normalized exactly once at the
/// deserialization boundary. Nothing downstream matches on raw strings, and an
/// unrecognized tag degrades to `Unknown` rather than failing the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    InRange,
    OutOfRange,
    #[default]
    Unknown,
}

impl NoticeStatus {
    pub fn from_tag(tag: &str) -> Self {
        match normalize_tag(tag).as_str() {
            "in range" => Self::InRange,
            "out of range" => Self::OutOfRange,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for NoticeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from_tag).unwrap_or_default())
    }
}

/// Coarse classification carried by older feed rows for backward
/// compatibility. Never authoritative: the dashboard recomputes the
/// finer-grained [`EffectiveState`] from raw evidence on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpstreamState {
    Compliant,
    NonCompliant,
    #[default]
    Unknown,
}

impl UpstreamState {
    /// The backend merged its legacy "incomplete" bucket into non-compliant
    /// for presentation; the same merge happens here at the boundary.
    pub fn from_tag(tag: &str) -> Self {
        match normalize_tag(tag).as_str() {
            "compliant" => Self::Compliant,
            "non compliant" | "noncompliant" | "incomplete" => Self::NonCompliant,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for UpstreamState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from_tag).unwrap_or_default())
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// One bill's evidence snapshot as fetched from the compliance feed.
///
/// Read-only per display cycle; classification and scoring never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub bill_id: BillId,
    #[serde(default)]
    pub committee_id: String,
    #[serde(default)]
    pub hearing_date: Option<NaiveDate>,
    #[serde(default)]
    pub notice_status: NoticeStatus,
    #[serde(default)]
    pub notice_gap_days: Option<i32>,
    #[serde(default)]
    pub reported_out: bool,
    #[serde(default)]
    pub summary_present: bool,
    #[serde(default)]
    pub votes_present: bool,
    #[serde(default)]
    pub state: Option<UpstreamState>,
}

/// Four-way compliance classification driving every dashboard widget.
///
/// `Provisional` and `Monitoring` are both unresolved-but-not-failing and
/// share a display label, but they are computed differently and stay
/// distinguishable here so audits can tell "on track" from "no evidence".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectiveState {
    Compliant,
    NonCompliant,
    Provisional,
    Monitoring,
}

impl EffectiveState {
    /// Display label. Three labels for four states by design: the public
    /// badge does not distinguish the two unresolved states.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-Compliant",
            Self::Provisional | Self::Monitoring => "Provisional",
        }
    }

    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Provisional | Self::Monitoring)
    }
}

//! billwatch: compliance classification core and thin HTTP surface for the
//! legislative accountability dashboard.
//!
//! The interesting logic lives in [`compliance`] (per-bill classification and
//! progress scoring) and [`report`] (diff-report pair selection and
//! aggregation); everything else is glue around those pure functions.

pub mod compliance;
pub mod config;
pub mod error;
pub mod report;
pub mod router;
pub mod telemetry;

//! Rental duration computation and formatting.
//!
//! Rental durations are shown as a "days:hours:minutes" string, which is not
//! lexicographically sortable ("46:17:12" compares above "186:21:12" as text
//! despite being a fraction of it). Every duration is therefore carried as a
//! [`DurationData`] pair: the human-readable string for display and a raw
//! seconds value for ordering. The two fields are always derived together
//! from the same interval; callers must never recompute one of them
//! independently.
//!
//! Special cases get fixed sort values so mixed tables order sensibly:
//! an open rental sorts above every closed one (`+inf`), and equipment that
//! was never rented sorts with zero.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rentrack::libs::duration::{rental_duration, format_seconds};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(11, 30, 0).unwrap();
//!
//! let data = rental_duration(Some(start), Some(end));
//! assert_eq!(data.display, "1:01:30");
//! assert_eq!(data.sort_seconds, 91800.0);
//!
//! // Open rental: sorts above everything
//! let open = rental_duration(Some(start), None);
//! assert_eq!(open.display, "Active rental");
//! assert!(open.sort_seconds.is_infinite());
//!
//! assert_eq!(format_seconds(3600.0), "0:01:00");
//! ```

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::warn;

/// Display string for equipment that has never been rented.
pub const NEVER_RENTED: &str = "Never Rented";

/// Display string for a rental that is still open.
pub const ACTIVE_RENTAL: &str = "Active rental";

/// Display string for a zero-length (or clamped) duration.
pub const ZERO_DURATION: &str = "0:00:00";

/// A duration rendered two ways: a display string for humans and a numeric
/// seconds value for sorting.
///
/// Tables render `display` and order rows by `sort_seconds`; exports write
/// `display` only. The numeric field is `+inf` for open rentals and `0` for
/// the never-rented and clamped cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationData {
    pub display: String,
    pub sort_seconds: f64,
}

impl DurationData {
    fn new(display: impl Into<String>, sort_seconds: f64) -> Self {
        Self {
            display: display.into(),
            sort_seconds,
        }
    }

    /// Defensive validity check before rows are handed to a sortable table:
    /// the sort value must order against other rows, so NaN is rejected.
    pub fn is_well_formed(&self) -> bool {
        !self.display.is_empty() && !self.sort_seconds.is_nan()
    }
}

/// Computes the duration pair for a rental interval.
///
/// - no start: the equipment was never rented (`"Never Rented"`, 0)
/// - no end: the rental is still open (`"Active rental"`, `+inf`), so open
///   rentals always sort first in descending order no matter how recent
/// - end before start: clamped to zero (bad historical data should degrade
///   the report, not crash it; the anomaly is logged by [`elapsed_seconds`])
/// - otherwise: `D:HH:MM` display with the raw elapsed seconds as sort value
pub fn rental_duration(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> DurationData {
    let Some(start) = start else {
        return DurationData::new(NEVER_RENTED, 0.0);
    };
    let Some(end) = end else {
        return DurationData::new(ACTIVE_RENTAL, f64::INFINITY);
    };

    let seconds = elapsed_seconds(start, end);
    DurationData::new(format_seconds(seconds), seconds)
}

/// Elapsed-so-far duration for an open rental, measured against the wall
/// clock. Unlike [`rental_duration`] this never reports `"Active rental"`;
/// it shows the span accumulated so far. An absent start or a start in the
/// future (clock skew) yields the zero duration.
pub fn current_rental_duration(start: Option<NaiveDateTime>) -> DurationData {
    let Some(start) = start else {
        return DurationData::new(ZERO_DURATION, 0.0);
    };

    let seconds = elapsed_seconds(start, Local::now().naive_local());
    DurationData::new(format_seconds(seconds), seconds)
}

/// The one subtraction every duration in the system goes through: elapsed
/// whole seconds between two timestamps, clamped at zero.
///
/// A negative span means the end precedes the start, which only happens with
/// corrupted history; the clamp keeps reports alive while the warning makes
/// the bad row visible in logs.
pub fn elapsed_seconds(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let seconds = (end - start).num_seconds();
    if seconds < 0 {
        warn!(%start, %end, "rental interval ends before it starts; clamping duration to zero");
        return 0.0;
    }
    seconds as f64
}

/// Formats a seconds value as `D:HH:MM`: days unpadded (and free to exceed
/// 99), hours and minutes zero-padded to two digits, seconds truncated to
/// minute granularity. Anything at or below zero renders as `"0:00:00"`.
pub fn format_seconds(total_seconds: f64) -> String {
    if total_seconds <= 0.0 {
        return ZERO_DURATION.to_string();
    }

    let seconds = total_seconds as i64;
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    format!("{}:{:02}:{:02}", days, hours, minutes)
}

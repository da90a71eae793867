//! Aggregated rental statistics.
//!
//! Turns already-fetched rental rows into report rows, grouped by one of
//! four dimensions: user, equipment type, equipment name, or department.
//! Every function here is a pure pass over its inputs - the database work
//! happens in the stores, so these can be exercised with hand-built rows.
//!
//! All dimensions share one summation routine ([`sum_completed`]), so the
//! duration arithmetic is identical everywhere: only returned rentals count,
//! elapsed seconds come from [`duration::elapsed_seconds`], and each group's
//! display string and numeric sort value are derived from the same summed
//! total. Groups that never accumulated any rental time are still reported,
//! labelled `"never rented"` - at the aggregate level a zero total means "no
//! completed rental ever", not "a rental of measured zero length".
//!
//! Rows come back sorted by group name; callers re-sort by the
//! `duration_seconds` field when the user asks for a by-duration ordering.

use crate::db::departments::Department;
use crate::db::equipment::Equipment;
use crate::db::etypes::EquipmentType;
use crate::db::rentals::RentalRecord;
use crate::db::users::User;
use crate::libs::duration::{self, format_seconds};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;

/// Aggregate-level display for a group with no completed rental time.
pub const NEVER_RENTED_TOTAL: &str = "never rented";

/// Fallback type label for equipment without an assigned type.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// An inclusive date window for report queries.
///
/// The upper bound covers the whole day: a rental returned at 23:59:59 on
/// `to` is inside the window, one starting the next second is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPeriod {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportPeriod {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Datetime bounds for SQL filtering: the start of `from` and the last
    /// second of `to`.
    pub fn bounds(&self) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
        let from = self.from.and_then(|d| d.and_hms_opt(0, 0, 0));
        let to = self.to.and_then(|d| d.and_hms_opt(23, 59, 59));
        (from, to)
    }
}

/// Per-user totals: rental count and summed rental time.
#[derive(Debug, Clone, Serialize)]
pub struct UserStat {
    pub name: String,
    pub department: String,
    pub rental_count: usize,
    pub total_rental_time: String,
    pub duration_seconds: f64,
}

/// Per-type totals, including how much of the type's stock is currently out.
#[derive(Debug, Clone, Serialize)]
pub struct EtypeStat {
    pub name: String,
    pub total_equipment: usize,
    pub active_rentals: usize,
    pub availability_pct: f64,
    pub rental_count: usize,
    pub total_rental_time: String,
    pub duration_seconds: f64,
}

/// Per-name totals. Distinct devices sharing a display name are merged into
/// one row; `instance_count` says how many there are.
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentNameStat {
    pub name: String,
    pub etype: String,
    pub instance_count: usize,
    pub rental_count: usize,
    pub total_rental_time: String,
    pub duration_seconds: f64,
}

/// Per-department totals across all of the department's users.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentStat {
    pub name: String,
    pub rental_count: usize,
    pub total_rental_time: String,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct GroupTotal {
    count: usize,
    seconds: f64,
}

impl GroupTotal {
    /// Display string and sort value, derived together from the summed
    /// seconds so they can never disagree.
    fn duration_fields(&self) -> (String, f64) {
        let display = if self.seconds <= 0.0 {
            NEVER_RENTED_TOTAL.to_string()
        } else {
            format_seconds(self.seconds)
        };
        (display, self.seconds)
    }
}

/// Groups completed rentals by an arbitrary key and sums elapsed seconds.
///
/// Records without an end timestamp are skipped (open rentals never count
/// toward completed totals), as are records the key extractor rejects.
/// This is the only place aggregate duration arithmetic happens.
fn sum_completed<K, F>(records: &[RentalRecord], key: F) -> HashMap<K, GroupTotal>
where
    K: Eq + std::hash::Hash,
    F: Fn(&RentalRecord) -> Option<K>,
{
    let mut totals: HashMap<K, GroupTotal> = HashMap::new();
    for record in records {
        let Some(end) = record.end else { continue };
        let Some(key) = key(record) else { continue };
        let total = totals.entry(key).or_default();
        total.count += 1;
        total.seconds += duration::elapsed_seconds(record.start, end);
    }
    totals
}

/// Rental statistics per user. Every user gets a row, including those with
/// no completed rentals.
pub fn user_statistics(users: &[User], completed: &[RentalRecord]) -> Vec<UserStat> {
    let totals = sum_completed(completed, |r| Some(r.user_id));

    let mut stats: Vec<UserStat> = users
        .iter()
        .map(|user| {
            let total = totals.get(&user.id).copied().unwrap_or_default();
            let (total_rental_time, duration_seconds) = total.duration_fields();
            UserStat {
                name: user.name.clone(),
                department: user.department.clone(),
                rental_count: total.count,
                total_rental_time,
                duration_seconds,
            }
        })
        .collect();

    stats.sort_by(|a, b| a.name.cmp(&b.name));
    stats
}

/// Rental statistics per equipment type, with stock and availability
/// figures. An empty type counts as fully available.
pub fn etype_statistics(
    etypes: &[EquipmentType],
    equipment: &[Equipment],
    active: &[RentalRecord],
    completed: &[RentalRecord],
) -> Vec<EtypeStat> {
    let totals = sum_completed(completed, |r| r.etype.clone());

    let mut stats: Vec<EtypeStat> = etypes
        .iter()
        .map(|etype| {
            let total_equipment = equipment.iter().filter(|e| e.etype_id == Some(etype.id)).count();
            let active_rentals = active
                .iter()
                .filter(|r| r.end.is_none() && r.etype.as_deref() == Some(etype.name.as_str()))
                .count();
            let availability_pct = if total_equipment == 0 {
                100.0
            } else {
                total_equipment.saturating_sub(active_rentals) as f64 / total_equipment as f64 * 100.0
            };

            let total = totals.get(&etype.name).copied().unwrap_or_default();
            let (total_rental_time, duration_seconds) = total.duration_fields();
            EtypeStat {
                name: etype.name.clone(),
                total_equipment,
                active_rentals,
                availability_pct,
                rental_count: total.count,
                total_rental_time,
                duration_seconds,
            }
        })
        .collect();

    stats.sort_by(|a, b| a.name.cmp(&b.name));
    stats
}

/// Rental statistics per equipment display name. Devices sharing a name are
/// one row; the type label comes from the first typed instance.
pub fn equipment_name_statistics(equipment: &[Equipment], completed: &[RentalRecord]) -> Vec<EquipmentNameStat> {
    let totals = sum_completed(completed, |r| Some(r.equipment.clone()));

    // Collapse the inventory by display name before attaching totals.
    let mut by_name: HashMap<&str, (usize, Option<&str>)> = HashMap::new();
    for item in equipment {
        let entry = by_name.entry(item.name.as_str()).or_insert((0, None));
        entry.0 += 1;
        if entry.1.is_none() {
            entry.1 = item.etype.as_deref();
        }
    }

    let mut stats: Vec<EquipmentNameStat> = by_name
        .into_iter()
        .map(|(name, (instance_count, etype))| {
            let total = totals.get(name).copied().unwrap_or_default();
            let (total_rental_time, duration_seconds) = total.duration_fields();
            EquipmentNameStat {
                name: name.to_string(),
                etype: etype.unwrap_or(UNKNOWN_TYPE).to_string(),
                instance_count,
                rental_count: total.count,
                total_rental_time,
                duration_seconds,
            }
        })
        .collect();

    stats.sort_by(|a, b| a.name.cmp(&b.name));
    stats
}

/// Rental statistics per department.
pub fn department_statistics(departments: &[Department], completed: &[RentalRecord]) -> Vec<DepartmentStat> {
    let totals = sum_completed(completed, |r| Some(r.department.clone()));

    let mut stats: Vec<DepartmentStat> = departments
        .iter()
        .map(|department| {
            let total = totals.get(&department.name).copied().unwrap_or_default();
            let (total_rental_time, duration_seconds) = total.duration_fields();
            DepartmentStat {
                name: department.name.clone(),
                rental_count: total.count,
                total_rental_time,
                duration_seconds,
            }
        })
        .collect();

    stats.sort_by(|a, b| a.name.cmp(&b.name));
    stats
}

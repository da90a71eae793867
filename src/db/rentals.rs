//! Rental records: who took which piece of equipment, and when.
//!
//! Rentals are append-only. A record is created open (no end timestamp) and
//! is mutated exactly once, when the equipment comes back. Reports and the
//! history view consume [`RentalRecord`] rows with all entity names already
//! joined in.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::report::ReportPeriod;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

const INSERT_RENTAL: &str =
    "INSERT INTO rentals (user_id, equipment_id, rental_start, comment) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'), ?3)";
const CLOSE_RENTAL: &str = "UPDATE rentals SET rental_end = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE id = ?1 AND rental_end IS NULL";
const SELECT_RECORDS: &str = "SELECT r.id, r.user_id, u.name, d.name, r.equipment_id, e.name, e.serialnum, t.name, r.rental_start, r.rental_end, r.comment
    FROM rentals r
    JOIN users u ON u.id = r.user_id
    JOIN departments d ON d.id = u.department_id
    JOIN equipment e ON e.id = r.equipment_id
    LEFT JOIN etypes t ON t.id = e.etype_id";

/// One rental row with resolved user/department/equipment/type names.
///
/// An absent `end` means the rental is still open.
#[derive(Debug, Clone)]
pub struct RentalRecord {
    pub id: i64,
    pub user_id: i64,
    pub user: String,
    pub department: String,
    pub equipment_id: i64,
    pub equipment: String,
    pub serialnum: Option<String>,
    pub etype: Option<String>,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub comment: Option<String>,
}

/// Row selection for [`Rentals::fetch`].
#[derive(Debug, Clone)]
pub enum RentalFilter {
    /// Every rental, most recent first.
    All,
    /// Open rentals only, ordered by equipment name.
    Active,
    /// Returned rentals only, optionally restricted to a date window.
    /// The lower bound applies to the start, the upper bound to the end;
    /// both are inclusive.
    Completed(Option<ReportPeriod>),
}

pub struct Rentals {
    pub conn: Connection,
}

impl Rentals {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Rentals { conn: db.conn })
    }

    /// Opens a rental. The equipment must not already be out.
    pub fn start(&mut self, user_id: i64, equipment_id: i64, comment: Option<&str>) -> Result<i64> {
        if let Some(open) = self.active_for_equipment(equipment_id)? {
            msg_bail_anyhow!(Message::EquipmentAlreadyRented(open.equipment, open.user));
        }
        self.conn.execute(INSERT_RENTAL, params![user_id, equipment_id, comment])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Stamps the end timestamp on an open rental. Returns the number of
    /// affected rows: 0 means the rental was already closed or unknown.
    pub fn finish(&mut self, rental_id: i64) -> Result<usize> {
        Ok(self.conn.execute(CLOSE_RENTAL, params![rental_id])?)
    }

    /// The open rental for a piece of equipment, if any.
    pub fn active_for_equipment(&mut self, equipment_id: i64) -> Result<Option<RentalRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{} WHERE r.equipment_id = ?1 AND r.rental_end IS NULL", SELECT_RECORDS),
                params![equipment_id],
                Self::map_row,
            )
            .optional()?;
        Ok(record)
    }

    pub fn fetch(&mut self, filter: RentalFilter) -> Result<Vec<RentalRecord>> {
        let mut bounds: Vec<NaiveDateTime> = Vec::new();
        let sql = match &filter {
            RentalFilter::All => format!("{} ORDER BY r.rental_start DESC", SELECT_RECORDS),
            RentalFilter::Active => format!("{} WHERE r.rental_end IS NULL ORDER BY e.name", SELECT_RECORDS),
            RentalFilter::Completed(period) => {
                let mut clauses = vec!["r.rental_end IS NOT NULL".to_string()];
                if let Some(period) = period {
                    let (from, to) = period.bounds();
                    if let Some(from) = from {
                        bounds.push(from);
                        clauses.push(format!("r.rental_start >= ?{}", bounds.len()));
                    }
                    if let Some(to) = to {
                        bounds.push(to);
                        clauses.push(format!("r.rental_end <= ?{}", bounds.len()));
                    }
                }
                format!("{} WHERE {} ORDER BY r.rental_start", SELECT_RECORDS, clauses.join(" AND "))
            }
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bounds.iter()), Self::map_row)?;
        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RentalRecord> {
        Ok(RentalRecord {
            id: row.get(0)?,
            user_id: row.get(1)?,
            user: row.get(2)?,
            department: row.get(3)?,
            equipment_id: row.get(4)?,
            equipment: row.get(5)?,
            serialnum: row.get(6)?,
            etype: row.get(7)?,
            start: row.get(8)?,
            end: row.get(9)?,
            comment: row.get(10)?,
        })
    }
}

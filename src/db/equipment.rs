use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_EQUIPMENT: &str = "INSERT INTO equipment (name, serialnum, etype_id, scan_code) VALUES (?1, ?2, ?3, ?4)";
const SELECT_EQUIPMENT: &str = "SELECT e.id, e.name, e.serialnum, e.etype_id, t.name, e.scan_code
    FROM equipment e LEFT JOIN etypes t ON t.id = e.etype_id";
const ORDER_BY_NAME: &str = "ORDER BY e.name";
const WHERE_ID: &str = "WHERE e.id = ?1";
const WHERE_SERIAL: &str = "WHERE e.serialnum = ?1";
const WHERE_SCAN_CODE: &str = "WHERE LOWER(e.scan_code) = LOWER(?1)";
const WHERE_TYPE: &str = "WHERE e.etype_id = ?1";
const WHERE_AVAILABLE: &str = "WHERE e.id NOT IN (SELECT equipment_id FROM rentals WHERE rental_end IS NULL)";
const UPDATE_EQUIPMENT: &str = "UPDATE equipment SET name = ?2, serialnum = ?3, etype_id = ?4, scan_code = ?5 WHERE id = ?1";
const DELETE_EQUIPMENT: &str = "DELETE FROM equipment WHERE id = ?1";
const COUNT_RENTALS: &str = "SELECT COUNT(*) FROM rentals WHERE equipment_id = ?1";

/// A rentable item. The type is optional; its name is joined into the row
/// on fetch so views never need a second lookup.
#[derive(Debug, Clone)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub serialnum: Option<String>,
    pub etype_id: Option<i64>,
    pub etype: Option<String>,
    pub scan_code: Option<String>,
}

pub struct EquipmentStore {
    pub conn: Connection,
}

impl EquipmentStore {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(EquipmentStore { conn: db.conn })
    }

    pub fn insert(&mut self, name: &str, serialnum: Option<&str>, etype_id: Option<i64>, scan_code: Option<&str>) -> Result<i64> {
        self.conn.execute(INSERT_EQUIPMENT, params![name, serialnum, etype_id, scan_code])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Equipment>> {
        self.fetch_where(ORDER_BY_NAME, &[])
    }

    /// Equipment with no open rental, i.e. what can be rented right now.
    pub fn fetch_available(&mut self) -> Result<Vec<Equipment>> {
        self.fetch_where(&format!("{} {}", WHERE_AVAILABLE, ORDER_BY_NAME), &[])
    }

    pub fn fetch_by_type(&mut self, etype_id: i64) -> Result<Vec<Equipment>> {
        self.fetch_where(&format!("{} {}", WHERE_TYPE, ORDER_BY_NAME), params![etype_id])
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Equipment>> {
        let equipment = self
            .conn
            .query_row(&format!("{} {}", SELECT_EQUIPMENT, WHERE_ID), params![id], Self::map_row)
            .optional()?;
        Ok(equipment)
    }

    pub fn fetch_by_serial(&mut self, serialnum: &str) -> Result<Option<Equipment>> {
        let equipment = self
            .conn
            .query_row(&format!("{} {}", SELECT_EQUIPMENT, WHERE_SERIAL), params![serialnum], Self::map_row)
            .optional()?;
        Ok(equipment)
    }

    /// Scan-code lookup for the scan workflow, falling back to the serial
    /// number so devices labelled only with a serial barcode still resolve.
    pub fn fetch_by_scan_code(&mut self, code: &str) -> Result<Option<Equipment>> {
        let equipment = self
            .conn
            .query_row(&format!("{} {}", SELECT_EQUIPMENT, WHERE_SCAN_CODE), params![code], Self::map_row)
            .optional()?;
        match equipment {
            Some(e) => Ok(Some(e)),
            None => self.fetch_by_serial(code),
        }
    }

    pub fn update(&mut self, equipment: &Equipment) -> Result<usize> {
        Ok(self.conn.execute(
            UPDATE_EQUIPMENT,
            params![
                equipment.id,
                equipment.name,
                equipment.serialnum,
                equipment.etype_id,
                equipment.scan_code
            ],
        )?)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_EQUIPMENT, params![id])?)
    }

    pub fn rental_count(&mut self, id: i64) -> Result<i64> {
        let count = self.conn.query_row(COUNT_RENTALS, params![id], |row| row.get(0))?;
        Ok(count)
    }

    fn fetch_where(&mut self, clause: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Equipment>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_EQUIPMENT, clause))?;
        let rows = stmt.query_map(params, Self::map_row)?;
        let mut equipment = Vec::new();
        for item in rows {
            equipment.push(item?);
        }
        Ok(equipment)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Equipment> {
        Ok(Equipment {
            id: row.get(0)?,
            name: row.get(1)?,
            serialnum: row.get(2)?,
            etype_id: row.get(3)?,
            etype: row.get(4)?,
            scan_code: row.get(5)?,
        })
    }
}

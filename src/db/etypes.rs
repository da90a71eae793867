use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_ETYPE: &str = "INSERT INTO etypes (name) VALUES (?1)";
const SELECT_ETYPES: &str = "SELECT id, name FROM etypes ORDER BY name";
const SELECT_BY_ID: &str = "SELECT id, name FROM etypes WHERE id = ?1";
const SELECT_BY_NAME: &str = "SELECT id, name FROM etypes WHERE name = ?1";
const RENAME_ETYPE: &str = "UPDATE etypes SET name = ?2 WHERE id = ?1";
const DELETE_ETYPE: &str = "DELETE FROM etypes WHERE id = ?1";
const COUNT_EQUIPMENT: &str = "SELECT COUNT(*) FROM equipment WHERE etype_id = ?1";

/// An equipment category ("Laptop", "Sensor", ...). Equipment may carry at
/// most one type; untyped equipment is allowed.
#[derive(Debug, Clone)]
pub struct EquipmentType {
    pub id: i64,
    pub name: String,
}

pub struct Etypes {
    pub conn: Connection,
}

impl Etypes {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Etypes { conn: db.conn })
    }

    pub fn insert(&mut self, name: &str) -> Result<i64> {
        self.conn.execute(INSERT_ETYPE, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<EquipmentType>> {
        let mut stmt = self.conn.prepare(SELECT_ETYPES)?;
        let rows = stmt.query_map([], |row| {
            Ok(EquipmentType {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut etypes = Vec::new();
        for etype in rows {
            etypes.push(etype?);
        }
        Ok(etypes)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<EquipmentType>> {
        let etype = self
            .conn
            .query_row(SELECT_BY_ID, params![id], |row| {
                Ok(EquipmentType {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(etype)
    }

    pub fn fetch_by_name(&mut self, name: &str) -> Result<Option<EquipmentType>> {
        let etype = self
            .conn
            .query_row(SELECT_BY_NAME, params![name], |row| {
                Ok(EquipmentType {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(etype)
    }

    pub fn rename(&mut self, id: i64, name: &str) -> Result<usize> {
        Ok(self.conn.execute(RENAME_ETYPE, params![id, name])?)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ETYPE, params![id])?)
    }

    pub fn equipment_count(&mut self, id: i64) -> Result<i64> {
        let count = self.conn.query_row(COUNT_EQUIPMENT, params![id], |row| row.get(0))?;
        Ok(count)
    }
}

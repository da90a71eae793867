use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_DEPARTMENT: &str = "INSERT INTO departments (name) VALUES (?1)";
const SELECT_DEPARTMENTS: &str = "SELECT id, name FROM departments ORDER BY name";
const SELECT_BY_ID: &str = "SELECT id, name FROM departments WHERE id = ?1";
const SELECT_BY_NAME: &str = "SELECT id, name FROM departments WHERE name = ?1";
const RENAME_DEPARTMENT: &str = "UPDATE departments SET name = ?2 WHERE id = ?1";
const DELETE_DEPARTMENT: &str = "DELETE FROM departments WHERE id = ?1";
const COUNT_USERS: &str = "SELECT COUNT(*) FROM users WHERE department_id = ?1";

#[derive(Debug, Clone)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

pub struct Departments {
    pub conn: Connection,
}

impl Departments {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Departments { conn: db.conn })
    }

    pub fn insert(&mut self, name: &str) -> Result<i64> {
        self.conn.execute(INSERT_DEPARTMENT, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Department>> {
        let mut stmt = self.conn.prepare(SELECT_DEPARTMENTS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut departments = Vec::new();
        for department in rows {
            departments.push(department?);
        }
        Ok(departments)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Department>> {
        let department = self
            .conn
            .query_row(SELECT_BY_ID, params![id], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(department)
    }

    pub fn fetch_by_name(&mut self, name: &str) -> Result<Option<Department>> {
        let department = self
            .conn
            .query_row(SELECT_BY_NAME, params![name], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(department)
    }

    pub fn rename(&mut self, id: i64, name: &str) -> Result<usize> {
        Ok(self.conn.execute(RENAME_DEPARTMENT, params![id, name])?)
    }

    /// Deletes a department. Fails when users still reference it.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_DEPARTMENT, params![id])?)
    }

    pub fn user_count(&mut self, id: i64) -> Result<i64> {
        let count = self.conn.query_row(COUNT_USERS, params![id], |row| row.get(0))?;
        Ok(count)
    }
}

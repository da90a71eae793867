use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_USER: &str = "INSERT INTO users (name, department_id, badge) VALUES (?1, ?2, ?3)";
const SELECT_USERS: &str = "SELECT u.id, u.name, u.department_id, d.name, u.badge
    FROM users u JOIN departments d ON d.id = u.department_id";
const ORDER_BY_NAME: &str = "ORDER BY u.name";
const WHERE_ID: &str = "WHERE u.id = ?1";
const WHERE_BADGE: &str = "WHERE LOWER(u.badge) = LOWER(?1)";
const UPDATE_USER: &str = "UPDATE users SET name = ?2, department_id = ?3, badge = ?4 WHERE id = ?1";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";
const COUNT_RENTALS: &str = "SELECT COUNT(*) FROM rentals WHERE user_id = ?1";

/// A person who can rent equipment. Every user belongs to exactly one
/// department; the department name is joined into the row on fetch.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub department: String,
    pub badge: Option<String>,
}

pub struct Users {
    pub conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Users { conn: db.conn })
    }

    pub fn insert(&mut self, name: &str, department_id: i64, badge: Option<&str>) -> Result<i64> {
        self.conn.execute(INSERT_USER, params![name, department_id, badge])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_USERS, ORDER_BY_NAME))?;
        let rows = stmt.query_map([], Self::map_row)?;
        let mut users = Vec::new();
        for user in rows {
            users.push(user?);
        }
        Ok(users)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(&format!("{} {}", SELECT_USERS, WHERE_ID), params![id], Self::map_row)
            .optional()?;
        Ok(user)
    }

    /// Badge lookup for the scan workflow. Badge codes are matched
    /// case-insensitively, as scanners differ in how they report them.
    pub fn fetch_by_badge(&mut self, badge: &str) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(&format!("{} {}", SELECT_USERS, WHERE_BADGE), params![badge], Self::map_row)
            .optional()?;
        Ok(user)
    }

    pub fn update(&mut self, user: &User) -> Result<usize> {
        Ok(self
            .conn
            .execute(UPDATE_USER, params![user.id, user.name, user.department_id, user.badge])?)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_USER, params![id])?)
    }

    pub fn rental_count(&mut self, id: i64) -> Result<i64> {
        let count = self.conn.query_row(COUNT_RENTALS, params![id], |row| row.get(0))?;
        Ok(count)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            department_id: row.get(2)?,
            department: row.get(3)?,
            badge: row.get(4)?,
        })
    }
}

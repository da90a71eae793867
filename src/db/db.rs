use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "rentrack.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file in the application data directory and brings
    /// the schema up to date before handing out the connection.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::run(&mut conn)?;

        Ok(Db { conn })
    }
}

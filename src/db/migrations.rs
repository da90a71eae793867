//! Database schema migration management and versioning.
//!
//! Migrations are applied automatically when the database is opened. Each
//! migration runs inside its own transaction and is recorded in the
//! `migrations` table, so a database can be upgraded from any prior version.

use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::debug;

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Applies all pending migrations to the given connection.
pub fn run(conn: &mut Connection) -> Result<()> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let current = current_version(conn)?;

    for migration in registry() {
        if migration.version <= current {
            continue;
        }
        debug!(version = migration.version, name = migration.name, "applying migration");
        let tx = conn.transaction()?;
        (migration.up)(&tx)?;
        tx.execute(
            "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
            params![migration.version, migration.name],
        )?;
        tx.commit()?;
    }

    Ok(())
}

/// Returns the highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))?;
    Ok(version)
}

/// The complete schema evolution history, in version order.
fn registry() -> Vec<Migration> {
    vec![
        // Version 1: base tables and indices
        Migration {
            version: 1,
            name: "create_tables_and_indices",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS departments (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS etypes (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        department_id INTEGER NOT NULL REFERENCES departments(id)
    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS equipment (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        serialnum TEXT,
        etype_id INTEGER REFERENCES etypes(id)
    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS rentals (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        equipment_id INTEGER NOT NULL REFERENCES equipment(id),
        rental_start TIMESTAMP NOT NULL,
        rental_end TIMESTAMP
    )",
                    [],
                )?;

                // Rentals are queried by equipment (open-rental lookups) and
                // by completion state (reports) far more often than by user.
                tx.execute("CREATE INDEX IF NOT EXISTS idx_rentals_equipment ON rentals(equipment_id)", [])?;
                tx.execute("CREATE INDEX IF NOT EXISTS idx_rentals_end ON rentals(rental_end)", [])?;

                Ok(())
            },
        },
        // Version 2: free-text comment on rentals
        Migration {
            version: 2,
            name: "add_comment_to_rentals",
            up: |tx| {
                tx.execute("ALTER TABLE rentals ADD COLUMN comment TEXT", [])?;
                Ok(())
            },
        },
        // Version 3: scan codes for the badge/serial scanning workflow
        Migration {
            version: 3,
            name: "add_scan_codes",
            up: |tx| {
                tx.execute("ALTER TABLE users ADD COLUMN badge TEXT", [])?;
                tx.execute("ALTER TABLE equipment ADD COLUMN scan_code TEXT", [])?;
                tx.execute("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_badge ON users(badge) WHERE badge IS NOT NULL", [])?;
                tx.execute("CREATE UNIQUE INDEX IF NOT EXISTS idx_equipment_scan_code ON equipment(scan_code) WHERE scan_code IS NOT NULL", [])?;
                Ok(())
            },
        },
    ]
}

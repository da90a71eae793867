//! Database layer for the rentrack application.
//!
//! SQLite persistence for the rental desk's entities. Each module wraps one
//! table behind a store struct owning its own connection; the schema itself
//! is managed by the versioned migration system in [`migrations`].

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migrations, applied on open.
pub mod migrations;

/// Departments that users belong to.
pub mod departments;

/// Equipment categories.
pub mod etypes;

/// People who rent equipment.
pub mod users;

/// The rentable inventory.
pub mod equipment;

/// Rental records and the joined rows consumed by reports.
pub mod rentals;

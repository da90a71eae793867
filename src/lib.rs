//! # Rentrack - Equipment Rental Tracker
//!
//! A command-line utility for a lending desk: track which user has which
//! piece of equipment, rent and return by hand or by scanning codes, and
//! report accumulated rental time per user, equipment type, equipment name
//! or department.
//!
//! ## Features
//!
//! - **Inventory Management**: Departments, users, equipment and types
//! - **Rent/Return Workflow**: Manual commands or a scanner-driven flow
//! - **Duration Tracking**: Human-readable durations with correct ordering
//! - **Reports**: Grouped rental statistics with date-range filtering
//! - **Data Export**: CSV and JSON export of history and reports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rentrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

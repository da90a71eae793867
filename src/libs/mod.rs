//! Core library modules for the rentrack application.
//!
//! ## Features
//!
//! - **Duration Engine**: dual display/sort duration values ([`duration`])
//! - **Reporting**: grouped rental statistics ([`report`])
//! - **Presentation**: console tables ([`view`]) and file export ([`export`])
//! - **Infrastructure**: configuration, data directory, messaging, scanning

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod messages;
pub mod report;
pub mod scanner;
pub mod view;

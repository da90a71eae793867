//! Display implementation for rentrack application messages.
//!
//! All user-facing text lives here, in one place, keyed by the `Message`
//! enum. Parameterized variants interpolate their payloads with `format!`.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === DEPARTMENT MESSAGES ===
            Message::DepartmentCreated(name) => format!("Department '{}' created", name),
            Message::DepartmentRenamed(name) => format!("Department renamed to '{}'", name),
            Message::DepartmentDeleted(name) => format!("Department '{}' deleted", name),
            Message::DepartmentNotFound(name) => format!("Department '{}' not found", name),
            Message::DepartmentAlreadyExists(name) => format!("Department '{}' already exists", name),
            Message::DepartmentInUse(name) => format!("Department '{}' still has users and cannot be deleted", name),
            Message::NoDepartmentsFound => "No departments found".to_string(),
            Message::DepartmentListHeader => "Departments".to_string(),

            // === EQUIPMENT TYPE MESSAGES ===
            Message::EtypeCreated(name) => format!("Equipment type '{}' created", name),
            Message::EtypeRenamed(name) => format!("Equipment type renamed to '{}'", name),
            Message::EtypeDeleted(name) => format!("Equipment type '{}' deleted", name),
            Message::EtypeNotFound(name) => format!("Equipment type '{}' not found", name),
            Message::EtypeAlreadyExists(name) => format!("Equipment type '{}' already exists", name),
            Message::EtypeInUse(name) => format!("Equipment type '{}' is still assigned to equipment and cannot be deleted", name),
            Message::NoEtypesFound => "No equipment types found".to_string(),
            Message::EtypeListHeader => "Equipment types".to_string(),

            // === USER MESSAGES ===
            Message::UserCreated(name) => format!("User '{}' created", name),
            Message::UserUpdated(name) => format!("User '{}' updated", name),
            Message::UserDeleted(name) => format!("User '{}' deleted", name),
            Message::UserNotFound(user) => format!("User '{}' not found", user),
            Message::UserHasRentalHistory(name) => format!("User '{}' has rental history and cannot be deleted", name),
            Message::NoUsersFound => "No users found".to_string(),
            Message::UserListHeader => "Users".to_string(),

            // === EQUIPMENT MESSAGES ===
            Message::EquipmentCreated(name) => format!("Equipment '{}' created", name),
            Message::EquipmentUpdated(name) => format!("Equipment '{}' updated", name),
            Message::EquipmentDeleted(name) => format!("Equipment '{}' deleted", name),
            Message::EquipmentNotFound(eq) => format!("Equipment '{}' not found", eq),
            Message::EquipmentHasRentalHistory(name) => format!("Equipment '{}' has rental history and cannot be deleted", name),
            Message::NoEquipmentFound => "No equipment found".to_string(),
            Message::EquipmentListHeader => "Equipment".to_string(),

            // === RENTAL MESSAGES ===
            Message::RentalCreated(equipment, user) => format!("'{}' rented to {}", equipment, user),
            Message::RentalReturned(equipment, user) => format!("'{}' returned by {}", equipment, user),
            Message::EquipmentAlreadyRented(equipment, user) => format!("'{}' is already rented by {}", equipment, user),
            Message::EquipmentNotRented(equipment) => format!("'{}' has no open rental", equipment),
            Message::NoRentalsFound => "No rentals recorded".to_string(),
            Message::NoActiveRentals => "No active rentals".to_string(),
            Message::RentalHistoryHeader => "Rental history".to_string(),
            Message::ConfirmRental(equipment, user) => format!("Rent '{}' to {}?", equipment, user),
            Message::ConfirmReturn(equipment, user) => format!("Return '{}' rented by {}?", equipment, user),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === SCAN MESSAGES ===
            Message::ScanEquipmentPrompt => "Scan device code".to_string(),
            Message::ScanBadgePrompt => "Scan your pass".to_string(),
            Message::ScanCancelled => "Scanning cancelled".to_string(),
            Message::ScanCodeInvalid(code) => format!("Invalid code received: '{}'", code),
            Message::ScanUnknownEquipment => "Equipment not found".to_string(),
            Message::ScanUnknownBadge => "User not found".to_string(),

            // === REPORT MESSAGES ===
            Message::UserReportHeader => "User rental statistics".to_string(),
            Message::EtypeReportHeader => "Equipment type statistics".to_string(),
            Message::EquipmentNameReportHeader => "Equipment name statistics".to_string(),
            Message::DepartmentReportHeader => "Department rental statistics".to_string(),
            Message::NoReportData => "No data for the selected period".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NoDataToExport => "No data to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found, using defaults".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
        };
        write!(f, "{}", text)
    }
}

//! Scan-driven rent-or-return workflow.
//!
//! One pass: scan an equipment code. If that equipment is currently out,
//! confirm and return it; otherwise scan the user's badge and open a new
//! rental. This is the desk's no-keyboard path - both codes arrive from a
//! keyboard-wedge scanner.

use crate::{
    db::{equipment::EquipmentStore, rentals::Rentals, users::Users},
    libs::{
        config::Config,
        messages::Message,
        scanner::{ScanResult, Scanner},
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let scanner = Scanner::new(config.scanner);

    let mut store = EquipmentStore::new()?;
    let mut rentals = Rentals::new()?;

    let equipment = match scanner.read_code(&Message::ScanEquipmentPrompt.to_string())? {
        ScanResult::Code(code) => match store.fetch_by_scan_code(&code)? {
            Some(equipment) => equipment,
            None => {
                msg_error!(Message::ScanUnknownEquipment);
                return Ok(());
            }
        },
        ScanResult::Cancelled => {
            msg_warning!(Message::ScanCancelled);
            return Ok(());
        }
        ScanResult::Invalid(code) => {
            msg_error!(Message::ScanCodeInvalid(code));
            return Ok(());
        }
    };

    // Equipment already out: this scan is a return.
    if let Some(rental) = rentals.active_for_equipment(equipment.id)? {
        msg_info!(Message::EquipmentAlreadyRented(rental.equipment.clone(), rental.user.clone()));
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReturn(rental.equipment.clone(), rental.user.clone()).to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
        rentals.finish(rental.id)?;
        msg_success!(Message::RentalReturned(rental.equipment, rental.user));
        return Ok(());
    }

    // Equipment on the shelf: this scan starts a rental.
    let mut users = Users::new()?;
    let user = match scanner.read_code(&Message::ScanBadgePrompt.to_string())? {
        ScanResult::Code(code) => match users.fetch_by_badge(&code)? {
            Some(user) => user,
            None => {
                msg_error!(Message::ScanUnknownBadge);
                return Ok(());
            }
        },
        ScanResult::Cancelled => {
            msg_warning!(Message::ScanCancelled);
            return Ok(());
        }
        ScanResult::Invalid(code) => {
            msg_error!(Message::ScanCodeInvalid(code));
            return Ok(());
        }
    };

    let comment: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Comment (optional)")
        .allow_empty(true)
        .interact_text()?;
    let comment = if comment.is_empty() { None } else { Some(comment) };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmRental(equipment.name.clone(), user.name.clone()).to_string())
        .default(true)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    rentals.start(user.id, equipment.id, comment.as_deref())?;
    msg_success!(Message::RentalCreated(equipment.name, user.name));
    Ok(())
}

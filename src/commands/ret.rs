use crate::{
    db::{
        equipment::EquipmentStore,
        rentals::{RentalFilter, RentalRecord, Rentals},
    },
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct ReturnArgs {
    /// Equipment ID or serial number; prompts interactively when omitted
    equipment: Option<String>,
}

pub fn cmd(args: ReturnArgs) -> Result<()> {
    let mut rentals = Rentals::new()?;

    let Some(rental) = select_rental(&mut rentals, args.equipment)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

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
    Ok(())
}

fn select_rental(rentals: &mut Rentals, identifier: Option<String>) -> Result<Option<RentalRecord>> {
    if let Some(identifier) = identifier {
        let mut store = EquipmentStore::new()?;
        let equipment = if let Ok(id) = identifier.parse::<i64>() {
            store.fetch(id)?
        } else {
            store.fetch_by_serial(&identifier)?
        };
        let Some(equipment) = equipment else {
            msg_error!(Message::EquipmentNotFound(identifier));
            return Ok(None);
        };
        let rental = rentals.active_for_equipment(equipment.id)?;
        if rental.is_none() {
            msg_error!(Message::EquipmentNotRented(equipment.name));
        }
        return Ok(rental);
    }

    let active = rentals.fetch(RentalFilter::Active)?;
    if active.is_empty() {
        msg_info!(Message::NoActiveRentals);
        return Ok(None);
    }
    let labels: Vec<String> = active
        .iter()
        .map(|r| format!("{} - {} ({})", r.equipment, r.user, r.department))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select rental to return")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(active[selection].clone()))
}

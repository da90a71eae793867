use crate::{
    db::{
        equipment::{Equipment, EquipmentStore},
        rentals::Rentals,
        users::{User, Users},
    },
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct RentArgs {
    /// Equipment ID or serial number; prompts interactively when omitted
    equipment: Option<String>,
    /// User ID; prompts interactively when omitted
    #[arg(short, long)]
    user: Option<i64>,
    /// Free-text comment stored with the rental
    #[arg(short, long)]
    comment: Option<String>,
}

pub fn cmd(args: RentArgs) -> Result<()> {
    let mut store = EquipmentStore::new()?;
    let mut rentals = Rentals::new()?;

    let Some(equipment) = select_equipment(&mut store, args.equipment)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

    // Double rentals must not happen; surface who currently holds the item.
    if let Some(open) = rentals.active_for_equipment(equipment.id)? {
        msg_error!(Message::EquipmentAlreadyRented(open.equipment, open.user));
        return Ok(());
    }

    let Some(user) = select_user(args.user)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

    let comment = match args.comment {
        Some(comment) => Some(comment),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Comment (optional)")
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    };

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

fn select_equipment(store: &mut EquipmentStore, identifier: Option<String>) -> Result<Option<Equipment>> {
    if let Some(identifier) = identifier {
        let equipment = if let Ok(id) = identifier.parse::<i64>() {
            store.fetch(id)?
        } else {
            store.fetch_by_serial(&identifier)?
        };
        if equipment.is_none() {
            msg_error!(Message::EquipmentNotFound(identifier));
        }
        return Ok(equipment);
    }

    // Interactive path: offer everything that is currently on the shelf.
    let available = store.fetch_available()?;
    if available.is_empty() {
        msg_info!(Message::NoEquipmentFound);
        return Ok(None);
    }
    let labels: Vec<String> = available
        .iter()
        .map(|e| format!("{} ({})", e.name, e.serialnum.as_deref().unwrap_or("no S/N")))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select equipment")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(available[selection].clone()))
}

fn select_user(id: Option<i64>) -> Result<Option<User>> {
    let mut users = Users::new()?;

    if let Some(id) = id {
        let user = users.fetch(id)?;
        if user.is_none() {
            msg_error!(Message::UserNotFound(id.to_string()));
        }
        return Ok(user);
    }

    let all = users.fetch_all()?;
    if all.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(None);
    }
    let labels: Vec<String> = all.iter().map(|u| format!("{} ({})", u.name, u.department)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select user")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(all[selection].clone()))
}

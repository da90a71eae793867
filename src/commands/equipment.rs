use crate::{
    db::{equipment::EquipmentStore, etypes::Etypes},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EquipmentArgs {
    #[command(subcommand)]
    command: EquipmentCommand,
}

#[derive(Debug, Subcommand)]
enum EquipmentCommand {
    /// Register new equipment
    Add {
        /// Equipment name
        name: String,
        /// Serial number
        #[arg(short, long)]
        serial: Option<String>,
        /// Equipment type name or ID
        #[arg(short = 't', long = "type")]
        etype: Option<String>,
        /// Scan code for the scan workflow
        #[arg(short, long)]
        code: Option<String>,
    },
    /// List equipment
    List {
        /// Only equipment that can be rented right now
        #[arg(long)]
        available: bool,
        /// Restrict to one equipment type (name or ID)
        #[arg(short = 't', long = "type")]
        etype: Option<String>,
    },
    /// Update equipment
    Update {
        /// Equipment ID
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New serial number
        #[arg(short, long)]
        serial: Option<String>,
        /// New equipment type name or ID
        #[arg(short = 't', long = "type")]
        etype: Option<String>,
        /// New scan code
        #[arg(short, long)]
        code: Option<String>,
    },
    /// Delete equipment
    Delete {
        /// Equipment ID
        id: i64,
    },
}

pub fn cmd(args: EquipmentArgs) -> Result<()> {
    match args.command {
        EquipmentCommand::Add { name, serial, etype, code } => handle_add(name, serial, etype, code),
        EquipmentCommand::List { available, etype } => handle_list(available, etype),
        EquipmentCommand::Update {
            id,
            name,
            serial,
            etype,
            code,
        } => handle_update(id, name, serial, etype, code),
        EquipmentCommand::Delete { id } => handle_delete(id),
    }
}

fn handle_add(name: String, serial: Option<String>, etype: Option<String>, code: Option<String>) -> Result<()> {
    let etype_id = match &etype {
        Some(identifier) => match resolve_etype(identifier)? {
            Some(etype) => Some(etype.id),
            None => {
                msg_error!(Message::EtypeNotFound(identifier.clone()));
                return Ok(());
            }
        },
        None => None,
    };

    let mut store = EquipmentStore::new()?;
    store.insert(&name, serial.as_deref(), etype_id, code.as_deref())?;
    msg_success!(Message::EquipmentCreated(name));
    Ok(())
}

fn handle_list(available: bool, etype: Option<String>) -> Result<()> {
    let mut store = EquipmentStore::new()?;

    let items = if let Some(identifier) = etype {
        let Some(etype) = resolve_etype(&identifier)? else {
            msg_error!(Message::EtypeNotFound(identifier));
            return Ok(());
        };
        store.fetch_by_type(etype.id)?
    } else if available {
        store.fetch_available()?
    } else {
        store.fetch_all()?
    };

    if items.is_empty() {
        msg_info!(Message::NoEquipmentFound);
        return Ok(());
    }

    msg_print!(Message::EquipmentListHeader, true);
    View::equipment(&items)?;
    Ok(())
}

fn handle_update(id: i64, name: Option<String>, serial: Option<String>, etype: Option<String>, code: Option<String>) -> Result<()> {
    let mut store = EquipmentStore::new()?;

    let Some(mut equipment) = store.fetch(id)? else {
        msg_error!(Message::EquipmentNotFound(id.to_string()));
        return Ok(());
    };

    if let Some(name) = name {
        equipment.name = name;
    }
    if let Some(serial) = serial {
        equipment.serialnum = Some(serial);
    }
    if let Some(identifier) = etype {
        let Some(etype) = resolve_etype(&identifier)? else {
            msg_error!(Message::EtypeNotFound(identifier));
            return Ok(());
        };
        equipment.etype_id = Some(etype.id);
    }
    if let Some(code) = code {
        equipment.scan_code = Some(code);
    }

    store.update(&equipment)?;
    msg_success!(Message::EquipmentUpdated(equipment.name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut store = EquipmentStore::new()?;

    let Some(equipment) = store.fetch(id)? else {
        msg_error!(Message::EquipmentNotFound(id.to_string()));
        return Ok(());
    };

    if store.rental_count(equipment.id)? > 0 {
        msg_error!(Message::EquipmentHasRentalHistory(equipment.name));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete equipment '{}'?", equipment.name))
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.delete(equipment.id)?;
    msg_success!(Message::EquipmentDeleted(equipment.name));
    Ok(())
}

fn resolve_etype(identifier: &str) -> Result<Option<crate::db::etypes::EquipmentType>> {
    let mut etypes = Etypes::new()?;
    if let Ok(id) = identifier.parse::<i64>() {
        etypes.fetch(id)
    } else {
        etypes.fetch_by_name(identifier)
    }
}

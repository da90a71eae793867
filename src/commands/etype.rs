use crate::{
    db::etypes::Etypes,
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EtypeArgs {
    #[command(subcommand)]
    command: EtypeCommand,
}

#[derive(Debug, Subcommand)]
enum EtypeCommand {
    /// Create a new equipment type
    Add {
        /// Type name
        name: String,
    },
    /// List all equipment types
    List,
    /// Rename an equipment type
    Rename {
        /// Type name or ID
        etype: String,
        /// New name
        name: String,
    },
    /// Delete an equipment type
    Delete {
        /// Type name or ID
        etype: String,
    },
}

pub fn cmd(args: EtypeArgs) -> Result<()> {
    match args.command {
        EtypeCommand::Add { name } => handle_add(name),
        EtypeCommand::List => handle_list(),
        EtypeCommand::Rename { etype, name } => handle_rename(etype, name),
        EtypeCommand::Delete { etype } => handle_delete(etype),
    }
}

fn handle_add(name: String) -> Result<()> {
    let mut etypes = Etypes::new()?;

    if etypes.fetch_by_name(&name)?.is_some() {
        msg_error!(Message::EtypeAlreadyExists(name));
        return Ok(());
    }

    etypes.insert(&name)?;
    msg_success!(Message::EtypeCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut etypes = Etypes::new()?;
    let all = etypes.fetch_all()?;

    if all.is_empty() {
        msg_info!(Message::NoEtypesFound);
        return Ok(());
    }

    msg_print!(Message::EtypeListHeader, true);
    View::etypes(&all)?;
    Ok(())
}

fn handle_rename(identifier: String, name: String) -> Result<()> {
    let mut etypes = Etypes::new()?;

    let Some(etype) = resolve(&mut etypes, &identifier)? else {
        msg_error!(Message::EtypeNotFound(identifier));
        return Ok(());
    };

    etypes.rename(etype.id, &name)?;
    msg_success!(Message::EtypeRenamed(name));
    Ok(())
}

fn handle_delete(identifier: String) -> Result<()> {
    let mut etypes = Etypes::new()?;

    let Some(etype) = resolve(&mut etypes, &identifier)? else {
        msg_error!(Message::EtypeNotFound(identifier));
        return Ok(());
    };

    if etypes.equipment_count(etype.id)? > 0 {
        msg_error!(Message::EtypeInUse(etype.name));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete equipment type '{}'?", etype.name))
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    etypes.delete(etype.id)?;
    msg_success!(Message::EtypeDeleted(etype.name));
    Ok(())
}

fn resolve(etypes: &mut Etypes, identifier: &str) -> Result<Option<crate::db::etypes::EquipmentType>> {
    if let Ok(id) = identifier.parse::<i64>() {
        etypes.fetch(id)
    } else {
        etypes.fetch_by_name(identifier)
    }
}

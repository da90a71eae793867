use crate::{
    db::departments::Departments,
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    command: DepartmentCommand,
}

#[derive(Debug, Subcommand)]
enum DepartmentCommand {
    /// Create a new department
    Add {
        /// Department name
        name: String,
    },
    /// List all departments
    List,
    /// Rename a department
    Rename {
        /// Department name or ID
        department: String,
        /// New name
        name: String,
    },
    /// Delete a department
    Delete {
        /// Department name or ID
        department: String,
    },
}

pub fn cmd(args: DepartmentArgs) -> Result<()> {
    match args.command {
        DepartmentCommand::Add { name } => handle_add(name),
        DepartmentCommand::List => handle_list(),
        DepartmentCommand::Rename { department, name } => handle_rename(department, name),
        DepartmentCommand::Delete { department } => handle_delete(department),
    }
}

fn handle_add(name: String) -> Result<()> {
    let mut departments = Departments::new()?;

    if departments.fetch_by_name(&name)?.is_some() {
        msg_error!(Message::DepartmentAlreadyExists(name));
        return Ok(());
    }

    departments.insert(&name)?;
    msg_success!(Message::DepartmentCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut departments = Departments::new()?;
    let all = departments.fetch_all()?;

    if all.is_empty() {
        msg_info!(Message::NoDepartmentsFound);
        return Ok(());
    }

    msg_print!(Message::DepartmentListHeader, true);
    View::departments(&all)?;
    Ok(())
}

fn handle_rename(identifier: String, name: String) -> Result<()> {
    let mut departments = Departments::new()?;

    let Some(department) = resolve(&mut departments, &identifier)? else {
        msg_error!(Message::DepartmentNotFound(identifier));
        return Ok(());
    };

    departments.rename(department.id, &name)?;
    msg_success!(Message::DepartmentRenamed(name));
    Ok(())
}

fn handle_delete(identifier: String) -> Result<()> {
    let mut departments = Departments::new()?;

    let Some(department) = resolve(&mut departments, &identifier)? else {
        msg_error!(Message::DepartmentNotFound(identifier));
        return Ok(());
    };

    // Users keep a department reference, so a non-empty department must not
    // be removed.
    if departments.user_count(department.id)? > 0 {
        msg_error!(Message::DepartmentInUse(department.name));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete department '{}'?", department.name))
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    departments.delete(department.id)?;
    msg_success!(Message::DepartmentDeleted(department.name));
    Ok(())
}

fn resolve(departments: &mut Departments, identifier: &str) -> Result<Option<crate::db::departments::Department>> {
    if let Ok(id) = identifier.parse::<i64>() {
        departments.fetch(id)
    } else {
        departments.fetch_by_name(identifier)
    }
}

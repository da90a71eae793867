use crate::{
    db::{departments::Departments, users::Users},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Create a new user
    Add {
        /// User name
        name: String,
        /// Department name or ID
        #[arg(short, long)]
        department: String,
        /// Badge code for the scan workflow
        #[arg(short, long)]
        badge: Option<String>,
    },
    /// List all users
    List,
    /// Update a user
    Update {
        /// User ID
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New department name or ID
        #[arg(short, long)]
        department: Option<String>,
        /// New badge code
        #[arg(short, long)]
        badge: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },
}

pub fn cmd(args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Add { name, department, badge } => handle_add(name, department, badge),
        UserCommand::List => handle_list(),
        UserCommand::Update {
            id,
            name,
            department,
            badge,
        } => handle_update(id, name, department, badge),
        UserCommand::Delete { id } => handle_delete(id),
    }
}

fn handle_add(name: String, department: String, badge: Option<String>) -> Result<()> {
    let Some(department) = resolve_department(&department)? else {
        msg_error!(Message::DepartmentNotFound(department));
        return Ok(());
    };

    let mut users = Users::new()?;
    users.insert(&name, department.id, badge.as_deref())?;
    msg_success!(Message::UserCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut users = Users::new()?;
    let all = users.fetch_all()?;

    if all.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(());
    }

    msg_print!(Message::UserListHeader, true);
    View::users(&all)?;
    Ok(())
}

fn handle_update(id: i64, name: Option<String>, department: Option<String>, badge: Option<String>) -> Result<()> {
    let mut users = Users::new()?;

    let Some(mut user) = users.fetch(id)? else {
        msg_error!(Message::UserNotFound(id.to_string()));
        return Ok(());
    };

    if let Some(name) = name {
        user.name = name;
    }
    if let Some(department) = department {
        let Some(department) = resolve_department(&department)? else {
            msg_error!(Message::DepartmentNotFound(department));
            return Ok(());
        };
        user.department_id = department.id;
    }
    if let Some(badge) = badge {
        user.badge = Some(badge);
    }

    users.update(&user)?;
    msg_success!(Message::UserUpdated(user.name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut users = Users::new()?;

    let Some(user) = users.fetch(id)? else {
        msg_error!(Message::UserNotFound(id.to_string()));
        return Ok(());
    };

    // Rental history is append-only; deleting a user with history would
    // orphan it.
    if users.rental_count(user.id)? > 0 {
        msg_error!(Message::UserHasRentalHistory(user.name));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete user '{}'?", user.name))
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    users.delete(user.id)?;
    msg_success!(Message::UserDeleted(user.name));
    Ok(())
}

fn resolve_department(identifier: &str) -> Result<Option<crate::db::departments::Department>> {
    let mut departments = Departments::new()?;
    if let Ok(id) = identifier.parse::<i64>() {
        departments.fetch(id)
    } else {
        departments.fetch_by_name(identifier)
    }
}

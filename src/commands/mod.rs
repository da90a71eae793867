pub mod department;
pub mod equipment;
pub mod etype;
pub mod export;
pub mod history;
pub mod init;
pub mod rent;
pub mod report;
pub mod ret;
pub mod scan;
pub mod user;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage departments")]
    Department(department::DepartmentArgs),
    #[command(about = "Manage equipment types")]
    Etype(etype::EtypeArgs),
    #[command(about = "Manage users")]
    User(user::UserArgs),
    #[command(about = "Manage equipment")]
    Equipment(equipment::EquipmentArgs),
    #[command(about = "Rent equipment to a user")]
    Rent(rent::RentArgs),
    #[command(about = "Return rented equipment", name = "return")]
    Return(ret::ReturnArgs),
    #[command(about = "Scan-driven rent or return workflow")]
    Scan,
    #[command(about = "Show rental history")]
    History(history::HistoryArgs),
    #[command(about = "Rental statistics reports")]
    Report(report::ReportArgs),
    #[command(about = "Export history or reports to CSV/JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Department(args) => department::cmd(args),
            Commands::Etype(args) => etype::cmd(args),
            Commands::User(args) => user::cmd(args),
            Commands::Equipment(args) => equipment::cmd(args),
            Commands::Rent(args) => rent::cmd(args),
            Commands::Return(args) => ret::cmd(args),
            Commands::Scan => scan::cmd(),
            Commands::History(args) => history::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

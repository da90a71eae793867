use crate::{
    db::{
        departments::Departments,
        equipment::EquipmentStore,
        etypes::Etypes,
        rentals::{RentalFilter, Rentals},
        users::Users,
    },
    libs::{
        messages::Message,
        report::{self, ReportPeriod},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dimension {
    /// Total rental time per user
    Users,
    /// Stock, availability and rental time per equipment type
    Types,
    /// Rental time per equipment display name
    Names,
    /// Total rental time per department
    Departments,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Grouping dimension
    #[arg(long, value_enum, default_value = "users")]
    pub by: Dimension,
    /// Earliest rental start to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest rental end to include (YYYY-MM-DD, inclusive whole day)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Order rows by total rental time (longest first) instead of by name
    #[arg(long)]
    pub by_duration: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let period = build_period(args.from, args.to);
    let mut rentals = Rentals::new()?;
    let completed = rentals.fetch(RentalFilter::Completed(period))?;

    match args.by {
        Dimension::Users => {
            let users = Users::new()?.fetch_all()?;
            let mut stats = report::user_statistics(&users, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoReportData);
                return Ok(());
            }
            if args.by_duration {
                stats.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));
            }
            msg_print!(Message::UserReportHeader, true);
            View::user_stats(&stats)?;
        }
        Dimension::Types => {
            let etypes = Etypes::new()?.fetch_all()?;
            let equipment = EquipmentStore::new()?.fetch_all()?;
            let active = rentals.fetch(RentalFilter::Active)?;
            let mut stats = report::etype_statistics(&etypes, &equipment, &active, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoReportData);
                return Ok(());
            }
            if args.by_duration {
                stats.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));
            }
            msg_print!(Message::EtypeReportHeader, true);
            View::etype_stats(&stats)?;
        }
        Dimension::Names => {
            let equipment = EquipmentStore::new()?.fetch_all()?;
            let mut stats = report::equipment_name_statistics(&equipment, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoReportData);
                return Ok(());
            }
            if args.by_duration {
                stats.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));
            }
            msg_print!(Message::EquipmentNameReportHeader, true);
            View::equipment_name_stats(&stats)?;
        }
        Dimension::Departments => {
            let departments = Departments::new()?.fetch_all()?;
            let mut stats = report::department_statistics(&departments, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoReportData);
                return Ok(());
            }
            if args.by_duration {
                stats.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));
            }
            msg_print!(Message::DepartmentReportHeader, true);
            View::department_stats(&stats)?;
        }
    }

    Ok(())
}

pub fn build_period(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<ReportPeriod> {
    let period = ReportPeriod::new(from, to);
    if period.is_empty() {
        None
    } else {
        Some(period)
    }
}

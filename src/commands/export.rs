use crate::{
    commands::report::build_period,
    db::{
        departments::Departments,
        equipment::EquipmentStore,
        etypes::Etypes,
        rentals::{RentalFilter, Rentals},
        users::Users,
    },
    libs::{
        duration::rental_duration,
        export::{ExportFormat, Exporter},
        messages::Message,
        report,
    },
    msg_info,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportData {
    /// Full rental history
    History,
    /// Per-user statistics
    Users,
    /// Per-type statistics
    Types,
    /// Per-name statistics
    Names,
    /// Per-department statistics
    Departments,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum)]
    data: ExportData,
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file; a timestamped name in the current directory by default
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Earliest rental start to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Latest rental end to include (YYYY-MM-DD, inclusive whole day)
    #[arg(long)]
    to: Option<NaiveDate>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let exporter = Exporter::new(args.format, args.output);
    let period = build_period(args.from, args.to);
    let mut rentals = Rentals::new()?;

    match args.data {
        ExportData::History => {
            let records = rentals.fetch(RentalFilter::All)?;
            if records.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            let rows: Vec<_> = records
                .into_iter()
                .map(|record| {
                    let duration = rental_duration(Some(record.start), record.end);
                    (record, duration)
                })
                .collect();
            exporter.export_history(&rows)?;
        }
        ExportData::Users => {
            let completed = rentals.fetch(RentalFilter::Completed(period))?;
            let users = Users::new()?.fetch_all()?;
            let stats = report::user_statistics(&users, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            exporter.export_user_stats(&stats)?;
        }
        ExportData::Types => {
            let completed = rentals.fetch(RentalFilter::Completed(period))?;
            let etypes = Etypes::new()?.fetch_all()?;
            let equipment = EquipmentStore::new()?.fetch_all()?;
            let active = rentals.fetch(RentalFilter::Active)?;
            let stats = report::etype_statistics(&etypes, &equipment, &active, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            exporter.export_etype_stats(&stats)?;
        }
        ExportData::Names => {
            let completed = rentals.fetch(RentalFilter::Completed(period))?;
            let equipment = EquipmentStore::new()?.fetch_all()?;
            let stats = report::equipment_name_statistics(&equipment, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            exporter.export_equipment_name_stats(&stats)?;
        }
        ExportData::Departments => {
            let completed = rentals.fetch(RentalFilter::Completed(period))?;
            let departments = Departments::new()?.fetch_all()?;
            let stats = report::department_statistics(&departments, &completed);
            if stats.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            exporter.export_department_stats(&stats)?;
        }
    }

    Ok(())
}

//! Data export for external analysis.
//!
//! Writes rental history and report tables to CSV or JSON files. CSV output
//! carries the human-readable duration string; the numeric sort field is an
//! internal concern of the table views and is not given a CSV column. JSON
//! serializes rows as-is, numeric fields included.

use crate::db::rentals::RentalRecord;
use crate::libs::duration::DurationData;
use crate::libs::messages::Message;
use crate::libs::report::{DepartmentStat, EquipmentNameStat, EtypeStat, UserStat};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

/// Serializable rental history row.
#[derive(Debug, Serialize)]
pub struct ExportRental {
    pub id: i64,
    pub equipment: String,
    pub serialnum: String,
    pub equipment_type: String,
    pub user: String,
    pub department: String,
    pub rental_start: String,
    pub rental_end: String,
    pub duration: String,
    pub duration_seconds: f64,
    pub comment: String,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped
    /// default filename in the current directory when no path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("rentrack_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export_history(&self, records: &[(RentalRecord, DurationData)]) -> Result<()> {
        let rows: Vec<ExportRental> = records
            .iter()
            .map(|(record, duration)| ExportRental {
                id: record.id,
                equipment: record.equipment.clone(),
                serialnum: record.serialnum.clone().unwrap_or_default(),
                equipment_type: record.etype.clone().unwrap_or_else(|| "Unknown".to_string()),
                user: record.user.clone(),
                department: record.department.clone(),
                rental_start: record.start.format(DATETIME_FORMAT).to_string(),
                rental_end: record.end.map(|e| e.format(DATETIME_FORMAT).to_string()).unwrap_or_default(),
                duration: duration.display.clone(),
                duration_seconds: duration.sort_seconds,
                comment: record.comment.clone().unwrap_or_default(),
            })
            .collect();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["ID", "Equipment", "S/N", "Type", "User", "Department", "Start", "End", "Duration", "Comment"])?;
                for row in &rows {
                    wtr.write_record(&[
                        row.id.to_string(),
                        row.equipment.clone(),
                        row.serialnum.clone(),
                        row.equipment_type.clone(),
                        row.user.clone(),
                        row.department.clone(),
                        row.rental_start.clone(),
                        row.rental_end.clone(),
                        row.duration.clone(),
                        row.comment.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_user_stats(&self, stats: &[UserStat]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["User", "Department", "Rentals", "Total Rental Time"])?;
                for stat in stats {
                    wtr.write_record(&[
                        stat.name.clone(),
                        stat.department.clone(),
                        stat.rental_count.to_string(),
                        stat.total_rental_time.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(stats)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_etype_stats(&self, stats: &[EtypeStat]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["Type", "Equipment", "Active", "Availability", "Rentals", "Total Rental Time"])?;
                for stat in stats {
                    wtr.write_record(&[
                        stat.name.clone(),
                        stat.total_equipment.to_string(),
                        stat.active_rentals.to_string(),
                        format!("{:.1}%", stat.availability_pct),
                        stat.rental_count.to_string(),
                        stat.total_rental_time.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(stats)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_equipment_name_stats(&self, stats: &[EquipmentNameStat]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["Name", "Type", "Units", "Rentals", "Total Rental Time"])?;
                for stat in stats {
                    wtr.write_record(&[
                        stat.name.clone(),
                        stat.etype.clone(),
                        stat.instance_count.to_string(),
                        stat.rental_count.to_string(),
                        stat.total_rental_time.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(stats)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_department_stats(&self, stats: &[DepartmentStat]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["Department", "Rentals", "Total Rental Time"])?;
                for stat in stats {
                    wtr.write_record(&[stat.name.clone(), stat.rental_count.to_string(), stat.total_rental_time.clone()])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(stats)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, rows: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

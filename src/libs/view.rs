//! Console table rendering for lists, history and reports.

use crate::db::departments::Department;
use crate::db::equipment::Equipment;
use crate::db::etypes::EquipmentType;
use crate::db::rentals::RentalRecord;
use crate::db::users::User;
use crate::libs::duration::DurationData;
use crate::libs::report::{DepartmentStat, EquipmentNameStat, EtypeStat, UserStat};
use anyhow::Result;
use prettytable::{row, Table};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn departments(departments: &[Department]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME"]);
        for department in departments {
            table.add_row(row![department.id, department.name]);
        }
        table.printstd();
        Ok(())
    }

    pub fn etypes(etypes: &[EquipmentType]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME"]);
        for etype in etypes {
            table.add_row(row![etype.id, etype.name]);
        }
        table.printstd();
        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "DEPARTMENT", "BADGE"]);
        for user in users {
            table.add_row(row![user.id, user.name, user.department, user.badge.as_deref().unwrap_or("-")]);
        }
        table.printstd();
        Ok(())
    }

    pub fn equipment(equipment: &[Equipment]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "S/N", "TYPE", "SCAN CODE"]);
        for item in equipment {
            table.add_row(row![
                item.id,
                item.name,
                item.serialnum.as_deref().unwrap_or("-"),
                item.etype.as_deref().unwrap_or("Unknown"),
                item.scan_code.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();
        Ok(())
    }

    /// Rental history. Each row pairs the record with its precomputed
    /// duration so the printed string matches whatever ordering the caller
    /// applied on the numeric field.
    pub fn history(records: &[(RentalRecord, DurationData)]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "EQUIPMENT", "S/N", "TYPE", "USER", "DEPARTMENT", "START", "END", "DURATION", "COMMENT"]);
        for (record, duration) in records {
            table.add_row(row![
                record.id,
                record.equipment,
                record.serialnum.as_deref().unwrap_or("-"),
                record.etype.as_deref().unwrap_or("Unknown"),
                record.user,
                record.department,
                record.start.format(DATETIME_FORMAT),
                record.end.map(|e| e.format(DATETIME_FORMAT).to_string()).unwrap_or_else(|| "-".to_string()),
                duration.display,
                record.comment.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn user_stats(stats: &[UserStat]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["USER", "DEPARTMENT", "RENTALS", "TOTAL RENTAL TIME"]);
        for stat in stats {
            table.add_row(row![stat.name, stat.department, stat.rental_count, stat.total_rental_time]);
        }
        table.printstd();
        Ok(())
    }

    pub fn etype_stats(stats: &[EtypeStat]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["TYPE", "EQUIPMENT", "ACTIVE", "AVAILABILITY", "RENTALS", "TOTAL RENTAL TIME"]);
        for stat in stats {
            table.add_row(row![
                stat.name,
                stat.total_equipment,
                stat.active_rentals,
                format!("{:.1}%", stat.availability_pct),
                stat.rental_count,
                stat.total_rental_time
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn equipment_name_stats(stats: &[EquipmentNameStat]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["NAME", "TYPE", "UNITS", "RENTALS", "TOTAL RENTAL TIME"]);
        for stat in stats {
            table.add_row(row![stat.name, stat.etype, stat.instance_count, stat.rental_count, stat.total_rental_time]);
        }
        table.printstd();
        Ok(())
    }

    pub fn department_stats(stats: &[DepartmentStat]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["DEPARTMENT", "RENTALS", "TOTAL RENTAL TIME"]);
        for stat in stats {
            table.add_row(row![stat.name, stat.rental_count, stat.total_rental_time]);
        }
        table.printstd();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use rentrack::db::departments::Department;
    use rentrack::db::equipment::Equipment;
    use rentrack::db::etypes::EquipmentType;
    use rentrack::db::rentals::RentalRecord;
    use rentrack::db::users::User;
    use rentrack::libs::report::{
        department_statistics, equipment_name_statistics, etype_statistics, user_statistics, ReportPeriod, NEVER_RENTED_TOTAL,
    };

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn user(id: i64, name: &str, department: &str) -> User {
        User {
            id,
            name: name.to_string(),
            department_id: 1,
            department: department.to_string(),
            badge: None,
        }
    }

    fn record(user_id: i64, user: &str, department: &str, equipment: &str, etype: Option<&str>, seconds: i64) -> RentalRecord {
        RentalRecord {
            id: user_id * 100 + seconds % 97,
            user_id,
            user: user.to_string(),
            department: department.to_string(),
            equipment_id: 1,
            equipment: equipment.to_string(),
            serialnum: None,
            etype: etype.map(str::to_string),
            start: base_time(),
            end: Some(base_time() + Duration::seconds(seconds)),
            comment: None,
        }
    }

    fn open_record(user_id: i64, user: &str, department: &str, equipment: &str, etype: Option<&str>) -> RentalRecord {
        let mut r = record(user_id, user, department, equipment, etype, 0);
        r.end = None;
        r
    }

    #[test]
    fn test_user_statistics_sums_completed_only() {
        let users = vec![user(1, "Alice", "Lab")];
        // Two completed rentals plus one still open; the open one must not
        // count toward the total.
        let records = vec![
            record(1, "Alice", "Lab", "Scope", None, 3600),
            record(1, "Alice", "Lab", "Probe", None, 7200),
            open_record(1, "Alice", "Lab", "Meter", None),
        ];

        let stats = user_statistics(&users, &records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "Alice");
        assert_eq!(stats[0].department, "Lab");
        assert_eq!(stats[0].rental_count, 2);
        assert_eq!(stats[0].duration_seconds, 10800.0);
        assert_eq!(stats[0].total_rental_time, "0:03:00");
    }

    #[test]
    fn test_user_statistics_includes_never_rented() {
        let users = vec![user(1, "Alice", "Lab"), user(2, "Bob", "Office")];
        let records = vec![record(1, "Alice", "Lab", "Scope", None, 3600)];

        let stats = user_statistics(&users, &records);
        assert_eq!(stats.len(), 2);

        let bob = stats.iter().find(|s| s.name == "Bob").unwrap();
        assert_eq!(bob.rental_count, 0);
        assert_eq!(bob.duration_seconds, 0.0);
        assert_eq!(bob.total_rental_time, NEVER_RENTED_TOTAL);
    }

    #[test]
    fn test_user_statistics_sorted_by_name() {
        let users = vec![user(2, "Zoe", "Lab"), user(1, "Alice", "Lab"), user(3, "Mia", "Lab")];
        let stats = user_statistics(&users, &[]);
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Mia", "Zoe"]);
    }

    #[test]
    fn test_user_statistics_display_matches_sort_value() {
        // Two users whose displays would sort wrongly as strings; the
        // numeric field must order them by actual elapsed time.
        let users = vec![user(1, "Long", "Lab"), user(2, "Short", "Lab")];
        let records = vec![
            record(1, "Long", "Lab", "Scope", None, 16_146_720),
            record(2, "Short", "Lab", "Probe", None, 4_036_320),
        ];

        let mut stats = user_statistics(&users, &records);
        assert_eq!(stats.iter().find(|s| s.name == "Long").unwrap().total_rental_time, "186:21:12");
        assert_eq!(stats.iter().find(|s| s.name == "Short").unwrap().total_rental_time, "46:17:12");

        stats.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));
        assert_eq!(stats[0].name, "Long");
    }

    #[test]
    fn test_etype_statistics_availability() {
        let etypes = vec![
            EquipmentType { id: 1, name: "Laptop".to_string() },
            EquipmentType { id: 2, name: "Sensor".to_string() },
        ];
        let equipment = vec![
            eq(1, "Book A", Some(1), Some("Laptop")),
            eq(2, "Book B", Some(1), Some("Laptop")),
            eq(3, "Book C", Some(1), Some("Laptop")),
            eq(4, "Book D", Some(1), Some("Laptop")),
        ];
        let active = vec![open_record(1, "Alice", "Lab", "Book A", Some("Laptop"))];
        let completed = vec![record(1, "Alice", "Lab", "Book B", Some("Laptop"), 7200)];

        let stats = etype_statistics(&etypes, &equipment, &active, &completed);
        assert_eq!(stats.len(), 2);

        let laptops = stats.iter().find(|s| s.name == "Laptop").unwrap();
        assert_eq!(laptops.total_equipment, 4);
        assert_eq!(laptops.active_rentals, 1);
        assert_eq!(laptops.availability_pct, 75.0);
        assert_eq!(laptops.rental_count, 1);
        assert_eq!(laptops.total_rental_time, "0:02:00");

        // A type with no equipment counts as fully available, not a
        // division by zero.
        let sensors = stats.iter().find(|s| s.name == "Sensor").unwrap();
        assert_eq!(sensors.total_equipment, 0);
        assert_eq!(sensors.availability_pct, 100.0);
        assert_eq!(sensors.total_rental_time, NEVER_RENTED_TOTAL);
    }

    #[test]
    fn test_equipment_name_statistics_merges_instances() {
        // Two physical devices share the display name; their rentals land
        // in one row.
        let equipment = vec![
            eq(1, "Multimeter", Some(1), Some("Meter")),
            eq(2, "Multimeter", Some(1), Some("Meter")),
            eq(3, "Soldering iron", None, None),
        ];
        let completed = vec![
            record(1, "Alice", "Lab", "Multimeter", Some("Meter"), 3600),
            record(2, "Bob", "Lab", "Multimeter", Some("Meter"), 3600),
        ];

        let stats = equipment_name_statistics(&equipment, &completed);
        assert_eq!(stats.len(), 2);

        let meters = stats.iter().find(|s| s.name == "Multimeter").unwrap();
        assert_eq!(meters.instance_count, 2);
        assert_eq!(meters.rental_count, 2);
        assert_eq!(meters.duration_seconds, 7200.0);
        assert_eq!(meters.total_rental_time, "0:02:00");
        assert_eq!(meters.etype, "Meter");

        // Untyped equipment falls back to the unknown label and still shows
        // up in the by-name report.
        let iron = stats.iter().find(|s| s.name == "Soldering iron").unwrap();
        assert_eq!(iron.etype, "Unknown");
        assert_eq!(iron.total_rental_time, NEVER_RENTED_TOTAL);
    }

    #[test]
    fn test_department_statistics() {
        let departments = vec![
            Department { id: 1, name: "Lab".to_string() },
            Department { id: 2, name: "Office".to_string() },
        ];
        let completed = vec![
            record(1, "Alice", "Lab", "Scope", None, 3600),
            record(2, "Bob", "Lab", "Probe", None, 1800),
        ];

        let stats = department_statistics(&departments, &completed);
        assert_eq!(stats.len(), 2);

        let lab = stats.iter().find(|s| s.name == "Lab").unwrap();
        assert_eq!(lab.rental_count, 2);
        assert_eq!(lab.duration_seconds, 5400.0);

        let office = stats.iter().find(|s| s.name == "Office").unwrap();
        assert_eq!(office.rental_count, 0);
        assert_eq!(office.total_rental_time, NEVER_RENTED_TOTAL);
    }

    #[test]
    fn test_report_period_bounds() {
        let period = ReportPeriod::new(
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
        );
        let (from, to) = period.bounds();

        // The lower bound starts the day, the upper bound covers it whole.
        assert_eq!(from.unwrap().to_string(), "2024-06-01 00:00:00");
        assert_eq!(to.unwrap().to_string(), "2024-06-30 23:59:59");

        assert!(ReportPeriod::default().is_empty());
        let (from, to) = ReportPeriod::default().bounds();
        assert!(from.is_none() && to.is_none());
    }

    fn eq(id: i64, name: &str, etype_id: Option<i64>, etype: Option<&str>) -> Equipment {
        Equipment {
            id,
            name: name.to_string(),
            serialnum: None,
            etype_id,
            etype: etype.map(str::to_string),
            scan_code: None,
        }
    }
}

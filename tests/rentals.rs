#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rentrack::db::db::Db;
    use rentrack::db::departments::Departments;
    use rentrack::db::equipment::EquipmentStore;
    use rentrack::db::etypes::Etypes;
    use rentrack::db::migrations;
    use rentrack::db::rentals::{RentalFilter, Rentals};
    use rentrack::db::users::Users;
    use rentrack::libs::report::ReportPeriod;
    use rusqlite::params;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file run in parallel threads against one sandboxed data
    // directory; the database is created and migrated exactly once before
    // the first test touches it. Assertions are membership-based, so tests
    // sharing the database cannot disturb each other.
    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct RentalTestContext {}

    impl TestContext for RentalTestContext {
        fn setup() -> Self {
            let temp_dir = TEST_DIR.get_or_init(|| {
                let temp_dir = tempfile::tempdir().unwrap();
                std::env::set_var("HOME", temp_dir.path());
                std::env::set_var("LOCALAPPDATA", temp_dir.path());
                Db::new().unwrap();
                temp_dir
            });
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RentalTestContext {}
        }
    }

    /// Creates a department, user and equipment item; returns (user_id, equipment_id).
    fn seed(department: &str, user: &str, equipment: &str, serial: &str) -> (i64, i64) {
        let mut departments = Departments::new().unwrap();
        let department_id = departments.insert(department).unwrap();

        let mut users = Users::new().unwrap();
        let user_id = users.insert(user, department_id, None).unwrap();

        let mut store = EquipmentStore::new().unwrap();
        let equipment_id = store.insert(equipment, Some(serial), None, None).unwrap();

        (user_id, equipment_id)
    }

    #[test_context(RentalTestContext)]
    #[test]
    fn test_rental_lifecycle(_ctx: &mut RentalTestContext) {
        let (user_id, equipment_id) = seed("Engineering", "Alice", "Oscilloscope", "SN-100");
        let mut rentals = Rentals::new().unwrap();

        // Open a rental and see it among the active ones.
        let rental_id = rentals.start(user_id, equipment_id, Some("bench 3")).unwrap();
        let open = rentals.active_for_equipment(equipment_id).unwrap().unwrap();
        assert_eq!(open.id, rental_id);
        assert_eq!(open.user, "Alice");
        assert_eq!(open.department, "Engineering");
        assert_eq!(open.equipment, "Oscilloscope");
        assert_eq!(open.comment.as_deref(), Some("bench 3"));
        assert!(open.end.is_none());

        // Renting the same item again must fail while it is out.
        assert!(rentals.start(user_id, equipment_id, None).is_err());

        // Return it: the record closes exactly once.
        assert_eq!(rentals.finish(rental_id).unwrap(), 1);
        assert!(rentals.active_for_equipment(equipment_id).unwrap().is_none());
        assert_eq!(rentals.finish(rental_id).unwrap(), 0);

        let completed = rentals.fetch(RentalFilter::Completed(None)).unwrap();
        let closed = completed.iter().find(|r| r.id == rental_id).unwrap();
        assert!(closed.end.is_some());
        assert!(closed.end.unwrap() >= closed.start);

        // And it can go out again after the return.
        let second_id = rentals.start(user_id, equipment_id, None).unwrap();
        assert_ne!(second_id, rental_id);
    }

    #[test_context(RentalTestContext)]
    #[test]
    fn test_completed_filter_date_window(_ctx: &mut RentalTestContext) {
        let (user_id, equipment_id) = seed("Research", "Bob", "Thermal camera", "SN-200");
        let mut rentals = Rentals::new().unwrap();

        let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();

        // Returned at the very last second of the window's final day.
        let inside_end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap().and_hms_opt(23, 59, 59).unwrap();
        rentals
            .conn
            .execute(
                "INSERT INTO rentals (user_id, equipment_id, rental_start, rental_end) VALUES (?1, ?2, ?3, ?4)",
                params![user_id, equipment_id, start, inside_end],
            )
            .unwrap();
        let inside_id = rentals.conn.last_insert_rowid();

        // Returned one second into the next day.
        let outside_end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        rentals
            .conn
            .execute(
                "INSERT INTO rentals (user_id, equipment_id, rental_start, rental_end) VALUES (?1, ?2, ?3, ?4)",
                params![user_id, equipment_id, start, outside_end],
            )
            .unwrap();
        let outside_id = rentals.conn.last_insert_rowid();

        // Started before the window's first day.
        let early_start = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap().and_hms_opt(23, 0, 0).unwrap();
        let early_end = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
        rentals
            .conn
            .execute(
                "INSERT INTO rentals (user_id, equipment_id, rental_start, rental_end) VALUES (?1, ?2, ?3, ?4)",
                params![user_id, equipment_id, early_start, early_end],
            )
            .unwrap();
        let early_id = rentals.conn.last_insert_rowid();

        let period = ReportPeriod::new(
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
        );
        let completed = rentals.fetch(RentalFilter::Completed(Some(period))).unwrap();
        let ids: Vec<i64> = completed.iter().map(|r| r.id).collect();

        // 23:59:59 on the last day is inside; the next second is not, and
        // neither is a rental that started before the window opened.
        assert!(ids.contains(&inside_id));
        assert!(!ids.contains(&outside_id));
        assert!(!ids.contains(&early_id));
    }

    #[test_context(RentalTestContext)]
    #[test]
    fn test_joined_names_and_scan_lookups(_ctx: &mut RentalTestContext) {
        let mut departments = Departments::new().unwrap();
        let department_id = departments.insert("Metrology").unwrap();

        let mut etypes = Etypes::new().unwrap();
        let etype_id = etypes.insert("Sensor").unwrap();

        let mut users = Users::new().unwrap();
        let user_id = users.insert("Carol", department_id, Some("BADGE-7")).unwrap();

        let mut store = EquipmentStore::new().unwrap();
        let equipment_id = store.insert("Laser sensor", Some("SN-300"), Some(etype_id), Some("EQ-7")).unwrap();

        // Badge codes match case-insensitively; equipment resolves by scan
        // code first, serial as fallback.
        assert_eq!(users.fetch_by_badge("badge-7").unwrap().unwrap().id, user_id);
        assert_eq!(store.fetch_by_scan_code("eq-7").unwrap().unwrap().id, equipment_id);
        assert_eq!(store.fetch_by_scan_code("SN-300").unwrap().unwrap().id, equipment_id);

        let mut rentals = Rentals::new().unwrap();
        let rental_id = rentals.start(user_id, equipment_id, None).unwrap();

        let all = rentals.fetch(RentalFilter::All).unwrap();
        let row = all.iter().find(|r| r.id == rental_id).unwrap();
        assert_eq!(row.etype.as_deref(), Some("Sensor"));
        assert_eq!(row.serialnum.as_deref(), Some("SN-300"));
        assert_eq!(row.department, "Metrology");
    }

    #[test_context(RentalTestContext)]
    #[test]
    fn test_migrations_applied_on_open(_ctx: &mut RentalTestContext) {
        let db = Db::new().unwrap();
        let version = migrations::current_version(&db.conn).unwrap();
        assert!(version >= 3);

        // Running the migrations again must be a no-op.
        let db = Db::new().unwrap();
        assert_eq!(migrations::current_version(&db.conn).unwrap(), version);
    }
}

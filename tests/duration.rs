#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use rentrack::libs::duration::{
        current_rental_duration, format_seconds, rental_duration, DurationData, ACTIVE_RENTAL, NEVER_RENTED, ZERO_DURATION,
    };

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap()
    }

    #[test]
    fn test_duration_calculation_basic() {
        // 1 hour
        let data = rental_duration(Some(base_time()), Some(base_time() + Duration::hours(1)));
        assert_eq!(data.display, "0:01:00");
        assert_eq!(data.sort_seconds, 3600.0);

        // 1 day
        let data = rental_duration(Some(base_time()), Some(base_time() + Duration::days(1)));
        assert_eq!(data.display, "1:00:00");
        assert_eq!(data.sort_seconds, 86400.0);

        // 1 day, 1.5 hours
        let data = rental_duration(Some(base_time()), Some(base_time() + Duration::days(1) + Duration::minutes(90)));
        assert_eq!(data.display, "1:01:30");
        assert_eq!(data.sort_seconds, 91800.0);
    }

    #[test]
    fn test_duration_sorting_scenario() {
        // The lexicographic trap: "46:17:12" compares above "186:21:12" as a
        // string even though it is a fraction of the elapsed time.
        let long = rental_duration(
            Some(base_time()),
            Some(base_time() + Duration::days(185) + Duration::hours(45) + Duration::minutes(12)),
        );
        let short = rental_duration(
            Some(base_time()),
            Some(base_time() + Duration::days(45) + Duration::hours(41) + Duration::minutes(12)),
        );

        assert_eq!(long.display, "186:21:12");
        assert_eq!(short.display, "46:17:12");
        assert_eq!(long.sort_seconds, 16_146_720.0);
        assert_eq!(short.sort_seconds, 4_036_320.0);

        // String comparison gets it backwards; the numeric field does not.
        assert!(short.display > long.display);
        assert!(long.sort_seconds > short.sort_seconds);
    }

    #[test]
    fn test_active_rental_handling() {
        let data = rental_duration(Some(base_time()), None);
        assert_eq!(data.display, ACTIVE_RENTAL);
        assert!(data.sort_seconds.is_infinite());

        // Open rentals must outrank any closed rental, however long.
        assert!(data.sort_seconds > 16_146_720.0);
    }

    #[test]
    fn test_never_rented_handling() {
        let data = rental_duration(None, None);
        assert_eq!(data.display, NEVER_RENTED);
        assert_eq!(data.sort_seconds, 0.0);
    }

    #[test]
    fn test_zero_duration_handling() {
        let data = rental_duration(Some(base_time()), Some(base_time()));
        assert_eq!(data.display, ZERO_DURATION);
        assert_eq!(data.sort_seconds, 0.0);
    }

    #[test]
    fn test_negative_duration_clamped() {
        // End before start: corrupted history must not produce a negative
        // sort value or panic.
        let data = rental_duration(Some(base_time() + Duration::hours(1)), Some(base_time()));
        assert_eq!(data.display, ZERO_DURATION);
        assert_eq!(data.sort_seconds, 0.0);
    }

    #[test]
    fn test_duration_is_pure() {
        let start = Some(base_time());
        let end = Some(base_time() + Duration::days(3) + Duration::minutes(7));
        assert_eq!(rental_duration(start, end), rental_duration(start, end));
    }

    #[test]
    fn test_current_rental_duration() {
        // No start at all yields the zero duration, not "Active rental".
        let data = current_rental_duration(None);
        assert_eq!(data.display, ZERO_DURATION);
        assert_eq!(data.sort_seconds, 0.0);

        // A rental opened two hours ago has accumulated roughly that much.
        let start = chrono::Local::now().naive_local() - Duration::hours(2);
        let data = current_rental_duration(Some(start));
        assert_ne!(data.display, ACTIVE_RENTAL);
        assert!(data.sort_seconds >= 7200.0);
        assert!(data.sort_seconds < 7260.0);

        // A start in the future (clock skew) is clamped.
        let future = chrono::Local::now().naive_local() + Duration::hours(1);
        let data = current_rental_duration(Some(future));
        assert_eq!(data.display, ZERO_DURATION);
        assert_eq!(data.sort_seconds, 0.0);
    }

    #[test]
    fn test_format_seconds() {
        let cases = [
            (0.0, "0:00:00"),
            (-50.0, "0:00:00"),
            (59.0, "0:00:00"),
            (3600.0, "0:01:00"),
            (86400.0, "1:00:00"),
            (90000.0, "1:01:00"),
            (90060.0, "1:01:01"),
            (86399.0, "0:23:59"),
            (16_146_720.0, "186:21:12"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(format_seconds(seconds), expected, "for {} seconds", seconds);
        }
    }

    #[test]
    fn test_format_seconds_round_trip() {
        // Reconstructing seconds from the D:HH:MM string loses at most the
        // truncated sub-minute remainder.
        for seconds in [0, 60, 3599, 3600, 86399, 86400, 123_456, 4_036_320, 16_146_720] {
            let formatted = format_seconds(seconds as f64);
            let parts: Vec<i64> = formatted.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 3, "unexpected shape: {}", formatted);
            let reconstructed = parts[0] * 86_400 + parts[1] * 3_600 + parts[2] * 60;
            assert!(
                (seconds - reconstructed) < 60 && reconstructed <= seconds,
                "{} -> {} -> {}",
                seconds,
                formatted,
                reconstructed
            );
        }
    }

    #[test]
    fn test_mixed_sorting_descending() {
        let mut rows = vec![
            ("Item A", rental_duration(Some(base_time()), Some(base_time() + Duration::days(45)))),
            ("Item B", rental_duration(Some(base_time()), None)),
            ("Item C", rental_duration(Some(base_time()), Some(base_time() + Duration::days(186)))),
            ("Item D", rental_duration(None, None)),
        ];

        rows.sort_by(|a, b| b.1.sort_seconds.total_cmp(&a.1.sort_seconds));
        let order: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();

        // Active first, then by elapsed time, never-rented last.
        assert_eq!(order, vec!["Item B", "Item C", "Item A", "Item D"]);
    }

    #[test]
    fn test_well_formed_check() {
        assert!(rental_duration(Some(base_time()), None).is_well_formed());
        assert!(rental_duration(None, None).is_well_formed());

        let nan = DurationData {
            display: "1:00:00".to_string(),
            sort_seconds: f64::NAN,
        };
        assert!(!nan.is_well_formed());

        let empty = DurationData {
            display: String::new(),
            sort_seconds: 0.0,
        };
        assert!(!empty.is_well_formed());
    }
}

#[cfg(test)]
mod tests {
    use crate::business_time::business_seconds_between;
    use chrono::{TimeZone, Utc};

    // 2023-05-15 was a Monday; 2023-05-20/21 a Saturday/Sunday.

    #[test]
    fn test_same_weekday_interval() {
        let start = Utc.with_ymd_and_hms(2023, 5, 10, 10, 0, 0).unwrap(); // Wednesday
        let end = Utc.with_ymd_and_hms(2023, 5, 10, 11, 30, 0).unwrap();

        assert_eq!(business_seconds_between(start, end), 5400);
    }

    #[test]
    fn test_equal_instants() {
        let at = Utc.with_ymd_and_hms(2023, 5, 10, 10, 0, 0).unwrap();

        assert_eq!(business_seconds_between(at, at), 0);
    }

    #[test]
    fn test_inverted_midweek_interval_is_zero() {
        let start = Utc.with_ymd_and_hms(2023, 5, 16, 12, 0, 0).unwrap(); // Tuesday
        let end = Utc.with_ymd_and_hms(2023, 5, 16, 11, 0, 0).unwrap();

        assert_eq!(business_seconds_between(start, end), 0);
    }

    #[test]
    fn test_full_weekdays_accumulate() {
        let start = Utc.with_ymd_and_hms(2023, 5, 15, 0, 0, 0).unwrap(); // Monday
        let end = Utc.with_ymd_and_hms(2023, 5, 19, 0, 0, 0).unwrap(); // Friday

        assert_eq!(business_seconds_between(start, end), 4 * 86_400);
    }

    #[test]
    fn test_friday_to_monday_skips_weekend() {
        let start = Utc.with_ymd_and_hms(2023, 5, 19, 14, 0, 0).unwrap(); // Friday
        let end = Utc.with_ymd_and_hms(2023, 5, 22, 10, 0, 0).unwrap(); // Monday

        // 10h of Friday plus 10h of Monday
        assert_eq!(business_seconds_between(start, end), 72_000);
    }

    #[test]
    fn test_saturday_to_monday_counts_only_monday() {
        let start = Utc.with_ymd_and_hms(2023, 5, 20, 14, 0, 0).unwrap(); // Saturday
        let end = Utc.with_ymd_and_hms(2023, 5, 22, 10, 0, 0).unwrap(); // Monday

        assert_eq!(business_seconds_between(start, end), 36_000);
    }

    #[test]
    fn test_sunday_to_monday_counts_only_monday() {
        let start = Utc.with_ymd_and_hms(2023, 5, 21, 14, 0, 0).unwrap(); // Sunday
        let end = Utc.with_ymd_and_hms(2023, 5, 22, 10, 0, 0).unwrap(); // Monday

        assert_eq!(business_seconds_between(start, end), 36_000);
    }

    #[test]
    fn test_saturday_to_sunday_is_zero() {
        let start = Utc.with_ymd_and_hms(2023, 5, 20, 14, 0, 0).unwrap(); // Saturday
        let end = Utc.with_ymd_and_hms(2023, 5, 21, 14, 0, 0).unwrap(); // Sunday

        assert_eq!(business_seconds_between(start, end), 0);
    }

    #[test]
    fn test_within_single_saturday_is_zero() {
        let start = Utc.with_ymd_and_hms(2023, 5, 20, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 5, 20, 17, 0, 0).unwrap();

        assert_eq!(business_seconds_between(start, end), 0);
    }

    #[test]
    fn test_sunday_to_next_saturday() {
        let start = Utc.with_ymd_and_hms(2023, 5, 21, 14, 0, 0).unwrap(); // Sunday
        let end = Utc.with_ymd_and_hms(2023, 5, 27, 14, 0, 0).unwrap(); // Saturday

        // Monday through Friday in full
        assert_eq!(business_seconds_between(start, end), 5 * 86_400);
    }

    #[test]
    fn test_saturday_to_sunday_three_weeks_later() {
        let start = Utc.with_ymd_and_hms(2023, 5, 20, 14, 0, 0).unwrap(); // Saturday
        let end = Utc.with_ymd_and_hms(2023, 6, 11, 14, 0, 0).unwrap(); // Sunday, 3 weeks later

        // Three full working weeks
        assert_eq!(business_seconds_between(start, end), 15 * 86_400);
    }

    #[test]
    fn test_weekday_across_multiple_weekends() {
        let start = Utc.with_ymd_and_hms(2023, 5, 17, 14, 0, 0).unwrap(); // Wednesday
        let end = Utc.with_ymd_and_hms(2023, 5, 29, 14, 0, 0).unwrap(); // Monday, 12 days later

        // 12 calendar days minus 4 weekend days
        assert_eq!(business_seconds_between(start, end), 8 * 86_400);
    }

    #[test]
    fn test_weekly_periodicity() {
        // Shifting the end by a week adds exactly five weekdays,
        // regardless of how many weeks the interval already spans.
        let start = Utc.with_ymd_and_hms(2023, 5, 17, 14, 0, 0).unwrap(); // Wednesday
        let end = Utc.with_ymd_and_hms(2023, 5, 24, 9, 30, 0).unwrap(); // next Wednesday

        let one_week = business_seconds_between(start, end);
        let two_weeks = business_seconds_between(start, end + chrono::Duration::days(7));
        let three_weeks = business_seconds_between(start, end + chrono::Duration::days(14));

        assert_eq!(two_weeks - one_week, 5 * 86_400);
        assert_eq!(three_weeks - two_weeks, 5 * 86_400);
    }
}

//! Weekend-aware duration arithmetic

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};

/// Seconds between two instants counting only Monday-Friday wall-clock
/// time. Day boundaries and weekdays are anchored to UTC.
///
/// Walks whole calendar days from `start`: each slice up to the next
/// UTC midnight counts unless its day is Saturday or Sunday, then the
/// final partial day is handled the same way. A start or end inside a
/// weekend contributes nothing, and an interval that does not move
/// forward in time contributes nothing either, so the result is never
/// negative.
pub fn business_seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    if end <= start {
        return 0;
    }

    let mut cursor = start;
    let mut total = 0i64;

    while cursor.date_naive() < end.date_naive() {
        let Some(next_day) = cursor.date_naive().succ_opt() else {
            break;
        };
        let midnight = next_day.and_time(NaiveTime::MIN).and_utc();
        if !is_weekend(cursor.date_naive()) {
            total += (midnight - cursor).num_seconds();
        }
        cursor = midnight;
    }

    if !is_weekend(end.date_naive()) {
        total += (end - cursor).num_seconds();
    }

    total
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

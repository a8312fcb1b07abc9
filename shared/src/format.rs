use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone};

/// Render a meeting's time range in the given timezone. Deterministic for
/// identical inputs, so card output can be golden-tested. The date is
/// printed once when the meeting starts and ends on the same day.
pub fn format_time_range<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let same_day = start.year() == end.year() && start.ordinal() == end.ordinal();
    if same_day {
        format!(
            "{} {} - {}",
            start.format("%a, %b %-d"),
            start.format("%-I:%M %p"),
            end.format("%-I:%M %p"),
        )
    } else {
        format!(
            "{} - {}",
            start.format("%a, %b %-d %-I:%M %p"),
            end.format("%a, %b %-d %-I:%M %p"),
        )
    }
}

pub fn attendee_label(count: usize) -> String {
    match count {
        0 => "No attendees".to_string(),
        1 => "1 attendee".to_string(),
        n => format!("{} attendees", n),
    }
}

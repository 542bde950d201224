//! Spanish rendering of the API's ISO-8601 timestamps.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Accepts both offset-qualified and naive timestamps.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// `15 de enero de 2024`. Unparsable input is returned as-is.
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => long_date(&dt),
        None => value.to_string(),
    }
}

/// `15 de enero de 2024, 09:05`.
pub fn format_date_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => format!("{}, {:02}:{:02}", long_date(&dt), dt.hour(), dt.minute()),
        None => value.to_string(),
    }
}

fn long_date(dt: &NaiveDateTime) -> String {
    let month = MONTHS[dt.month0() as usize];
    format!("{} de {} de {}", dt.day(), month, dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_and_offset_timestamps() {
        assert_eq!(format_date("2024-01-15T10:30:00"), "15 de enero de 2024");
        assert_eq!(format_date("2024-12-01T00:00:00.123456"), "1 de diciembre de 2024");
        assert_eq!(format_date_time("2024-03-09T09:05:00+00:00"), "9 de marzo de 2024, 09:05");
        assert_eq!(format_date_time("2024-03-09 21:45:10"), "9 de marzo de 2024, 21:45");
    }

    #[test]
    fn garbage_passes_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("ayer"), "ayer");
    }
}

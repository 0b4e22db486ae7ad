//! Date and time generators.
//!
//! Values are drawn from a fixed window so that seeded generation stays
//! reproducible; nothing here reads the wall clock.

use super::Builtin;
use chrono::{DateTime, Datelike, Utc};
use rand::{Rng, RngCore};

/// 1970-01-01T00:00:00Z
const WINDOW_START: i64 = 0;
/// 2030-12-31T23:59:59Z
const WINDOW_END: i64 = 1_924_991_999;

const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("date", date),
    Builtin::new("time", time),
    Builtin::new("date_time", date_time),
    Builtin::new("iso8601", iso8601),
    Builtin::new("unix_time", unix_time),
    Builtin::new("year", year),
    Builtin::new("month", month),
    Builtin::new("month_name", month_name),
    Builtin::new("day_of_month", day_of_month),
    Builtin::new("day_of_week", day_of_week),
];

/// Random timestamp inside the generation window.
pub fn random_datetime(rng: &mut dyn RngCore) -> DateTime<Utc> {
    let ts = rng.gen_range(WINDOW_START..=WINDOW_END);
    DateTime::from_timestamp(ts, 0).unwrap_or_default()
}

pub fn date(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).format("%Y-%m-%d").to_string()
}

pub fn time(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).format("%H:%M:%S").to_string()
}

pub fn date_time(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn iso8601(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn unix_time(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).timestamp().to_string()
}

pub fn year(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).year().to_string()
}

/// Two-digit month number.
pub fn month(rng: &mut dyn RngCore) -> String {
    format!("{:02}", rng.gen_range(1..=12))
}

pub fn month_name(rng: &mut dyn RngCore) -> String {
    MONTH_NAMES[rng.gen_range(0..MONTH_NAMES.len())].to_string()
}

/// Two-digit day, valid for every month.
pub fn day_of_month(rng: &mut dyn RngCore) -> String {
    format!("{:02}", rng.gen_range(1..=28))
}

pub fn day_of_week(rng: &mut dyn RngCore) -> String {
    random_datetime(rng).format("%A").to_string()
}

use serde::{Deserialize, Deserializer};
use time::Weekday;

use crate::{Error, Result};

/// Canonical week order, Sunday is index 0.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEK.get(usize::from(index)).copied()
}

pub fn weekday_index(day: Weekday) -> u8 {
    day.number_days_from_sunday()
}

/// Parses a weekday from its English name (any case) or its index 0-6.
pub fn parse_weekday(value: &str) -> Result<Weekday> {
    let value = value.trim();

    if let Ok(index) = value.parse::<u8>() {
        return weekday_from_index(index).ok_or(Error::InvalidWeekday(index));
    }

    WEEK.iter()
        .copied()
        .find(|day| day.to_string().eq_ignore_ascii_case(value))
        .ok_or_else(|| Error::UnknownWeekday(value.to_owned()))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    WEEK.iter()
        .copied()
        .find(|day| day.to_string() == name)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown weekday '{name}'")))
}

//! Shared scalar types and date (de)serialization helpers.
//!
//! Dataset dates are ISO calendar dates (`2023-04-15`). A month-only form
//! (`2023-04`) is accepted as well and resolves to the first of the month.

use chrono::NaiveDate;

/// All record dates are calendar dates without a time component.
pub type Date = NaiveDate;

/// Serialized date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a dataset date string.
///
/// Returns `None` if the input is neither `YYYY-MM-DD` nor `YYYY-MM`.
///
/// # Examples
///
/// ```
/// use folio_core::types::parse_date;
/// assert_eq!(parse_date("2023-04-15").unwrap().to_string(), "2023-04-15");
/// assert_eq!(parse_date("2023-04").unwrap().to_string(), "2023-04-01");
/// assert!(parse_date("April 2023").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), DATE_FORMAT).ok())
}

/// `#[serde(with = "...")]` adapter for required dates.
pub mod date {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_date, Date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }
}

/// `#[serde(with = "...")]` adapter for optional dates. Pair with
/// `#[serde(default)]` so a missing field reads as `None`.
pub mod optional_date {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_date, Date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(
        value: &Option<Date>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_date_parses() {
        assert_eq!(parse_date("2021-12-31"), NaiveDate::from_ymd_opt(2021, 12, 31));
    }

    #[test]
    fn month_only_resolves_to_first_day() {
        assert_eq!(parse_date("2021-12"), NaiveDate::from_ymd_opt(2021, 12, 1));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_date(" 2021-02-03 "), NaiveDate::from_ymd_opt(2021, 2, 3));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2021-13-01"), None);
        assert_eq!(parse_date("yesterday"), None);
    }
}

use crate::error::RideLogError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One ride, decoded from `DDMMYYYY-START-END-ROUTE`.
///
/// Unlike trick signatures this codec is strict: anything that does not
/// fit the format is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideLog {
    pub date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub route_name: String,
}

impl RideLog {
    pub fn new(
        date: NaiveDate,
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        route_name: impl Into<String>,
    ) -> Self {
        Self {
            date,
            start_location: start_location.into(),
            end_location: end_location.into(),
            route_name: route_name.into(),
        }
    }

    pub fn parse(signature: &str) -> Result<Self, RideLogError> {
        if signature.trim().is_empty() {
            return Err(RideLogError::Empty);
        }

        let parts: Vec<&str> = signature.split('-').collect();
        let [date_part, start, end, route] = parts[..] else {
            return Err(RideLogError::Format);
        };

        let date = parse_date(date_part)?;

        for (value, field) in [
            (start, "Start location"),
            (end, "End location"),
            (route, "Route name"),
        ] {
            if value.trim().is_empty() {
                return Err(RideLogError::MissingField(field));
            }
        }

        Ok(Self::new(date, start, end, route))
    }

    pub fn try_parse(signature: &str) -> Option<Self> {
        Self::parse(signature).ok()
    }

    /// Encodes back into `DDMMYYYY-START-END-ROUTE`.
    pub fn to_signature(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.date.format("%d%m%Y"),
            self.start_location,
            self.end_location,
            self.route_name
        )
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, RideLogError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RideLogError::DateLength(raw.to_string()));
    }

    let invalid = || RideLogError::Date(raw.to_string());
    let day: u32 = raw[0..2].parse().map_err(|_| invalid())?;
    let month: u32 = raw[2..4].parse().map_err(|_| invalid())?;
    let year: i32 = raw[4..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|d| d.year() >= 1)
        .ok_or_else(invalid)
}

impl FromStr for RideLog {
    type Err = RideLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RideLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ride on {} from {} to {} via route {}",
            self.date.format("%B %d, %Y"),
            self.start_location,
            self.end_location,
            self.route_name
        )
    }
}

//! Date helpers: the `DD-MM-YYYY` key used to partition daily files.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

const DATE_KEY_FORMAT: &str = "%d-%m-%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Calendar day (local server time) identifying one daily log and its export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(today())
    }

    /// Parses `DD-MM-YYYY`.
    pub fn parse(s: &str) -> AppResult<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }

    /// `None` → today.
    pub fn parse_or_today(s: Option<&str>) -> AppResult<Self> {
        match s {
            Some(s) => Self::parse(s),
            None => Ok(Self::today()),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

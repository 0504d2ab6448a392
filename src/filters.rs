//! Filter parameters chosen by the user for each dashboard chart.
//!
//! The presentation layer hands over raw strings ([FilterQuery]). Each chart's
//! parameter is resolved into a typed value on its own, with defaults derived
//! from today's date.

use std::fmt;

use time::Date;

use crate::{
    Error,
    calendar::{DateRange, YearMonth, parse_date, parse_year},
};

/// Names a filter parameter in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParameter {
    /// The month selected for the daily expense scatter chart.
    Month,
    /// The year selected for the monthly totals chart.
    Year,
    /// The first day of the category totals date range.
    From,
    /// The last day of the category totals date range.
    To,
}

impl FilterParameter {
    /// The format the parameter is expected in.
    pub fn expected_format(self) -> &'static str {
        match self {
            FilterParameter::Month => "YYYY-MM",
            FilterParameter::Year => "YYYY",
            FilterParameter::From | FilterParameter::To => "YYYY-MM-DD",
        }
    }
}

impl fmt::Display for FilterParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterParameter::Month => "month",
            FilterParameter::Year => "year",
            FilterParameter::From => "from date",
            FilterParameter::To => "to date",
        };

        f.write_str(name)
    }
}

/// Filter parameters as raw strings, as they arrive from the command line.
///
/// A missing field falls back to its default. A field that is present but
/// malformed is an error, never silently replaced by the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// The selected month, `YYYY-MM`.
    pub month: Option<String>,
    /// The selected year, `YYYY`.
    pub year: Option<String>,
    /// The first day of the date range, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// The last day of the date range, `YYYY-MM-DD`.
    pub to: Option<String>,
}

impl FilterQuery {
    /// Resolve the month for the scatter chart.
    ///
    /// # Errors
    /// Returns [Error::InvalidParameter] if the month is not `YYYY-MM`.
    pub fn resolve_month(&self, today: Date) -> Result<YearMonth, Error> {
        match non_empty(&self.month) {
            Some(text) => YearMonth::parse(text).inspect_err(log_invalid),
            None => Ok(YearMonth::of(today)),
        }
    }

    /// Resolve the year for the monthly totals chart.
    ///
    /// # Errors
    /// Returns [Error::InvalidParameter] if the year is not `YYYY`.
    pub fn resolve_year(&self, today: Date) -> Result<i32, Error> {
        match non_empty(&self.year) {
            Some(text) => parse_year(text).inspect_err(log_invalid),
            None => Ok(today.year()),
        }
    }

    /// Resolve the date range for the category totals chart.
    ///
    /// Each bound defaults independently to the first or last day of the
    /// current month.
    ///
    /// # Errors
    /// Returns [Error::InvalidParameter] if either bound is not `YYYY-MM-DD`.
    pub fn resolve_date_range(&self, today: Date) -> Result<DateRange, Error> {
        let defaults = DateRange::month(YearMonth::of(today));

        let from = match non_empty(&self.from) {
            Some(text) => parse_date(text, FilterParameter::From).inspect_err(log_invalid)?,
            None => defaults.from,
        };
        let to = match non_empty(&self.to) {
            Some(text) => parse_date(text, FilterParameter::To).inspect_err(log_invalid)?,
            None => defaults.to,
        };

        let range = DateRange::new(from, to);

        if range.is_inverted() {
            tracing::warn!("date range {range} is inverted and will match no transactions");
        }

        Ok(range)
    }
}

/// Treats empty and whitespace-only form values as missing.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn log_invalid(error: &Error) {
    tracing::error!("invalid filter parameter: {error}");
}

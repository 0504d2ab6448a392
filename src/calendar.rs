//! Immutable calendar values used to select and bucket transactions.
//!
//! All values are plain `Copy` types wrapping [time::Date] and [time::Month],
//! so filtering never needs a mutable date object.

use std::fmt;

use serde::Serialize;
use time::{
    Date, Month,
    format_description::BorrowedFormatItem,
    macros::format_description,
    parsing::Parsed,
};

use crate::{Error, filters::FilterParameter};

/// Calendar date format, e.g. "2024-03-05".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Year-month format, e.g. "2024-03".
const YEAR_MONTH_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]");

/// Year format, e.g. "2024".
const YEAR_FORMAT: &[BorrowedFormatItem] = format_description!("[year]");

/// The months of the year in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Formats a month as a three-letter abbreviation, e.g. "Jan".
pub fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// A calendar month of a specific year, e.g. March 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Create a year-month value.
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The year-month that `date` falls in.
    pub const fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a `YYYY-MM` string.
    ///
    /// # Errors
    /// Returns [Error::InvalidParameter] if `text` is not exactly a four digit
    /// year and a two digit month separated by a hyphen.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidParameter {
            parameter: FilterParameter::Month,
            value: text.to_owned(),
        };

        let parsed = parse_exact(text, YEAR_MONTH_FORMAT).ok_or_else(invalid)?;

        match (parsed.year(), parsed.month()) {
            (Some(year), Some(month)) => Ok(Self::new(year, month)),
            _ => Err(invalid()),
        }
    }

    /// The year component.
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The month component.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Whether `date` falls in this calendar month.
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The first day of the month.
    pub fn first_day(self) -> Date {
        // Day 1 exists in every month of every representable year.
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// The last day of the month.
    pub fn last_day(self) -> Date {
        let day = self.month.length(self.year);
        Date::from_calendar_date(self.year, self.month, day).unwrap_or(Date::MAX)
    }

    /// The full name of the month with the year, e.g. "March 2024".
    pub fn label(self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An inclusive range of calendar dates.
///
/// A range where `from` is after `to` is allowed and contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    /// The first day of the range.
    #[serde(serialize_with = "serialize_date")]
    pub from: Date,
    /// The last day of the range.
    #[serde(serialize_with = "serialize_date")]
    pub to: Date,
}

impl DateRange {
    /// Create a date range.
    pub const fn new(from: Date, to: Date) -> Self {
        Self { from, to }
    }

    /// The range spanning every day of `month`.
    pub fn month(month: YearMonth) -> Self {
        Self::new(month.first_day(), month.last_day())
    }

    /// Parse `YYYY-MM-DD` bounds.
    ///
    /// # Errors
    /// Returns [Error::InvalidParameter] naming the first bound that could not
    /// be parsed. An inverted range is not an error.
    pub fn parse(from: &str, to: &str) -> Result<Self, Error> {
        let from = parse_date(from, FilterParameter::From)?;
        let to = parse_date(to, FilterParameter::To)?;

        Ok(Self::new(from, to))
    }

    /// Whether `date` lies in the range, inclusive on both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.from <= date && date <= self.to
    }

    /// Whether `from` is after `to`.
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Parse a `YYYY-MM-DD` string, reporting failures against `parameter`.
pub fn parse_date(text: &str, parameter: FilterParameter) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidParameter {
        parameter,
        value: text.to_owned(),
    })
}

/// Parse a `YYYY` string.
pub fn parse_year(text: &str) -> Result<i32, Error> {
    parse_exact(text, YEAR_FORMAT)
        .and_then(|parsed| parsed.year())
        .ok_or_else(|| Error::InvalidParameter {
            parameter: FilterParameter::Year,
            value: text.to_owned(),
        })
}

/// Parses `text` against `format`, rejecting any trailing input.
fn parse_exact(text: &str, format: &[BorrowedFormatItem]) -> Option<Parsed> {
    let mut parsed = Parsed::new();
    let remaining = parsed.parse_items(text.as_bytes(), format).ok()?;

    remaining.is_empty().then_some(parsed)
}

fn serialize_date<S: serde::Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{Error, filters::FilterParameter};

    use super::{DateRange, MONTHS, YearMonth, month_label, parse_date, parse_year};

    #[test]
    fn month_labels_are_three_letter_abbreviations() {
        let labels: Vec<_> = MONTHS.into_iter().map(month_label).collect();

        assert_eq!(
            labels,
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec"
            ]
        );
    }

    #[test]
    fn parses_year_month() {
        let got = YearMonth::parse("2024-03").unwrap();

        assert_eq!(got, YearMonth::new(2024, Month::March));
        assert_eq!(got.to_string(), "2024-03");
        assert_eq!(got.label(), "March 2024");
    }

    #[test]
    fn rejects_malformed_year_month() {
        for text in ["2024-13", "2024-3", "2024/03", "2024-03-01", "march", ""] {
            assert_eq!(
                YearMonth::parse(text),
                Err(Error::InvalidParameter {
                    parameter: FilterParameter::Month,
                    value: text.to_owned(),
                }),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn year_month_contains_only_its_own_month() {
        let march = YearMonth::new(2024, Month::March);

        assert!(march.contains(date!(2024 - 03 - 01)));
        assert!(march.contains(date!(2024 - 03 - 31)));
        assert!(!march.contains(date!(2024 - 02 - 29)));
        assert!(!march.contains(date!(2023 - 03 - 15)));
    }

    #[test]
    fn year_month_bounds_handle_leap_years() {
        let february = YearMonth::new(2024, Month::February);

        assert_eq!(february.first_day(), date!(2024 - 02 - 01));
        assert_eq!(february.last_day(), date!(2024 - 02 - 29));
        assert_eq!(
            YearMonth::new(2023, Month::February).last_day(),
            date!(2023 - 02 - 28)
        );
    }

    #[test]
    fn parses_year() {
        assert_eq!(parse_year("2024"), Ok(2024));
        assert_eq!(
            parse_year("24"),
            Err(Error::InvalidParameter {
                parameter: FilterParameter::Year,
                value: "24".to_owned()
            })
        );
        assert!(parse_year("2024-01").is_err());
        assert!(parse_year("year").is_err());
    }

    #[test]
    fn parses_date() {
        assert_eq!(
            parse_date("2024-03-05", FilterParameter::From),
            Ok(date!(2024 - 03 - 05))
        );
        assert_eq!(
            parse_date("2024-02-30", FilterParameter::To),
            Err(Error::InvalidParameter {
                parameter: FilterParameter::To,
                value: "2024-02-30".to_owned()
            })
        );
    }

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange::new(date!(2024 - 03 - 01), date!(2024 - 03 - 31));

        assert!(range.contains(date!(2024 - 03 - 01)));
        assert!(range.contains(date!(2024 - 03 - 31)));
        assert!(!range.contains(date!(2024 - 02 - 29)));
        assert!(!range.contains(date!(2024 - 04 - 01)));
    }

    #[test]
    fn inverted_date_range_contains_nothing() {
        let range = DateRange::parse("2024-03-31", "2024-03-01").unwrap();

        assert!(range.is_inverted());
        assert!(!range.contains(date!(2024 - 03 - 15)));
        assert!(!range.contains(date!(2024 - 03 - 01)));
        assert!(!range.contains(date!(2024 - 03 - 31)));
    }

    #[test]
    fn date_range_parse_reports_the_bad_bound() {
        assert_eq!(
            DateRange::parse("2024-03-01", "tomorrow"),
            Err(Error::InvalidParameter {
                parameter: FilterParameter::To,
                value: "tomorrow".to_owned()
            })
        );
    }

    #[test]
    fn month_range_spans_whole_month() {
        let range = DateRange::month(YearMonth::new(2024, Month::April));

        assert_eq!(range.from, date!(2024 - 04 - 01));
        assert_eq!(range.to, date!(2024 - 04 - 30));
    }
}

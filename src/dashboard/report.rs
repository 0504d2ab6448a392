//! Builds every dashboard dataset for one set of filter parameters.
//!
//! Each chart's parameter is resolved separately, so a malformed month only
//! affects the daily expenses chart and the other datasets are still built.

use serde::{Serialize, Serializer, ser::SerializeMap};
use time::Date;

use crate::{
    Error, Transaction,
    calendar::{DateRange, YearMonth},
    dashboard::aggregation::{
        CategoryTotals, MonthlyTotals, ScatterPoint, SummaryTotals, category_totals,
        daily_expense_scatter, monthly_expense_totals, summary_totals,
    },
    filters::FilterQuery,
};

/// The expenses of one month, by day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyExpenses {
    /// The month the points belong to.
    pub month: YearMonth,
    /// One point per expense.
    pub points: Vec<ScatterPoint>,
}

/// The expense totals of each month of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyExpenses {
    /// The year the totals belong to.
    pub year: i32,
    /// Twelve labels and totals.
    #[serde(flatten)]
    pub totals: MonthlyTotals,
}

/// The expense totals of each category in a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpenses {
    /// The inclusive range the totals cover.
    pub date_range: DateRange,
    /// Labels, totals and colours per category.
    #[serde(flatten)]
    pub totals: CategoryTotals,
}

/// All dashboard datasets for one set of filter parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// The raw parameters the report was built from.
    #[serde(skip)]
    pub query: FilterQuery,
    /// The date the defaults were derived from.
    #[serde(skip)]
    pub today: Date,
    /// Scatter data for the selected month.
    #[serde(serialize_with = "serialize_outcome")]
    pub daily_expenses: Result<DailyExpenses, Error>,
    /// Bar data for the selected year.
    #[serde(serialize_with = "serialize_outcome")]
    pub monthly_expenses: Result<MonthlyExpenses, Error>,
    /// Doughnut data for the selected date range.
    #[serde(serialize_with = "serialize_outcome")]
    pub category_expenses: Result<CategoryExpenses, Error>,
    /// Totals over every transaction.
    pub summary: SummaryTotals,
}

impl DashboardReport {
    /// Builds every dataset from `transactions`.
    ///
    /// Missing parameters default to the month and year of `today`.
    pub fn build(transactions: &[Transaction], query: &FilterQuery, today: Date) -> Self {
        let daily_expenses = query.resolve_month(today).map(|month| DailyExpenses {
            month,
            points: daily_expense_scatter(transactions, month),
        });

        let monthly_expenses = query.resolve_year(today).map(|year| MonthlyExpenses {
            year,
            totals: monthly_expense_totals(transactions, year),
        });

        let category_expenses = query
            .resolve_date_range(today)
            .map(|date_range| CategoryExpenses {
                date_range,
                totals: category_totals(transactions, date_range),
            });

        Self {
            query: query.clone(),
            today,
            daily_expenses,
            monthly_expenses,
            category_expenses,
            summary: summary_totals(transactions),
        }
    }

    /// Serialises the datasets as pretty-printed JSON.
    ///
    /// Datasets whose parameter was invalid are written as
    /// `{"error": "<message>"}`.
    ///
    /// # Errors
    /// Returns [Error::JSONSerializationError] if serialisation fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|error| {
            tracing::error!("could not serialize dashboard report: {error}");
            Error::JSONSerializationError(error.to_string())
        })
    }
}

fn serialize_outcome<T, S>(outcome: &Result<T, Error>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match outcome {
        Ok(value) => value.serialize(serializer),
        Err(error) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("error", &error.to_string())?;
            map.end()
        }
    }
}

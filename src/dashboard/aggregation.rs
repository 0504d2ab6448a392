//! Transaction aggregation for the dashboard charts and summary cards.
//!
//! Every function here is a single pass over a borrowed slice of transactions
//! and returns freshly allocated, chart-ready data. Nothing is cached and the
//! input is never modified, so callers may memoise on their inputs freely.

use serde::Serialize;

use crate::{
    Transaction,
    calendar::{DateRange, MONTHS, YearMonth, month_label},
    palette::{Color, palette_color},
};

/// A single expense plotted on the daily scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Day of the month, 1 to 31.
    #[serde(rename = "x")]
    pub day: u8,
    /// The expense amount.
    #[serde(rename = "y")]
    pub amount: f64,
    /// The category of the expense.
    pub category: String,
    /// The title of the expense.
    pub title: String,
}

/// Expense totals for each of the twelve months of a year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// Month abbreviations, "Jan" to "Dec".
    pub labels: Vec<&'static str>,
    /// The summed expenses for the month with the same index in `labels`.
    pub totals: Vec<f64>,
}

/// Expense totals per category, in the order categories were first seen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoryTotals {
    /// The distinct category names.
    pub labels: Vec<String>,
    /// The summed expenses for the category with the same index in `labels`.
    pub totals: Vec<f64>,
    /// The chart colour bound to the category with the same index in `labels`.
    pub colors: Vec<Color>,
}

impl CategoryTotals {
    /// Whether no category had any expenses.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Figures shown on the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    /// The number of transactions.
    pub count: usize,
    /// The sum of all credits.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expense: f64,
    /// Income minus expenses, may be negative.
    pub net_balance: f64,
}

/// Extracts the expenses in `selected_month` as scatter points.
///
/// Points keep the relative order of the input transactions.
pub fn daily_expense_scatter(
    transactions: &[Transaction],
    selected_month: YearMonth,
) -> Vec<ScatterPoint> {
    let points: Vec<ScatterPoint> = transactions
        .iter()
        .filter(|transaction| transaction.is_expense() && selected_month.contains(transaction.date))
        .map(|transaction| ScatterPoint {
            day: transaction.date.day(),
            amount: transaction.amount,
            category: transaction.category.clone(),
            title: transaction.title.clone(),
        })
        .collect();

    tracing::debug!(
        "{} expenses plotted for {selected_month} out of {} transactions",
        points.len(),
        transactions.len()
    );

    points
}

/// Sums expenses for each month of `selected_year`.
///
/// # Returns
/// Exactly twelve labels and twelve totals in calendar order. Months without
/// expenses total to zero.
pub fn monthly_expense_totals(transactions: &[Transaction], selected_year: i32) -> MonthlyTotals {
    let mut totals = [0.0; 12];

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.is_expense() && transaction.date.year() == selected_year)
    {
        let index = usize::from(u8::from(transaction.date.month())) - 1;
        totals[index] += transaction.amount;
    }

    MonthlyTotals {
        labels: MONTHS.into_iter().map(month_label).collect(),
        totals: totals.to_vec(),
    }
}

/// Sums expenses in `date_range` per category.
///
/// An inverted range matches nothing and yields empty totals.
///
/// # Returns
/// The categories in first-seen order with their totals and a colour from
/// [palette_color] for each.
pub fn category_totals(transactions: &[Transaction], date_range: DateRange) -> CategoryTotals {
    let mut labels: Vec<String> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.is_expense() && date_range.contains(transaction.date))
    {
        match labels.iter().position(|label| *label == transaction.category) {
            Some(index) => totals[index] += transaction.amount,
            None => {
                labels.push(transaction.category.clone());
                totals.push(transaction.amount);
            }
        }
    }

    let colors = (0..labels.len()).map(palette_color).collect();

    tracing::debug!("{} categories with expenses in {date_range}", labels.len());

    CategoryTotals {
        labels,
        totals,
        colors,
    }
}

/// Counts all transactions and totals income, expenses and the net balance.
///
/// No date filters apply.
pub fn summary_totals(transactions: &[Transaction]) -> SummaryTotals {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), transaction| {
                if transaction.is_credit() {
                    (income + transaction.amount, expense)
                } else {
                    (income, expense + transaction.amount)
                }
            });

    SummaryTotals {
        count: transactions.len(),
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}

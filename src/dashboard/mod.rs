//! Dashboard module
//!
//! Aggregates transactions into the chart datasets and renders the overview
//! page with its charts, filter controls and summary cards.

mod aggregation;
mod cards;
mod charts;
mod report;
mod view;

pub use aggregation::{
    CategoryTotals, MonthlyTotals, ScatterPoint, SummaryTotals, category_totals,
    daily_expense_scatter, monthly_expense_totals, summary_totals,
};
pub use report::{CategoryExpenses, DailyExpenses, DashboardReport, MonthlyExpenses};
pub use view::dashboard_page;

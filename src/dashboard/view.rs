//! HTML view for the dashboard page.
//!
//! The page holds three chart cards, each showing the filter value that drove
//! it, followed by the summary cards. A chart whose filter parameter was
//! invalid is replaced by an error alert so the user can correct the input.
//!
//! The page is static, so the filter controls are read-only. Filters are
//! chosen when the page is generated, see [FILTER_HINT].

use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    calendar::{MONTHS, YearMonth},
    dashboard::{
        cards::summary_cards_view,
        charts::{
            CATEGORY_CHART_ID, DAILY_EXPENSES_CHART_ID, DashboardChart, MONTHLY_EXPENSES_CHART_ID,
            category_chart, chart_container, charts_script, daily_expenses_chart,
            monthly_expenses_chart,
        },
        report::DashboardReport,
    },
    html::{
        CARD_HEADER_STYLE, CARD_STYLE, ECHARTS_URL, FORM_CONTROL_STYLE,
        FORM_LABEL_STYLE, HeadElement, PAGE_CONTAINER_STYLE, alert_error, base,
    },
};

/// Number of years offered in the year selector, counting back from today.
const YEAR_OPTIONS: i32 = 5;

/// Tells the reader how to change the filters of the generated page.
pub(super) const FILTER_HINT: &str = "Filters are applied when the dashboard is generated. \
    Run dashboard with --month YYYY-MM, --year YYYY, --from YYYY-MM-DD or --to YYYY-MM-DD \
    to change them.";

/// Renders the full dashboard page for `report`.
pub fn dashboard_page(report: &DashboardReport) -> Markup {
    let charts = build_dashboard_charts(report);

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-2xl font-bold mb-4" { "Expense Dashboard" }

            p id="filter-hint" class="mb-4 text-sm text-gray-600 dark:text-gray-400"
            {
                (FILTER_HINT)
            }

            form id="filters"
            {
                fieldset disabled
                {
                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
                    {
                        (daily_expenses_card(report))
                        (monthly_expenses_card(report))
                        (category_card(report))
                    }
                }
            }

            (summary_cards_view(&report.summary))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

/// Creates the charts whose datasets could be built.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(report: &DashboardReport) -> Vec<DashboardChart> {
    let mut charts = Vec::with_capacity(3);

    if let Ok(daily) = &report.daily_expenses {
        charts.push(DashboardChart::new(
            DAILY_EXPENSES_CHART_ID,
            &daily_expenses_chart(&daily.points, daily.month),
        ));
    }

    if let Ok(monthly) = &report.monthly_expenses {
        charts.push(DashboardChart::new(
            MONTHLY_EXPENSES_CHART_ID,
            &monthly_expenses_chart(&monthly.totals, monthly.year),
        ));
    }

    if let Ok(categories) = &report.category_expenses {
        charts.push(DashboardChart::new(
            CATEGORY_CHART_ID,
            &category_chart(&categories.totals, categories.date_range),
        ));
    }

    charts
}

fn daily_expenses_card(report: &DashboardReport) -> Markup {
    let selected = report.daily_expenses.as_ref().ok().map(|daily| daily.month);
    let year = selected.map_or(report.today.year(), YearMonth::year);
    let options: Vec<YearMonth> = MONTHS
        .into_iter()
        .map(|month| YearMonth::new(year, month))
        .collect();

    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_HEADER_STYLE)
            {
                h5 class="font-semibold" { "Expenses scattered over" }

                label for="month" class=(FORM_LABEL_STYLE) { "Month" }
                select id="month" name="month" class=(FORM_CONTROL_STYLE)
                {
                    @for year_month in &options {
                        option
                            value=(year_month)
                            selected[Some(*year_month) == selected]
                        {
                            "Month: " (year_month.label())
                        }
                    }
                }
            }

            div class="p-4"
            {
                (chart_or_alert(&report.daily_expenses, DAILY_EXPENSES_CHART_ID))
            }
        }
    }
}

fn monthly_expenses_card(report: &DashboardReport) -> Markup {
    let selected = report.monthly_expenses.as_ref().ok().map(|monthly| monthly.year);
    let years = year_options(report.today, selected);

    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_HEADER_STYLE)
            {
                h5 class="font-semibold" { "Your monthly expenditures in" }

                label for="year" class=(FORM_LABEL_STYLE) { "Year" }
                select id="year" name="year" class=(FORM_CONTROL_STYLE)
                {
                    @for year in &years {
                        option
                            value=(year)
                            selected[Some(*year) == selected]
                        {
                            "Year: " (year)
                        }
                    }
                }
            }

            div class="p-4"
            {
                (chart_or_alert(&report.monthly_expenses, MONTHLY_EXPENSES_CHART_ID))
            }
        }
    }
}

fn category_card(report: &DashboardReport) -> Markup {
    let range = report
        .category_expenses
        .as_ref()
        .ok()
        .map(|categories| categories.date_range);
    let from = range
        .map(|range| range.from.to_string())
        .unwrap_or_else(|| report.query.from.clone().unwrap_or_default());
    let to = range
        .map(|range| range.to.to_string())
        .unwrap_or_else(|| report.query.to.clone().unwrap_or_default());

    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_HEADER_STYLE)
            {
                h5 class="font-semibold" { "Expenditures per category" }

                div class="grid grid-cols-2 gap-2 items-end"
                {
                    div
                    {
                        label for="from" class=(FORM_LABEL_STYLE) { "From" }
                        input type="date" id="from" name="from" value=(from) class=(FORM_CONTROL_STYLE);
                    }

                    div
                    {
                        label for="to" class=(FORM_LABEL_STYLE) { "To" }
                        input type="date" id="to" name="to" value=(to) class=(FORM_CONTROL_STYLE);
                    }
                }
            }

            div class="p-4"
            {
                (chart_or_alert(&report.category_expenses, CATEGORY_CHART_ID))

                p class="text-center text-sm text-gray-500 mt-2" { "Spent per category" }
            }
        }
    }
}

/// The last [YEAR_OPTIONS] years up to today, plus `selected` if it is older
/// or newer than those.
fn year_options(today: Date, selected: Option<i32>) -> Vec<i32> {
    let current_year = today.year();
    let mut years: Vec<i32> = (0..YEAR_OPTIONS).map(|offset| current_year - offset).collect();

    if let Some(year) = selected.filter(|year| !years.contains(year)) {
        years.push(year);
        years.sort_unstable_by(|a, b| b.cmp(a));
    }

    years
}

fn chart_or_alert<T>(dataset: &Result<T, Error>, chart_id: &str) -> Markup {
    match dataset {
        Ok(_) => chart_container(chart_id),
        Err(Error::InvalidParameter { parameter, value }) => alert_error(
            &format!("Invalid {parameter}"),
            &format!(
                "\"{value}\" is not a valid {parameter}. Use the format {}.",
                parameter.expected_format()
            ),
        ),
        Err(error) => alert_error("Could not build chart", &error.to_string()),
    }
}

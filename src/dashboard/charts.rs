//! Chart generation and rendering for the dashboard.
//!
//! This module turns the aggregated datasets into ECharts configurations:
//! - **Daily Expenses Chart**: scatter plot of each expense in a month by day
//! - **Monthly Expenses Chart**: bar chart of total expenses for each month of a year
//! - **Category Chart**: doughnut chart of expenses per category in a date range
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color as ChartColor, ItemStyle,
        JsFunction, Label, Tooltip, Trigger,
    },
    series::{Bar, Pie, Scatter},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    calendar::{DateRange, YearMonth},
    dashboard::aggregation::{CategoryTotals, MonthlyTotals, ScatterPoint},
    html::HeadElement,
    palette::{BAR_COLOR, Color, SCATTER_COLOR},
};

/// HTML element ID of the daily expenses chart.
pub(super) const DAILY_EXPENSES_CHART_ID: &str = "daily-expenses-chart";
/// HTML element ID of the monthly expenses chart.
pub(super) const MONTHLY_EXPENSES_CHART_ID: &str = "monthly-expenses-chart";
/// HTML element ID of the category chart.
pub(super) const CATEGORY_CHART_ID: &str = "category-expenses-chart";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl DashboardChart {
    pub(super) fn new(id: &'static str, chart: &Chart) -> Self {
        Self {
            id,
            options: chart.to_string(),
        }
    }
}

/// Renders the HTML container for a dashboard chart.
pub(super) fn chart_container(id: &str) -> Markup {
    html!(
        div
            id=(id)
            class="min-h-[300px] rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
///
/// # Arguments
/// * `charts` - The charts to generate initialization scripts for
///
/// # Returns
/// HeadElement containing the initialization JavaScript.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Plots each expense as `[day, amount, index]`, where `index` looks up the
/// point's category and title in the tooltip.
pub(super) fn daily_expenses_chart(points: &[ScatterPoint], month: YearMonth) -> Chart {
    let data: Vec<Vec<f64>> = points
        .iter()
        .enumerate()
        .map(|(index, point)| vec![f64::from(point.day), point.amount, index as f64])
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expenses scattered over")
                .subtext(month.label()),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter(scatter_tooltip_formatter(points)),
        )
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Day of Month"),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Amount")
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Scatter::new()
                .name("Expenses")
                .symbol_size(12)
                .item_style(ItemStyle::new().color(chart_color(SCATTER_COLOR)))
                .data(data),
        )
}

pub(super) fn monthly_expenses_chart(monthly_totals: &MonthlyTotals, year: i32) -> Chart {
    Chart::new()
        .title(
            Title::new()
                .text("Your monthly expenditures")
                .subtext(year.to_string()),
        )
        .tooltip(currency_tooltip())
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(monthly_totals.labels.clone()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Monthly Expenses")
                .item_style(
                    ItemStyle::new()
                        .color(chart_color(BAR_COLOR))
                        .border_color(chart_color(BAR_COLOR.opaque()))
                        .border_width(1),
                )
                .data(monthly_totals.totals.clone()),
        )
}

pub(super) fn category_chart(category_totals: &CategoryTotals, date_range: DateRange) -> Chart {
    let data: Vec<(f64, &str)> = category_totals
        .totals
        .iter()
        .zip(&category_totals.labels)
        .map(|(total, label)| (*total, label.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expenditures per category")
                .subtext(date_range.to_string()),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%"))
        .color(category_totals.colors.iter().copied().map(chart_color).collect())
        .series(
            Pie::new()
                .name("Spent per category")
                .radius(vec!["40%", "70%"])
                .avoid_label_overlap(true)
                .item_style(
                    ItemStyle::new()
                        .border_color("#fff")
                        .border_width(2),
                )
                .label(Label::new().show(false))
                .data(data),
        )
}

fn chart_color(color: Color) -> ChartColor {
    ChartColor::from(color.to_string().as_str())
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Shows the amount, day, category and title of a scatter point,
/// e.g. "₹100.00 on day 5 - Food (Lunch)".
fn scatter_tooltip_formatter(points: &[ScatterPoint]) -> JsFunction {
    let labels: Vec<[&str; 2]> = points
        .iter()
        .map(|point| [point.category.as_str(), point.title.as_str()])
        .collect();
    // The labels end up inside a <script> element.
    let labels = serde_json::to_string(&labels)
        .unwrap_or_else(|_| "[]".to_owned())
        .replace("</", "<\\/");

    JsFunction::new_with_args(
        "params",
        &format!(
            "const currencyFormatter = new Intl.NumberFormat('en-IN', {{
              style: 'currency',
              currency: 'INR'
            }});
            const labels = {labels};
            const [day, amount, index] = params.value;
            const [category, title] = labels[index] || ['', ''];
            return currencyFormatter.format(amount) + ' on day ' + day
                + ' - ' + category + ' (' + title + ')';"
        ),
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

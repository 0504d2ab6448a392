//! Summary cards shown beneath the dashboard charts.
//!
//! Four cards display the totals over every supplied transaction:
//! - Total number of transactions
//! - Total income
//! - Total expenses
//! - Net balance, coloured by sign

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::SummaryTotals,
    html::{AMOUNT_NEGATIVE_STYLE, AMOUNT_POSITIVE_STYLE, format_currency},
};

const COUNT_STYLE: &str = "text-blue-600 dark:text-blue-400";

/// Gets the CSS class for the net balance (green when not negative, red otherwise).
fn balance_color_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        AMOUNT_POSITIVE_STYLE
    } else {
        AMOUNT_NEGATIVE_STYLE
    }
}

/// Renders the row of summary cards.
pub(super) fn summary_cards_view(summary: &SummaryTotals) -> Markup {
    html! {
        section id="summary" class="w-full mx-auto mt-4" {
            div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4" {
                (summary_card("Total Transactions", &summary.count.to_string(), COUNT_STYLE))
                (summary_card(
                    "Total Income",
                    &format_currency(summary.total_income),
                    AMOUNT_POSITIVE_STYLE,
                ))
                (summary_card(
                    "Total Expenses",
                    &format_currency(summary.total_expense),
                    AMOUNT_NEGATIVE_STYLE,
                ))
                (summary_card(
                    "Net Balance",
                    &format_currency(summary.net_balance),
                    balance_color_class(summary.net_balance),
                ))
            }
        }
    }
}

fn summary_card(title: &str, value: &str, value_style: &str) -> Markup {
    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md text-center"
            aria-label=(format!("{title}: {value}"))
        {
            h6 class="text-sm font-semibold text-gray-600 dark:text-gray-400 mb-2" {
                (title)
            }
            h4 class={"text-2xl font-bold " (value_style)} {
                (value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        dashboard::aggregation::SummaryTotals,
        html::{AMOUNT_NEGATIVE_STYLE, AMOUNT_POSITIVE_STYLE},
    };

    use super::{balance_color_class, summary_cards_view};

    fn card_values(summary: &SummaryTotals) -> Vec<(String, String)> {
        let html = Html::parse_fragment(&summary_cards_view(summary).into_string());
        let card_selector = Selector::parse("section#summary > div > div").unwrap();
        let title_selector = Selector::parse("h6").unwrap();
        let value_selector = Selector::parse("h4").unwrap();

        html.select(&card_selector)
            .map(|card| {
                let title: String = card.select(&title_selector).next().unwrap().text().collect();
                let value: String = card.select(&value_selector).next().unwrap().text().collect();
                (title, value)
            })
            .collect()
    }

    #[test]
    fn renders_four_cards() {
        let summary = SummaryTotals {
            count: 3,
            total_income: 5000.0,
            total_expense: 150.0,
            net_balance: 4850.0,
        };

        let cards = card_values(&summary);

        let titles: Vec<_> = cards.iter().map(|(title, _)| title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total Transactions", "Total Income", "Total Expenses", "Net Balance"]
        );
        assert_eq!(cards[0].1, "3");
        assert!(cards[1].1.starts_with("₹"));
    }

    #[test]
    fn net_balance_colour_follows_sign() {
        assert_eq!(balance_color_class(0.0), AMOUNT_POSITIVE_STYLE);
        assert_eq!(balance_color_class(12.0), AMOUNT_POSITIVE_STYLE);
        assert_eq!(balance_color_class(-0.01), AMOUNT_NEGATIVE_STYLE);
    }

    #[test]
    fn renders_zero_summary() {
        let cards = card_values(&SummaryTotals::default());

        assert_eq!(cards[0].1, "0");
        assert_eq!(cards[3].1, "₹0.00");
    }
}

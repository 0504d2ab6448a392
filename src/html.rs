use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// The currency sign shown in front of every amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// ECharts build loaded by the dashboard page.
pub const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

// Card styles
pub const CARD_STYLE: &str = "h-full bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg shadow-md";
pub const CARD_HEADER_STYLE: &str = "px-4 py-3 rounded-t-lg bg-gray-900 text-white";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-gray-100";
pub const FORM_CONTROL_STYLE: &str = "block w-full p-1.5 rounded text-sm \
    text-gray-900 bg-gray-50 border border-gray-300 focus:ring-blue-600 \
    focus:border-blue-600";

// Amount colours
pub const AMOUNT_POSITIVE_STYLE: &str = "text-green-600 dark:text-green-400";
pub const AMOUNT_NEGATIVE_STYLE: &str = "text-red-600 dark:text-red-400";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-screen-xl text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Dashboard" }
                script src="https://cdn.tailwindcss.com" {}

                style
                {
                    r#"
                    .echarts-tooltip {
                        z-index: 30 !important;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// An inline error box shown in place of content that could not be built.
pub fn alert_error(message: &str, details: &str) -> Markup {
    html! {
        div
            role="alert"
            class="p-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
        {
            p class="font-semibold" { (message) }
            @if !details.is_empty() {
                p { (details) }
            }
        }
    }
}

pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency(&format!("-{CURRENCY_SYMBOL}"))
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    let formatted = if number < 0.0 {
        negative_fmt.as_ref().map(|fmt| fmt.fmt_string(number.abs()))
    } else if number > 0.0 {
        positive_fmt.as_ref().map(|fmt| fmt.fmt_string(number))
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        Some(format!("{CURRENCY_SYMBOL}0.00"))
    };

    let mut formatted_string =
        formatted.unwrap_or_else(|| format!("{CURRENCY_SYMBOL}{number:.2}"));

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    let bytes = formatted_string.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

use maud::Markup;
use scraper::Html;

pub(crate) fn parse_html_document(markup: Markup) -> Html {
    Html::parse_document(&markup.into_string())
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

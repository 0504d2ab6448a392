#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod sample_data;

pub(crate) use form::{assert_form_input_with_value, assert_selected_option, must_get_form};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use sample_data::SampleData;

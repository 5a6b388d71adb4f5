#![allow(missing_docs)]

mod backend;
mod form;
mod html;
mod http;

pub(crate) use backend::{FakeBackend, RecordedCall};
pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::{
    assert_api_error_trigger, assert_content_type, assert_no_reload, get_header,
};

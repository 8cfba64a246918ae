// File: src/response.rs
// Purpose: Content negotiation and response helpers for form handlers

use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use signup::FormState;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}

/// HTMX requests get fragments instead of whole pages
pub fn is_htmx(headers: &HeaderMap) -> bool {
    header(headers, "hx-request").is_some()
}

pub fn accepts_json(headers: &HeaderMap) -> bool {
    header(headers, "accept")
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

pub fn markup(markup: maud::Markup) -> Response {
    Html(markup.into_string()).into_response()
}

/// JSON projection of the form state
pub fn state_json(state: &FormState) -> Response {
    Json(state.view()).into_response()
}

pub fn error_response(status: StatusCode, title: &str, message: &str) -> Response {
    let page = maud::html! {
        (maud::DOCTYPE)
        html {
            head { title { (title) } }
            body {
                h1 { (status.as_u16()) " " (title) }
                p { (message) }
                a href="/" { "Go Home" }
            }
        }
    };
    (status, Html(page.into_string())).into_response()
}

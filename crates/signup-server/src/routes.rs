// File: src/routes.rs
// Purpose: HTTP routes; each request becomes exactly one form event

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use signup::{presenter, Field, FormEvent, FormState};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::form_data::FormData;
use crate::response::{accepts_json, error_response, is_htmx, markup, state_json};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    form: Arc<RwLock<FormState>>,
    title: Arc<str>,
}

impl AppState {
    pub fn new(form: FormState, title: &str) -> Self {
        Self {
            form: Arc::new(RwLock::new(form)),
            title: Arc::from(title),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/state", get(state_handler))
        .route("/fields/:field/change", post(change_handler))
        .route("/fields/:field/blur", post(blur_handler))
        .route("/submit", post(submit_handler))
        .route("/reset", post(reset_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let form = state.form.read().await;
    if accepts_json(&headers) {
        return state_json(&form);
    }
    markup(presenter::render_page(&state.title, &form))
}

async fn state_handler(State(state): State<AppState>) -> Response {
    state_json(&*state.form.read().await)
}

fn parse_field(name: &str) -> Result<Field, Response> {
    name.parse::<Field>().map_err(|e| {
        debug!("{}", e);
        error_response(StatusCode::NOT_FOUND, "Unknown Field", &e.to_string())
    })
}

/// Response to a per-field event: helper texts as out-of-band swaps.
fn field_event_response(headers: &HeaderMap, form: &FormState) -> Response {
    if accepts_json(headers) {
        state_json(form)
    } else {
        markup(presenter::render_helpers_oob(form))
    }
}

/// Response to a whole-form event: the section for HTMX, else the page.
fn form_event_response(state: &AppState, headers: &HeaderMap, form: &FormState) -> Response {
    if accepts_json(headers) {
        state_json(form)
    } else if is_htmx(headers) {
        markup(presenter::render_section(form))
    } else {
        markup(presenter::render_page(&state.title, form))
    }
}

async fn change_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let field = match parse_field(&name) {
        Ok(field) => field,
        Err(response) => return response,
    };

    let data = FormData::from_body(&headers, &body);
    let value = field_value(&data, field).cloned().unwrap_or_default();

    let mut form = state.form.write().await;
    form.apply(FormEvent::Change { field, value });
    field_event_response(&headers, &form)
}

/// HTMX posts the input under its own name; plain clients may send `value`.
fn field_value(data: &FormData, field: Field) -> Option<&String> {
    data.get(field.name()).or_else(|| data.get("value"))
}

async fn blur_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let field = match parse_field(&name) {
        Ok(field) => field,
        Err(response) => return response,
    };

    let data = FormData::from_body(&headers, &body);
    let mut form = state.form.write().await;

    // A value carried by the blur wins over a debounced change still in flight
    if let Some(value) = field_value(&data, field) {
        if form.value(field) != value.as_str() {
            debug!(field = field.name(), "blur carried a newer value");
            form.apply(FormEvent::Change {
                field,
                value: value.clone(),
            });
        }
    }
    form.apply(FormEvent::Blur(field));
    field_event_response(&headers, &form)
}

async fn submit_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let data = FormData::from_body(&headers, &body);

    let mut form = state.form.write().await;

    // The submitted body carries the values the user sees; fields it omits
    // keep their current value.
    for field in Field::ALL {
        if let Some(value) = data.get(field.name()) {
            form.on_change(field, value.as_str());
        }
    }

    if let Some(outcome) = form.apply(FormEvent::Submit) {
        debug!(accepted = outcome.is_accepted(), "submit handled");
    }
    form_event_response(&state, &headers, &form)
}

async fn reset_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut form = state.form.write().await;
    form.apply(FormEvent::Reset);
    form_event_response(&state, &headers, &form)
}

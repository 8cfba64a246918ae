// File: src/presenter.rs
// Purpose: Maud rendering of the registration form; a pure projection of FormState

use crate::field::Field;
use crate::form::Snapshot;
use crate::state::FormState;
use maud::{html, Markup, DOCTYPE};

/// Id of the element that wraps results and form; HTMX swaps replace it whole.
pub const SECTION_ID: &str = "register";

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.3";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 32rem; margin: 2rem auto; padding: 0 1rem; }
.field { display: flex; flex-direction: column; margin: 1rem 0; }
.field input { padding: .5rem; border: 1px solid #999; border-radius: 4px; }
.field.error input { border-color: #d32f2f; }
.helper { min-height: 1.2em; margin: .25rem 0 0; font-size: .85rem; color: #d32f2f; }
.actions { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.results { list-style: none; padding: 0; }
"#;

fn helper_id(field: Field) -> String {
    format!("{}-helper", field.name())
}

/// Full HTML document
pub fn render_page(title: &str, state: &FormState) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(HTMX_SRC) {}
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                (render_section(state))
            }
        }
    }
}

/// Heading, results list (after a successful submit) and the form.
pub fn render_section(state: &FormState) -> Markup {
    html! {
        section id=(SECTION_ID) {
            h3 { "Register form" }
            @if let Some(snapshot) = state.snapshot() {
                (render_results(snapshot))
            }
            (render_form(state))
        }
    }
}

/// Echo of the snapshot. Values are shown verbatim, passwords included.
pub fn render_results(snapshot: &Snapshot) -> Markup {
    html! {
        div {
            ul.results {
                @for field in Field::ALL {
                    li {
                        b { (field.label()) ":" }
                        (maud::PreEscaped("&nbsp;"))
                        span { (snapshot.get(field)) }
                    }
                }
            }
        }
    }
}

pub fn render_form(state: &FormState) -> Markup {
    let target = format!("#{}", SECTION_ID);
    html! {
        form method="post" action="/submit" novalidate
            hx-post="/submit" hx-target=(target) hx-swap="outerHTML" hx-sync="this:queue all" {
            @for field in Field::ALL {
                (render_field(state, field))
            }
            div.actions {
                button type="submit" { "Submit" }
                button type="button"
                    hx-post="/reset" hx-target=(target) hx-swap="outerHTML" { "Reset" }
            }
        }
    }
}

/// Label, input and helper text for one field.
pub fn render_field(state: &FormState, field: Field) -> Markup {
    let error = state.visible_error(field);
    let change_url = format!("/fields/{}/change", field.name());
    // Blur carries the current value so it cannot overtake a pending change
    let blur = format!(
        "htmx.ajax('POST', '/fields/{name}/blur', {{source: this, swap: 'none', values: {{'{name}': this.value}}}})",
        name = field.name()
    );

    html! {
        div.field.error[error.is_some()] {
            label for=(field.name()) { (field.label()) }
            input id=(field.name()) name=(field.name()) type=(field.input_type())
                value=(state.value(field))
                aria-invalid=(if error.is_some() { "true" } else { "false" })
                aria-describedby=(helper_id(field))
                hx-post=(change_url) hx-trigger="input changed delay:200ms" hx-swap="none"
                hx-sync="closest form:queue all"
                hx-on-blur=(blur);
            (render_helper(field, error.as_deref(), false))
        }
    }
}

/// Helper text under a field. With `oob` set it carries `hx-swap-oob` so it
/// can ride along in a response aimed elsewhere.
pub fn render_helper(field: Field, message: Option<&str>, oob: bool) -> Markup {
    html! {
        p.helper id=(helper_id(field)) hx-swap-oob=[oob.then_some("true")] {
            @if let Some(message) = message {
                (message)
            }
        }
    }
}

/// Helper texts for every field as out-of-band swaps.
///
/// A change to one field can alter another field's error (password and its
/// confirmation), so all four are sent.
pub fn render_helpers_oob(state: &FormState) -> Markup {
    html! {
        @for field in Field::ALL {
            (render_helper(field, state.visible_error(field).as_deref(), true))
        }
    }
}

//! Renders a small login form to stdout with string "widgets".
//!
//! Shows the full wiring: an ambient registry installed once, a declaration
//! parsed from JSON, a custom render item appended by the host, and binders
//! reading value/error state from a `MemoryFormState`.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use serde_json::json;

use formui::prelude::*;

type SharedState = Rc<RefCell<MemoryFormState>>;

fn main() -> Result<()> {
    let state: SharedState = Rc::new(RefCell::new(
        MemoryFormState::new().with_value("email", json!("ada@lovelace.example")),
    ));
    state.borrow_mut().set_error("password", "password is required");

    let _scope = scope::install(build_registry(Rc::clone(&state)));

    let document = json!([
        {"name": "email", "input": "text", "props": {"label": "Email"}},
        {"name": "password", "input": "text", "props": {"label": "Password", "secret": true}},
        [
            {"name": "remember", "input": "checkbox", "props": {"label": "Remember me"}},
            {"name": "otp", "input": "text", "props": {"label": "One-time code"}}
        ]
    ]);
    let mut entries = parse_entries(&document)?;
    entries.push(FormItem::custom(|| "[ Sign in ]".to_string()).into());

    let renderer = FormRenderer::new(String::new)
        .with_row_wrapper(|columns| columns.join("    "));
    for line in renderer.render(&entries) {
        println!("{line}");
    }
    Ok(())
}

fn build_registry(state: SharedState) -> InputRegistry<String> {
    let text_state = Rc::clone(&state);
    InputRegistry::new()
        .with("text", move |request: BindRequest<'_>| {
            let state = text_state.borrow();
            let label = label_for(&request);
            let secret = request
                .props
                .get("secret")
                .and_then(|secret| secret.as_bool())
                .unwrap_or(false);
            let value = state
                .value(request.name)
                .and_then(|value| value.as_str())
                .unwrap_or("");
            let shown = if secret {
                "*".repeat(value.len())
            } else {
                value.to_string()
            };
            let mut line = format!("{label}: [{shown:<24}]");
            if let Some(next) = request.next_name {
                line.push_str(&format!("  (enter -> {next})"));
            }
            if let Some(message) = state.error(request.name) {
                line.push_str(&format!("  !! {message}"));
            }
            line
        })
        .with("checkbox", move |request: BindRequest<'_>| {
            let state = state.borrow();
            let checked = state
                .value(request.name)
                .and_then(|value| value.as_bool())
                .unwrap_or(false);
            let mark = if checked { "x" } else { " " };
            format!("[{mark}] {}", label_for(&request))
        })
}

fn label_for(request: &BindRequest<'_>) -> String {
    request
        .props
        .get("label")
        .and_then(|label| label.as_str())
        .unwrap_or(request.name)
        .to_string()
}

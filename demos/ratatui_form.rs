//! Binds the registry to ratatui text lines, playing the role a design
//! system fills in a real host: the element type is `Line<'static>` and each
//! binder builds styled spans.

use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use serde_json::json;

use formui::prelude::*;

fn main() -> Result<()> {
    let registry: InputRegistry<Line<'static>> = InputRegistry::new()
        .with("text", text_line)
        .with("checkbox", checkbox_line);
    let _scope = scope::install(registry);

    let document = json!([
        {"name": "title", "input": "text", "props": {"label": "Title"}},
        [
            {"name": "author", "input": "text", "props": {"label": "Author"}},
            {"name": "year", "input": "text", "props": {"label": "Year"}}
        ],
        {"name": "draft", "input": "checkbox", "props": {"label": "Draft"}}
    ]);
    let entries = parse_entries::<Line<'static>>(&document)?;

    let renderer = FormRenderer::new(Line::default).with_row_wrapper(|columns| {
        let mut spans = Vec::new();
        for (index, column) in columns.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("   "));
            }
            spans.extend(column.spans);
        }
        Line::from(spans)
    });

    for line in renderer.render(&entries) {
        let mut text = String::new();
        for span in &line.spans {
            text.push_str(&span.content);
        }
        println!("{text}");
    }
    Ok(())
}

fn text_line(request: BindRequest<'_>) -> Line<'static> {
    let label = label_for(&request);
    let mut spans = vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": "),
        Span::styled("____________", Style::default().fg(Color::DarkGray)),
    ];
    if let Some(next) = request.next_name {
        spans.push(Span::styled(
            format!("  (enter -> {next})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn checkbox_line(request: BindRequest<'_>) -> Line<'static> {
    Line::from(vec![
        Span::raw("[ ] "),
        Span::styled(label_for(&request), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn label_for(request: &BindRequest<'_>) -> String {
    request
        .props
        .get("label")
        .and_then(|label| label.as_str())
        .unwrap_or(request.name)
        .to_string()
}

//! Markup for the browser page
//!
//! Every dynamic value passes through [`escape`]; record fields come from
//! the service and are never trusted as markup.

use std::fmt::Write;

use super::{Card, ListView, Section, SelectOption};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_list(section: Section, view: &ListView) -> String {
    match view {
        ListView::Loading(message) => format!(r#"<div class="loading">{}</div>"#, escape(message)),
        ListView::Empty(message) => format!(r#"<div class="empty">{}</div>"#, escape(message)),
        ListView::Error(message) => format!(r#"<div class="error">{}</div>"#, escape(message)),
        ListView::Cards(cards) => cards.iter().map(|card| render_card(section, card)).collect(),
    }
}

pub fn render_card(section: Section, card: &Card) -> String {
    let mut html = String::from(r#"<div class="data-card">"#);
    let _ = write!(html, "<h3>{}</h3>", escape(&card.title));
    for field in &card.fields {
        let _ = write!(
            html,
            "<p><strong>{}:</strong> {}</p>",
            escape(field.label),
            escape(&field.value)
        );
    }
    if let Some(id) = card.id {
        let _ = write!(
            html,
            concat!(
                r#"<div class="actions">"#,
                r#"<button data-action="edit" data-section="{section}" data-id="{id}" class="btn btn-primary">Edit</button>"#,
                r#"<button data-action="delete" data-section="{section}" data-id="{id}" class="btn btn-danger">Delete</button>"#,
                "</div>"
            ),
            section = section.dom_id(),
            id = id
        );
    }
    html.push_str("</div>");
    html
}

/// Placeholder option (empty value) followed by `options`.
pub fn render_options(placeholder: &str, options: &[SelectOption]) -> String {
    let mut html = format!(r#"<option value="">{}</option>"#, escape(placeholder));
    for option in options {
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            escape(&option.value),
            escape(&option.label)
        );
    }
    html
}

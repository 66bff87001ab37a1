//! HTML writer that tags editable content with field paths.
//!
//! Editable text is emitted as `<span data-editable="PATH">…</span>`.
//! Interactive elements carry `data-editable-href="PATH"` for their
//! destination and an editable label span, so an editing surface can edit
//! the label and the destination independently.

use serde::Serialize;
use serde_json::Value;

use crate::config::SectionKind;
use crate::field_path::{FieldPath, FieldRole};

use super::RenderedSection;

/// One editable value found in the rendered output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditableField {
    pub path: FieldPath,
    pub role: FieldRole,
    pub value: Value,
}

/// An interactive element bound to a navigation target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub label_path: FieldPath,
    pub href_path: FieldPath,
    /// `None` when the configured destination is not a string
    pub destination: Option<String>,
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Text shown for a leaf. Records and sequences show nothing.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Loose truthiness for presentation flags: `false`, `null`, `0`, `""` are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Accumulates markup plus the editable fields and actions it contains
#[derive(Debug, Default)]
pub struct Markup {
    html: String,
    depth: usize,
    fields: Vec<EditableField>,
    actions: Vec<Action>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.html.push_str("  ");
        }
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.html.push(' ');
            self.html.push_str(name);
            self.html.push_str("=\"");
            self.html.push_str(&escape_html(value));
            self.html.push('"');
        }
    }

    /// Open an element on its own line
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.html.push('<');
        self.html.push_str(tag);
        self.write_attrs(attrs);
        self.html.push_str(">\n");
        self.depth += 1;
    }

    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push_str(">\n");
    }

    /// Element with plain, non-editable text content
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.indent();
        self.html.push('<');
        self.html.push_str(tag);
        self.write_attrs(attrs);
        self.html.push('>');
        self.html.push_str(&escape_html(text));
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push_str(">\n");
    }

    /// Decorative icon from the presentation layer
    pub fn icon(&mut self, name: &str) {
        self.element("i", &[("data-icon", name), ("aria-hidden", "true")], "");
    }

    fn editable_span(&mut self, path: &FieldPath, value: &Value) -> String {
        let path_str = path.to_string();
        self.fields.push(EditableField {
            path: path.clone(),
            role: FieldRole::Text,
            value: value.clone(),
        });
        format!(
            "<span data-editable=\"{}\">{}</span>",
            escape_html(&path_str),
            escape_html(&display_text(value))
        )
    }

    /// `<tag><span data-editable="path">value</span></tag>`
    pub fn editable(&mut self, tag: &str, attrs: &[(&str, &str)], path: &FieldPath, value: &Value) {
        let span = self.editable_span(path, value);
        self.indent();
        self.html.push('<');
        self.html.push_str(tag);
        self.write_attrs(attrs);
        self.html.push('>');
        self.html.push_str(&span);
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push_str(">\n");
    }

    /// Button whose label and destination are separately editable.
    ///
    /// The button is always emitted. A missing label renders empty and a
    /// missing destination gives an action that navigates nowhere; neither
    /// is recorded as an editable field.
    pub fn action_button(
        &mut self,
        attrs: &[(&str, &str)],
        label: (&FieldPath, Option<&Value>),
        href: (&FieldPath, Option<&Value>),
        trailing_icon: Option<&str>,
    ) {
        let (label_path, label_value) = label;
        let (href_path, href_value) = href;

        if let Some(value) = href_value {
            self.fields.push(EditableField {
                path: href_path.clone(),
                role: FieldRole::Href,
                value: value.clone(),
            });
        }
        self.actions.push(Action {
            label_path: label_path.clone(),
            href_path: href_path.clone(),
            destination: href_value.and_then(Value::as_str).map(str::to_string),
        });

        let href_path_str = href_path.to_string();
        let href_text = href_value.map(display_text).unwrap_or_default();
        let mut button_attrs: Vec<(&str, &str)> = vec![("type", "button")];
        button_attrs.extend_from_slice(attrs);
        if href_value.is_some() {
            button_attrs.push(("data-editable-href", &href_path_str));
        }
        button_attrs.push(("data-href", &href_text));

        self.open("button", &button_attrs);
        let span = match label_value {
            Some(value) => self.editable_span(label_path, value),
            None => "<span></span>".to_string(),
        };
        self.indent();
        self.html.push_str(&span);
        self.html.push('\n');
        if let Some(name) = trailing_icon {
            self.icon(name);
        }
        self.close("button");
    }

    pub fn finish(self, kind: SectionKind) -> RenderedSection {
        RenderedSection {
            kind,
            html: self.html,
            fields: self.fields,
            actions: self.actions,
        }
    }
}

//! Rendered cells: what a column shows for one record.

use littlegrid_format::{CellFormatter, DisplayMode};
use serde::Serialize;
use serde_json::Value;

use crate::column::{Column, ColumnKind, Label};
use crate::record::Record;

/// Renderer-ready content of one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cell {
    /// The expand/collapse toggle of a detail grid.
    ExpandToggle,
    /// Formatted text.
    Text { text: String },
    /// A button linking to `href`.
    Button { label: String, href: String },
    /// Text or a button that runs a registered action.
    Action {
        text: String,
        action: String,
        button: bool,
    },
    /// Raw markup, untouched.
    Markup { html: String },
    /// A renderer-owned template.
    Template { name: String },
}

impl Cell {
    /// The visible text, for cells that have one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text { text } | Cell::Action { text, .. } => Some(text),
            Cell::Button { label, .. } => Some(label),
            _ => None,
        }
    }
}

impl Column {
    /// Format a raw value with this column's display mode.
    ///
    /// Columns without a display mode (buttons, templates) format as plain.
    pub fn format(&self, value: &Value, formatter: &CellFormatter) -> String {
        let mode = self.display_mode().cloned().unwrap_or_default();
        formatter.format(&mode, value)
    }

    /// Render this column's cell for one record.
    ///
    /// ```rust
    /// use littlegrid::{Cell, CellFormatter, ColumnDef, Record, normalize};
    ///
    /// let columns = normalize(
    ///     vec![
    ///         ColumnDef::field("Salary", "salary").money(),
    ///         ColumnDef::field("Action", "Load User").button().href("/loadUser/{userId}"),
    ///     ],
    ///     false,
    /// );
    /// let record = Record::new().with("salary", "100").with("userId", 7);
    /// let formatter = CellFormatter::default();
    ///
    /// assert_eq!(
    ///     columns[0].render_cell(&record, &formatter),
    ///     Cell::Text { text: "R 100.00".into() }
    /// );
    /// assert_eq!(
    ///     columns[1].render_cell(&record, &formatter),
    ///     Cell::Button { label: "Load User".into(), href: "/loadUser/7".into() }
    /// );
    /// ```
    pub fn render_cell(&self, record: &Record, formatter: &CellFormatter) -> Cell {
        match self.kind() {
            ColumnKind::ExpandToggle => Cell::ExpandToggle,
            // Links only take effect on buttons.
            ColumnKind::Value { source, display } | ColumnKind::Link { source, display, .. } => {
                Cell::Text {
                    text: formatter.format(display, &source.read(record)),
                }
            }
            ColumnKind::ActionLink {
                source,
                display,
                action,
            } => Cell::Action {
                text: formatter.format(display, &source.read(record)),
                action: action.clone(),
                button: false,
            },
            ColumnKind::LinkButton { label, href } => Cell::Button {
                label: label_text(label, record, formatter),
                href: href.resolve(record),
            },
            ColumnKind::ActionButton { label, action } => Cell::Action {
                text: label_text(label, record, formatter),
                action: action.clone(),
                button: true,
            },
            ColumnKind::RowTemplate(html) => Cell::Markup { html: html.clone() },
            ColumnKind::CustomTemplate(template) => Cell::Template {
                name: template.name.clone(),
            },
        }
    }
}

/// Literal labels are shown as written; derived labels go through the
/// formatter like any other value.
fn label_text(label: &Label, record: &Record, formatter: &CellFormatter) -> String {
    match label {
        Label::Text(text) => text.clone(),
        Label::Derived(_) => formatter.format(&DisplayMode::Plain, &label.read(record)),
    }
}

//! Column normalization: fill defaults and resolve each column's kind.

use littlegrid_format::DisplayMode;

use super::def::ColumnDef;
use super::types::{Column, ColumnKind, Href, Label};

/// Normalize raw column definitions.
///
/// Missing headers and widths become `""`, a missing button flag means
/// "not a button", and link templates have their `{placeholder}` extracted.
/// With `detail_enabled` an expand-toggle column is prepended. Nothing here
/// fails: incomplete definitions degrade to plain value columns.
///
/// ```rust
/// use littlegrid::{normalize, ColumnDef};
///
/// let columns = normalize(vec![ColumnDef::new().href("/user/{id}")], false);
/// assert_eq!(columns[0].href(), Some("/user/"));
/// assert_eq!(columns[0].href_placeholder_field(), Some("id"));
///
/// let columns = normalize(vec![ColumnDef::field("Name", "name")], true);
/// assert_eq!(columns.len(), 2);
/// assert!(columns[0].is_expand_button());
/// assert!(!columns[1].is_expand_button());
/// ```
pub fn normalize(columns: Vec<ColumnDef>, detail_enabled: bool) -> Vec<Column> {
    let mut normalized = Vec::with_capacity(columns.len() + usize::from(detail_enabled));
    if detail_enabled {
        normalized.push(Column::expand_toggle());
    }
    normalized.extend(columns.into_iter().map(Column::from));
    normalized
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        let kind = resolve_kind(&def);
        Column {
            header_text: def.header_text.unwrap_or_default(),
            width: def.width.unwrap_or_default(),
            kind,
            colour_rule: def.colour_rule,
        }
    }
}

/// Kind precedence: templates, then buttons (href before action), then
/// links (action before href), then plain values.
fn resolve_kind(def: &ColumnDef) -> ColumnKind {
    if let Some(template) = &def.custom_template {
        return ColumnKind::CustomTemplate(template.clone());
    }
    if let Some(html) = &def.row_template {
        return ColumnKind::RowTemplate(html.clone());
    }

    let source = def.row_field.clone().unwrap_or_default();
    let href = def.href.as_deref().map(Href::parse);
    let action = def.action_name.clone();

    if def.is_button.unwrap_or(false) {
        return match (href, action) {
            (Some(href), _) => ColumnKind::LinkButton {
                label: Label::from(source),
                href,
            },
            (None, Some(action)) => ColumnKind::ActionButton {
                label: Label::from(source),
                action,
            },
            (None, None) => ColumnKind::Value {
                source,
                display: display_mode(def),
            },
        };
    }

    let display = display_mode(def);
    match (action, href) {
        (Some(action), _) => ColumnKind::ActionLink {
            source,
            display,
            action,
        },
        (None, Some(href)) => ColumnKind::Link {
            source,
            display,
            href,
        },
        (None, None) => ColumnKind::Value { source, display },
    }
}

fn display_mode(def: &ColumnDef) -> DisplayMode {
    DisplayMode::from_flags(
        def.is_money,
        def.source_date_format.as_deref(),
        def.display_date_format.as_deref(),
    )
}

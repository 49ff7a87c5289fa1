//! Normalized columns.
//!
//! A [`Column`] is what a renderer consumes. Its [`ColumnKind`] fixes how
//! the cell is drawn, so combinations the flat configuration allows but no
//! renderer can honour (a button that is both a link and an action, a date
//! pattern without its pair) cannot be represented.

use littlegrid_format::{display_string, DisplayMode};
use serde_json::Value;

use super::def::{ColourRule, Derive, RowField, TemplateRef};
use crate::record::Record;

/// A link target with an optional per-row placeholder.
///
/// `"/user/{id}"` parses into `href == "/user/"` and
/// `placeholder_field == "id"`. The placeholder value is read from each
/// record when the link is resolved.
///
/// ```rust
/// use littlegrid::{Href, Record};
///
/// let href = Href::parse("/user/{id}");
/// assert_eq!(href.href(), "/user/");
/// assert_eq!(href.placeholder_field(), "id");
///
/// let record = Record::new().with("id", 42);
/// assert_eq!(href.resolve(&record), "/user/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Href {
    href: String,
    placeholder_field: String,
    insert_at: usize,
}

impl Href {
    /// Parse a link template.
    ///
    /// The placeholder spans the first `{` and the first `}` after it. The
    /// whole `{token}` segment is removed from the link. Without such a
    /// segment the template is kept as-is and the placeholder is empty.
    pub fn parse(template: &str) -> Self {
        let token = template.find('{').and_then(|open| {
            template[open + 1..]
                .find('}')
                .map(|rel| (open, open + 1 + rel))
        });

        match token {
            Some((open, close)) => Href {
                href: format!("{}{}", &template[..open], &template[close + 1..]),
                placeholder_field: template[open + 1..close].to_string(),
                insert_at: open,
            },
            None => Href {
                href: template.to_string(),
                placeholder_field: String::new(),
                insert_at: template.len(),
            },
        }
    }

    /// The link with the placeholder segment removed.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The placeholder field name, or `""`.
    pub fn placeholder_field(&self) -> &str {
        &self.placeholder_field
    }

    /// The link for one record, with the placeholder value put back where
    /// the `{token}` was. A missing or null field inserts nothing.
    ///
    /// This only differs from appending the value to [`href`](Self::href)
    /// when text follows the token: `/a/{id}/edit` resolves to `/a/7/edit`,
    /// not `/a//edit7`.
    pub fn resolve(&self, record: &Record) -> String {
        if self.placeholder_field.is_empty() {
            return self.href.clone();
        }
        let value = record
            .get(&self.placeholder_field)
            .and_then(display_string)
            .unwrap_or_default();
        let mut out = self.href.clone();
        out.insert_str(self.insert_at, &value);
        out
    }
}

/// Text shown on a button.
#[derive(Clone, Debug)]
pub enum Label {
    /// Fixed text.
    Text(String),
    /// Text computed from the record.
    Derived(Derive),
}

impl Label {
    /// The raw label value for one record.
    pub fn read(&self, record: &Record) -> Value {
        match self {
            Label::Text(text) => Value::String(text.clone()),
            Label::Derived(derive) => derive.call(record),
        }
    }
}

impl From<RowField> for Label {
    fn from(field: RowField) -> Self {
        match field {
            RowField::Key(text) => Label::Text(text),
            RowField::Derived(derive) => Label::Derived(derive),
        }
    }
}

/// How a column draws its cells.
#[derive(Clone, Debug)]
pub enum ColumnKind {
    /// Synthetic first column of a detail grid: an expand/collapse toggle.
    ExpandToggle,
    /// The formatted value.
    Value {
        source: RowField,
        display: DisplayMode,
    },
    /// The formatted value, with a link template that only buttons act on.
    /// The cell renders as plain text; the template stays inspectable
    /// through [`Column::href`].
    Link {
        source: RowField,
        display: DisplayMode,
        href: Href,
    },
    /// The formatted value as a link that runs an action.
    ActionLink {
        source: RowField,
        display: DisplayMode,
        action: String,
    },
    /// A button navigating to a link.
    LinkButton { label: Label, href: Href },
    /// A button running an action.
    ActionButton { label: Label, action: String },
    /// Raw markup, passed through untouched.
    RowTemplate(String),
    /// A renderer-owned template.
    CustomTemplate(TemplateRef),
}

/// A normalized column.
#[derive(Clone, Debug)]
pub struct Column {
    pub(crate) header_text: String,
    pub(crate) width: String,
    pub(crate) kind: ColumnKind,
    pub(crate) colour_rule: Option<ColourRule>,
}

impl Column {
    /// The synthetic expand-toggle column.
    pub fn expand_toggle() -> Self {
        Column {
            header_text: String::new(),
            width: String::new(),
            kind: ColumnKind::ExpandToggle,
            colour_rule: None,
        }
    }

    /// Header label (`""` when none was configured).
    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    /// Width class string (`""` when none was configured).
    pub fn width(&self) -> &str {
        &self.width
    }

    /// How the column draws its cells.
    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    /// Returns `true` for button columns.
    pub fn is_button(&self) -> bool {
        matches!(
            self.kind,
            ColumnKind::LinkButton { .. } | ColumnKind::ActionButton { .. }
        )
    }

    /// Returns `true` for the synthetic expand-toggle column.
    pub fn is_expand_button(&self) -> bool {
        matches!(self.kind, ColumnKind::ExpandToggle)
    }

    /// Link template for columns configured with an `href`.
    pub fn link(&self) -> Option<&Href> {
        match &self.kind {
            ColumnKind::Link { href, .. } | ColumnKind::LinkButton { href, .. } => Some(href),
            _ => None,
        }
    }

    /// Link with the placeholder segment removed, for columns with an `href`.
    pub fn href(&self) -> Option<&str> {
        self.link().map(Href::href)
    }

    /// Placeholder field name for columns with an `href` (`""` when it has none).
    pub fn href_placeholder_field(&self) -> Option<&str> {
        self.link().map(Href::placeholder_field)
    }

    /// Action name for action columns.
    pub fn action_name(&self) -> Option<&str> {
        match &self.kind {
            ColumnKind::ActionLink { action, .. } | ColumnKind::ActionButton { action, .. } => {
                Some(action)
            }
            _ => None,
        }
    }

    /// Display mode for columns that show a formatted value.
    pub fn display_mode(&self) -> Option<&DisplayMode> {
        match &self.kind {
            ColumnKind::Value { display, .. }
            | ColumnKind::Link { display, .. }
            | ColumnKind::ActionLink { display, .. } => Some(display),
            _ => None,
        }
    }

    /// CSS classes the colour rule switches on for this record.
    pub fn colour_classes(&self, record: &Record) -> Vec<String> {
        self.colour_rule
            .as_ref()
            .map(|rule| rule.classes(record))
            .unwrap_or_default()
    }

    /// Returns `true` when the column has a colour rule.
    pub fn has_colour_rule(&self) -> bool {
        self.colour_rule.is_some()
    }
}

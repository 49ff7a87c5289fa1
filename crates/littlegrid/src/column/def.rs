//! Authoring form of a column: the flat, permissive configuration object.
//!
//! [`ColumnDef`] accepts the keys of the grid plugin's options object
//! (`headerText`, `rowText`, `money`, `dateFormat`, `displayFormat`,
//! `button`, `href`, `method`, `width`, `rowTemplate`, `customTemplate`).
//! Every key is optional. Derivation functions and colour rules cannot be
//! expressed in JSON, so they are attached with the fluent methods.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

type DeriveFn = dyn Fn(&Record) -> Value + Send + Sync;
type ColourFn = dyn Fn(&Record) -> BTreeMap<String, bool> + Send + Sync;

/// A function computing a cell value from the whole record.
#[derive(Clone)]
pub struct Derive(Arc<DeriveFn>);

impl Derive {
    /// Wrap a derivation function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        Derive(Arc::new(f))
    }

    /// Compute the value for one record.
    pub fn call(&self, record: &Record) -> Value {
        (self.0)(record)
    }
}

impl fmt::Debug for Derive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Derive(<fn>)")
    }
}

/// Where a column reads its value from.
#[derive(Clone, Debug)]
pub enum RowField {
    /// A field name (dot notation allowed). For buttons this is the literal label.
    Key(String),
    /// A function of the whole record.
    Derived(Derive),
}

impl Default for RowField {
    fn default() -> Self {
        RowField::Key(String::new())
    }
}

impl From<String> for RowField {
    fn from(key: String) -> Self {
        RowField::Key(key)
    }
}

impl From<&str> for RowField {
    fn from(key: &str) -> Self {
        RowField::Key(key.to_string())
    }
}

impl<'de> Deserialize<'de> for RowField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(RowField::Key)
    }
}

impl RowField {
    /// Read the raw value for a record. Missing fields read as null.
    pub fn read(&self, record: &Record) -> Value {
        match self {
            RowField::Key(key) => record.get(key).cloned().unwrap_or(Value::Null),
            RowField::Derived(derive) => derive.call(record),
        }
    }
}

/// Computes CSS class flags for a cell from its record.
///
/// Classes whose flag is `true` are applied to the cell.
#[derive(Clone)]
pub struct ColourRule(Arc<ColourFn>);

impl ColourRule {
    /// Wrap a colour rule function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> BTreeMap<String, bool> + Send + Sync + 'static,
    {
        ColourRule(Arc::new(f))
    }

    /// Class names switched on for this record, in sorted order.
    pub fn classes(&self, record: &Record) -> Vec<String> {
        (self.0)(record)
            .into_iter()
            .filter_map(|(class, on)| on.then_some(class))
            .collect()
    }
}

impl fmt::Debug for ColourRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColourRule(<fn>)")
    }
}

/// Reference to a template the renderer owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRef {
    /// Template name as registered with the renderer.
    pub name: String,
}

impl From<&str> for TemplateRef {
    fn from(name: &str) -> Self {
        TemplateRef {
            name: name.to_string(),
        }
    }
}

/// Raw column configuration, before normalization.
///
/// ```rust
/// use littlegrid::ColumnDef;
///
/// let json = r#"{ "headerText": "Salary", "rowText": "salary", "money": true }"#;
/// let def: ColumnDef = serde_json::from_str(json).unwrap();
/// assert_eq!(def.header_text.as_deref(), Some("Salary"));
/// assert!(def.is_money);
///
/// let built = ColumnDef::field("Salary", "salary").money();
/// assert!(built.is_money);
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDef {
    /// Header label.
    pub header_text: Option<String>,
    /// Value source, or the literal label for buttons.
    #[serde(rename = "rowText", alias = "rowField")]
    pub row_field: Option<RowField>,
    /// Render values as currency.
    #[serde(rename = "money", alias = "isMoney")]
    pub is_money: bool,
    /// moment.js-style pattern the raw date values use.
    #[serde(rename = "dateFormat", alias = "sourceDateFormat")]
    pub source_date_format: Option<String>,
    /// moment.js-style pattern dates are displayed with.
    #[serde(rename = "displayFormat", alias = "displayDateFormat")]
    pub display_date_format: Option<String>,
    /// Render as a button. Unset means `false`.
    #[serde(rename = "button", alias = "isButton")]
    pub is_button: Option<bool>,
    /// Link target, optionally containing one `{field}` placeholder.
    pub href: Option<String>,
    /// Name of a registered action handler.
    #[serde(rename = "method", alias = "actionName")]
    pub action_name: Option<String>,
    /// CSS class flags per record.
    #[serde(skip)]
    pub colour_rule: Option<ColourRule>,
    /// Width class string. Unset means `""`.
    pub width: Option<String>,
    /// Raw markup shown as its own row in detail views.
    pub row_template: Option<String>,
    /// A renderer-owned template used instead of cell content.
    pub custom_template: Option<TemplateRef>,
}

impl ColumnDef {
    /// Create an empty column definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column reading `key` under the header `header`.
    pub fn field(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new().header(header).row_field(key.into())
    }

    /// Create a column computing its value from the record.
    pub fn derived<F>(header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        Self::new()
            .header(header)
            .row_field(RowField::Derived(Derive::new(f)))
    }

    /// Set the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header_text = Some(header.into());
        self
    }

    /// Set the value source.
    pub fn row_field(mut self, field: impl Into<RowField>) -> Self {
        self.row_field = Some(field.into());
        self
    }

    /// Render values as currency.
    pub fn money(mut self) -> Self {
        self.is_money = true;
        self
    }

    /// Re-render dates from `source` to `display` (moment.js-style patterns).
    pub fn date(mut self, source: impl Into<String>, display: impl Into<String>) -> Self {
        self.source_date_format = Some(source.into());
        self.display_date_format = Some(display.into());
        self
    }

    /// Render as a button.
    pub fn button(mut self) -> Self {
        self.is_button = Some(true);
        self
    }

    /// Set the link target.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Invoke the named action handler when the cell is activated.
    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.action_name = Some(name.into());
        self
    }

    /// Attach a colour rule.
    pub fn colour<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record) -> BTreeMap<String, bool> + Send + Sync + 'static,
    {
        self.colour_rule = Some(ColourRule::new(f));
        self
    }

    /// Set the width class string.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Show raw markup instead of a field.
    pub fn row_template(mut self, html: impl Into<String>) -> Self {
        self.row_template = Some(html.into());
        self
    }

    /// Show a renderer-owned template instead of cell content.
    pub fn custom_template(mut self, name: impl Into<String>) -> Self {
        self.custom_template = Some(TemplateRef { name: name.into() });
        self
    }
}

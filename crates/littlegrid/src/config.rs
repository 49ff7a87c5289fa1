//! Grid configuration.
//!
//! [`GridConfig`] mirrors the options object of the grid plugin: the data,
//! the columns, and the pager and detail settings. It loads from JSON or
//! YAML with the plugin's camelCase keys, or is assembled in code with
//! [`GridConfig::builder`] when columns need derivation functions or colour
//! rules.
//!
//! ```rust
//! use littlegrid::GridConfig;
//!
//! let config = GridConfig::from_yaml(r#"
//! pager: true
//! pageSize: 10
//! columns:
//!   - headerText: Name
//!     rowText: name
//!   - headerText: Salary
//!     rowText: salary
//!     money: true
//! data:
//!   - { name: Alice, salary: "100" }
//! "#)
//! .unwrap();
//!
//! assert!(config.pager);
//! assert_eq!(config.page_size, 10);
//! assert_eq!(config.columns.len(), 2);
//! assert_eq!(config.data.len(), 1);
//! assert_eq!(config.currency_symbol, "R");
//! ```

use littlegrid_format::DEFAULT_CURRENCY_SYMBOL;
use serde::Deserialize;
use serde_json::Value;

use crate::column::ColumnDef;
use crate::error::Result;
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::record::Record;

/// Options for one grid.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// The records to show.
    pub data: Vec<Record>,
    /// Split the data into pages.
    #[serde(alias = "pagerEnabled")]
    pub pager: bool,
    /// Records per page. Zero means the default of 5.
    pub page_size: usize,
    /// Main grid columns.
    pub columns: Vec<ColumnDef>,
    /// Give every row an expandable detail view.
    #[serde(alias = "detailEnabled")]
    pub detail: bool,
    /// Field holding an array of nested records for the detail view.
    #[serde(alias = "detailNodeField")]
    pub detail_node: String,
    /// Action run when a detail row is expanded.
    pub detail_method: String,
    /// Columns shown in the detail view.
    pub detail_columns: Vec<ColumnDef>,
    /// Symbol for money columns.
    pub currency_symbol: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            data: Vec::new(),
            pager: false,
            page_size: DEFAULT_PAGE_SIZE,
            columns: Vec::new(),
            detail: false,
            detail_node: String::new(),
            detail_method: String::new(),
            detail_columns: Vec::new(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl GridConfig {
    /// Start building a configuration in code.
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder::default()
    }

    /// Parse a JSON options object.
    ///
    /// # Errors
    ///
    /// [`GridError::Config`](crate::GridError::Config) if the JSON is
    /// malformed or a key has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML options document.
    ///
    /// # Errors
    ///
    /// [`GridError::Config`](crate::GridError::Config) if the YAML is
    /// malformed or a key has the wrong shape.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Convert an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`GridError::Config`](crate::GridError::Config) if the value is not
    /// an options object.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Builder for [`GridConfig`].
#[derive(Clone, Debug, Default)]
pub struct GridConfigBuilder {
    config: GridConfig,
}

impl GridConfigBuilder {
    /// Replace the data.
    pub fn data(mut self, data: impl IntoIterator<Item = Record>) -> Self {
        self.config.data = data.into_iter().collect();
        self
    }

    /// Append one record.
    pub fn record(mut self, record: Record) -> Self {
        self.config.data.push(record);
        self
    }

    /// Enable paging with the given page size.
    pub fn pager(mut self, page_size: usize) -> Self {
        self.config.pager = true;
        self.config.page_size = page_size;
        self
    }

    /// Add a main grid column.
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.config.columns.push(column);
        self
    }

    /// Add several main grid columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.config.columns.extend(columns);
        self
    }

    /// Enable detail rows.
    pub fn detail(mut self) -> Self {
        self.config.detail = true;
        self
    }

    /// Read detail entries from the nested records under `field`.
    pub fn detail_node(mut self, field: impl Into<String>) -> Self {
        self.config.detail_node = field.into();
        self
    }

    /// Run the named action whenever a detail row is expanded.
    pub fn detail_method(mut self, action: impl Into<String>) -> Self {
        self.config.detail_method = action.into();
        self
    }

    /// Add a detail column.
    pub fn detail_column(mut self, column: ColumnDef) -> Self {
        self.config.detail_columns.push(column);
        self
    }

    /// Set the currency symbol for money columns.
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    pub fn build(self) -> GridConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = GridConfig::from_json("{}").unwrap();
        assert!(config.data.is_empty());
        assert!(!config.pager);
        assert_eq!(config.page_size, 5);
        assert!(!config.detail);
        assert_eq!(config.detail_node, "");
        assert_eq!(config.detail_method, "");
        assert!(config.detail_columns.is_empty());
        assert_eq!(config.currency_symbol, "R");
    }

    #[test]
    fn plugin_keys() {
        let config = GridConfig::from_value(json!({
            "data": [{"name": "Alice", "jobs": [{"title": "dev"}]}],
            "pager": true,
            "pageSize": 3,
            "columns": [{"headerText": "Name", "rowText": "name"}],
            "detail": true,
            "detailNode": "jobs",
            "detailMethod": "loadJobs",
            "detailColumns": [{"headerText": "Title", "rowText": "title"}],
            "currencySymbol": "$"
        }))
        .unwrap();

        assert!(config.pager);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.columns.len(), 1);
        assert!(config.detail);
        assert_eq!(config.detail_node, "jobs");
        assert_eq!(config.detail_method, "loadJobs");
        assert_eq!(config.detail_columns.len(), 1);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.data[0].get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn descriptive_aliases() {
        let config = GridConfig::from_json(
            r#"{"pagerEnabled": true, "detailEnabled": true, "detailNodeField": "jobs"}"#,
        )
        .unwrap();
        assert!(config.pager);
        assert!(config.detail);
        assert_eq!(config.detail_node, "jobs");
    }

    #[test]
    fn malformed_input_is_config_error() {
        assert!(matches!(
            GridConfig::from_json("{not json"),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"data": [1, 2]}"#),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::from_yaml("pageSize: [1"),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::from_value(json!("grid")),
            Err(GridError::Config(_))
        ));
    }

    #[test]
    fn builder() {
        let config = GridConfig::builder()
            .record(Record::new().with("name", "Alice"))
            .pager(2)
            .column(ColumnDef::field("Name", "name"))
            .detail()
            .detail_node("jobs")
            .detail_method("loadJobs")
            .detail_column(ColumnDef::field("Title", "title"))
            .currency_symbol("€")
            .build();

        assert_eq!(config.data.len(), 1);
        assert!(config.pager);
        assert_eq!(config.page_size, 2);
        assert_eq!(config.columns.len(), 1);
        assert!(config.detail);
        assert_eq!(config.detail_node, "jobs");
        assert_eq!(config.detail_method, "loadJobs");
        assert_eq!(config.detail_columns.len(), 1);
        assert_eq!(config.currency_symbol, "€");
    }
}

//! Littlegrid - the framework-independent core of a data grid.
//!
//! Give it records and column definitions; it hands back normalized columns,
//! the rows of the current page and a display string for every cell. A
//! renderer draws what it gets from [`Grid::view`] and reports clicks back as
//! plain method calls. Markup, styling and event binding are the renderer's
//! business.
//!
//! - [`column`]: column definitions and [`normalize`]
//! - [`pager`]: the visible window and page navigation
//! - [`littlegrid_format`]: blank policy, money and date formatting
//! - [`action`]: named row actions registered by the host
//! - [`Grid`]: all of the above plus detail-row and mobile expansion state
//!
//! # Quick Start
//!
//! ```rust
//! use littlegrid::{Cell, Grid, GridConfig};
//! use serde_json::json;
//!
//! let config = GridConfig::from_value(json!({
//!     "pager": true,
//!     "pageSize": 2,
//!     "columns": [
//!         { "headerText": "Name", "rowText": "name" },
//!         { "headerText": "Salary", "rowText": "salary", "money": true },
//!         { "headerText": "", "rowText": "Remove", "button": true, "method": "removeUser" }
//!     ],
//!     "data": [
//!         { "name": "Alice", "salary": "100" },
//!         { "name": "Bob", "salary": "" },
//!         { "name": "Carol", "salary": "1234.5" }
//!     ]
//! }))
//! .unwrap();
//!
//! let mut grid = Grid::new(config);
//! grid.register_action("removeUser", |record, event| {
//!     println!("remove row {}: {:?}", event.row, record.get("name"));
//! });
//!
//! let view = grid.view();
//! assert_eq!(view.rows.len(), 2);
//! assert_eq!(view.rows[0].cells[1].cell, Cell::Text { text: "R 100.00".into() });
//! assert_eq!(view.rows[1].cells[1].cell, Cell::Text { text: "-".into() });
//!
//! grid.jump_to_last_page();
//! assert_eq!(grid.items_on_current_page()[0].get("name"), Some(&json!("Carol")));
//!
//! assert!(grid.invoke_action("removeUser", 2, None).unwrap());
//! ```
//!
//! # Column Kinds
//!
//! Each normalized column has exactly one [`ColumnKind`]. Resolution order:
//!
//! | Definition | Kind |
//! |------------|------|
//! | `customTemplate` | `CustomTemplate` |
//! | `rowTemplate` | `RowTemplate` |
//! | `button` + `href` | `LinkButton` |
//! | `button` + `method` | `ActionButton` |
//! | `method` | `ActionLink` |
//! | `href` | `Link` (drawn as plain text) |
//! | anything else | `Value` |

pub mod action;
mod cell;
pub mod column;
mod config;
mod error;
mod grid;
pub mod pager;
mod record;
mod view;

pub use action::{ActionEvent, ActionHandler, ActionRegistry, FnHandler};
pub use cell::Cell;
pub use column::{
    normalize, ColourRule, Column, ColumnDef, ColumnKind, Derive, Href, Label, RowField,
    TemplateRef,
};
pub use config::{GridConfig, GridConfigBuilder};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use pager::{max_page_index, visible_slice, PageLink, Pager, DEFAULT_PAGE_SIZE};
pub use record::Record;
pub use view::{CellView, DetailEntry, DetailView, GridView, HeaderView, PagerView, RowView};

pub use littlegrid_format;
pub use littlegrid_format::{format_value, CellFormatter, DisplayMode};

//! The renderer-facing snapshot of a grid.
//!
//! [`Grid::view`](crate::Grid::view) produces a [`GridView`]: headers, the
//! rows of the current page with their rendered cells, detail entries and
//! the pager footer. Everything here is plain data and serializes with
//! serde, so a renderer in any technology can consume it.

use serde::Serialize;

use crate::cell::Cell;
use crate::column::Column;
use crate::pager::PageLink;

/// Everything a renderer needs to draw the grid once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub columns: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    /// Present when paging is enabled.
    pub pager: Option<PagerView>,
    /// Whether rows carry detail views.
    pub detail: bool,
    /// Number of records in the whole dataset.
    pub total_count: usize,
}

/// One header cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub header_text: String,
    pub width: String,
    pub expand_toggle: bool,
    pub button: bool,
}

impl From<&Column> for HeaderView {
    fn from(column: &Column) -> Self {
        HeaderView {
            header_text: column.header_text().to_string(),
            width: column.width().to_string(),
            expand_toggle: column.is_expand_button(),
            button: column.is_button(),
        }
    }
}

/// One visible row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    /// Absolute index into the grid data. Actions and toggles take this.
    pub index: usize,
    pub cells: Vec<CellView>,
    /// Present when the grid has detail rows.
    pub detail: Option<DetailView>,
    /// Whether the mobile card shows all of its fields.
    pub mobile_expanded: bool,
}

/// A rendered cell plus the classes its colour rule switched on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    #[serde(flatten)]
    pub cell: Cell,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

/// The expandable detail part of a row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub expanded: bool,
    pub entries: Vec<DetailEntry>,
}

/// One labelled value in a detail view. Template entries have no header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub header: Option<String>,
    pub cell: CellView,
}

/// Pager footer state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerView {
    pub page_size: usize,
    pub current_page_index: usize,
    /// `-1` when there is no data.
    pub max_page_index: i64,
    pub pages: Vec<PageLink>,
}

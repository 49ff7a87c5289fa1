//! The grid: data, columns and interaction state in one place.

use std::collections::BTreeSet;

use littlegrid_format::CellFormatter;

use crate::action::{ActionEvent, ActionRegistry};
use crate::column::{normalize, Column, ColumnKind};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::pager::Pager;
use crate::record::Record;
use crate::view::{CellView, DetailEntry, DetailView, GridView, HeaderView, PagerView, RowView};

/// A configured grid.
///
/// The grid owns its records, normalized columns, pager position, detail
/// expansion state and action handlers. A renderer draws from
/// [`view`](Self::view) and reports interactions back through the
/// navigation, [`invoke_action`](Self::invoke_action) and
/// [`toggle_detail`](Self::toggle_detail) calls.
///
/// ```rust
/// use littlegrid::{ColumnDef, Grid, GridConfig, Record};
///
/// let config = GridConfig::builder()
///     .data((1..=12).map(|id| Record::new().with("id", id)))
///     .pager(5)
///     .column(ColumnDef::field("Id", "id"))
///     .build();
/// let mut grid = Grid::new(config);
///
/// assert_eq!(grid.items_on_current_page().len(), 5);
/// grid.jump_to_last_page();
/// assert_eq!(grid.current_page_index(), 2);
/// assert_eq!(grid.items_on_current_page().len(), 2);
/// ```
#[derive(Debug)]
pub struct Grid {
    data: Vec<Record>,
    columns: Vec<Column>,
    detail_columns: Vec<Column>,
    pager: Pager,
    detail: bool,
    detail_node: String,
    detail_method: String,
    formatter: CellFormatter,
    actions: ActionRegistry,
    expanded: BTreeSet<usize>,
    mobile_expanded: BTreeSet<usize>,
}

impl Grid {
    /// Build a grid from its configuration. Columns are normalized here.
    pub fn new(config: GridConfig) -> Self {
        Grid {
            columns: normalize(config.columns, config.detail),
            detail_columns: normalize(config.detail_columns, false),
            pager: Pager::new(config.pager, config.page_size),
            detail: config.detail,
            detail_node: config.detail_node,
            detail_method: config.detail_method,
            formatter: CellFormatter::new(config.currency_symbol),
            actions: ActionRegistry::new(),
            expanded: BTreeSet::new(),
            mobile_expanded: BTreeSet::new(),
            data: config.data,
        }
    }

    /// Attach a prepared action registry, replacing the current one.
    pub fn with_actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = actions;
        self
    }

    /// Register a handler for the named action.
    pub fn register_action<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: FnMut(&Record, &ActionEvent<'_>) + 'static,
    {
        self.actions.register(name, f);
    }

    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    /// Normalized main columns, expand toggle included.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn detail_columns(&self) -> &[Column] {
        &self.detail_columns
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn formatter(&self) -> &CellFormatter {
        &self.formatter
    }

    pub fn is_detail_enabled(&self) -> bool {
        self.detail
    }

    /// Replace the data.
    ///
    /// The page index is pulled back into range and expansion state for
    /// rows that no longer exist is dropped.
    pub fn set_data(&mut self, data: Vec<Record>) {
        let len = data.len();
        self.data = data;
        self.pager.clamp(len);
        self.expanded.retain(|&row| row < len);
        self.mobile_expanded.retain(|&row| row < len);
    }

    // --- Paging ---

    /// Records on the current page (all records with paging off).
    pub fn items_on_current_page(&self) -> &[Record] {
        self.pager.slice(&self.data)
    }

    pub fn current_page_index(&self) -> usize {
        self.pager.current_page_index()
    }

    /// Index of the last page (`-1` when there is no data).
    pub fn max_page_index(&self) -> i64 {
        self.pager.max_page_index(self.data.len())
    }

    pub fn jump_to_first_page(&mut self) {
        self.pager.jump_to_first_page();
    }

    pub fn jump_to_last_page(&mut self) {
        self.pager.jump_to_last_page(self.data.len());
    }

    /// Go to a page, clamped into the valid range.
    pub fn set_page(&mut self, index: usize) {
        self.pager.set_page(index, self.data.len());
    }

    // --- Interaction ---

    /// Run the named action for the record at `row`.
    ///
    /// Returns `Ok(false)` when no handler is registered under `name`: a
    /// missing handler is ignored, not an error.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `row` is not a record index.
    pub fn invoke_action(&mut self, name: &str, row: usize, element: Option<&str>) -> Result<bool> {
        let record = self.data.get(row).ok_or(GridError::RowOutOfRange {
            index: row,
            len: self.data.len(),
        })?;
        let event = ActionEvent {
            action: name,
            row,
            element,
        };
        match self.actions.dispatch(name, record, &event) {
            Ok(()) => Ok(true),
            Err(GridError::HandlerNotFound(name)) => {
                tracing::debug!(action = %name, row, "no handler registered, action ignored");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Expand or collapse the detail view of `row`, returning the new state.
    ///
    /// Expanding runs the configured detail action, if any.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `row` is not a record index.
    pub fn toggle_detail(&mut self, row: usize) -> Result<bool> {
        self.check_row(row)?;
        let expanded = if self.expanded.remove(&row) {
            false
        } else {
            self.expanded.insert(row);
            true
        };
        tracing::debug!(row, expanded, "detail toggled");

        if expanded && !self.detail_method.is_empty() {
            let method = self.detail_method.clone();
            self.invoke_action(&method, row, None)?;
        }
        Ok(expanded)
    }

    pub fn is_expanded(&self, row: usize) -> bool {
        self.expanded.contains(&row)
    }

    /// Show every field of the mobile card for `row`. There is no way back.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `row` is not a record index.
    pub fn expand_mobile(&mut self, row: usize) -> Result<()> {
        self.check_row(row)?;
        self.mobile_expanded.insert(row);
        Ok(())
    }

    pub fn is_mobile_expanded(&self, row: usize) -> bool {
        self.mobile_expanded.contains(&row)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.data.len() {
            Ok(())
        } else {
            Err(GridError::RowOutOfRange {
                index: row,
                len: self.data.len(),
            })
        }
    }

    // --- Rendering ---

    /// Snapshot of what the renderer should draw now.
    pub fn view(&self) -> GridView {
        let offset = if self.pager.is_enabled() {
            self.pager.current_page_index().saturating_mul(self.pager.page_size())
        } else {
            0
        };
        let rows = self
            .items_on_current_page()
            .iter()
            .enumerate()
            .map(|(i, record)| self.row_view(offset + i, record))
            .collect();

        let total = self.data.len();
        let pager = self.pager.is_enabled().then(|| PagerView {
            page_size: self.pager.page_size(),
            current_page_index: self.pager.current_page_index(),
            max_page_index: self.pager.max_page_index(total),
            pages: self.pager.page_links(total),
        });

        GridView {
            columns: self.columns.iter().map(HeaderView::from).collect(),
            rows,
            pager,
            detail: self.detail,
            total_count: total,
        }
    }

    fn row_view(&self, index: usize, record: &Record) -> RowView {
        RowView {
            index,
            cells: self
                .columns
                .iter()
                .map(|column| self.cell_view(column, record))
                .collect(),
            detail: self.detail.then(|| self.detail_view(index, record)),
            mobile_expanded: self.mobile_expanded.contains(&index),
        }
    }

    fn cell_view(&self, column: &Column, record: &Record) -> CellView {
        CellView {
            cell: column.render_cell(record, &self.formatter),
            classes: column.colour_classes(record),
        }
    }

    /// Without a detail node each detail column yields one entry. With one,
    /// each column yields an entry per nested record, column by column.
    fn detail_view(&self, index: usize, record: &Record) -> DetailView {
        let entries = if self.detail_node.is_empty() {
            self.detail_columns
                .iter()
                .map(|column| self.detail_entry(column, record))
                .collect()
        } else {
            let nested = record.nested(&self.detail_node);
            self.detail_columns
                .iter()
                .flat_map(|column| nested.iter().map(move |child| (column, child)))
                .map(|(column, child)| self.detail_entry(column, child))
                .collect()
        };
        DetailView {
            expanded: self.expanded.contains(&index),
            entries,
        }
    }

    fn detail_entry(&self, column: &Column, record: &Record) -> DetailEntry {
        let header = match column.kind() {
            ColumnKind::RowTemplate(_) | ColumnKind::CustomTemplate(_) => None,
            _ => Some(column.header_text().to_string()),
        };
        DetailEntry {
            header,
            cell: self.cell_view(column, record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::column::ColumnDef;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn users(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new().with("id", i).with("name", format!("user{}", i)))
            .collect()
    }

    fn paged(n: usize) -> Grid {
        Grid::new(
            GridConfig::builder()
                .data(users(n))
                .pager(5)
                .column(ColumnDef::field("Name", "name"))
                .build(),
        )
    }

    #[test]
    fn paging_through_grid() {
        let mut grid = paged(12);
        assert_eq!(grid.max_page_index(), 2);
        grid.set_page(1);
        assert_eq!(grid.items_on_current_page()[0].get("id"), Some(&json!(5)));
        grid.jump_to_last_page();
        assert_eq!(grid.items_on_current_page().last(), grid.data().last());
        grid.jump_to_first_page();
        assert_eq!(grid.current_page_index(), 0);
    }

    #[test]
    fn set_data_clamps_page_and_prunes_state() {
        let mut grid = Grid::new(
            GridConfig::builder()
                .data(users(12))
                .pager(5)
                .detail()
                .build(),
        );
        grid.jump_to_last_page();
        grid.toggle_detail(11).unwrap();
        grid.toggle_detail(1).unwrap();
        grid.expand_mobile(10).unwrap();

        grid.set_data(users(6));
        assert_eq!(grid.current_page_index(), 1);
        assert!(grid.is_expanded(1));
        assert!(!grid.is_expanded(11));
        assert!(!grid.is_mobile_expanded(10));
    }

    #[test]
    fn invoke_action_runs_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut grid = paged(3);
        grid.register_action("removeUser", move |record: &Record, event: &ActionEvent<'_>| {
            sink.borrow_mut()
                .push((record.get("name").cloned(), event.row, event.element.map(String::from)));
        });

        assert!(grid.invoke_action("removeUser", 2, Some("row-2")).unwrap());
        assert_eq!(
            *seen.borrow(),
            vec![(Some(json!("user2")), 2, Some("row-2".to_string()))]
        );
    }

    #[test]
    fn missing_handler_is_ignored() {
        let mut grid = paged(3);
        assert!(!grid.invoke_action("nothing", 0, None).unwrap());
    }

    #[test]
    fn action_row_out_of_range() {
        let mut grid = paged(3);
        let err = grid.invoke_action("x", 3, None).unwrap_err();
        assert!(matches!(err, GridError::RowOutOfRange { index: 3, len: 3 }));
        assert!(grid.toggle_detail(7).is_err());
        assert!(grid.expand_mobile(3).is_err());
    }

    #[test]
    fn toggle_detail_runs_detail_method_on_expand_only() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut grid = Grid::new(
            GridConfig::builder()
                .data(users(2))
                .detail()
                .detail_method("loadJobs")
                .build(),
        );
        grid.register_action("loadJobs", move |_: &Record, event: &ActionEvent<'_>| {
            sink.borrow_mut().push(event.row);
        });

        assert!(grid.toggle_detail(1).unwrap());
        assert!(grid.is_expanded(1));
        assert!(!grid.toggle_detail(1).unwrap());
        assert!(!grid.is_expanded(1));
        assert!(grid.toggle_detail(1).unwrap());
        assert_eq!(*calls.borrow(), vec![1, 1]);
    }

    #[test]
    fn toggle_detail_without_handler_still_toggles() {
        let mut grid = Grid::new(
            GridConfig::builder()
                .data(users(1))
                .detail()
                .detail_method("unregistered")
                .build(),
        );
        assert!(grid.toggle_detail(0).unwrap());
    }

    #[test]
    fn view_rows_carry_absolute_indexes() {
        let mut grid = paged(12);
        grid.set_page(2);
        let view = grid.view();
        assert_eq!(view.total_count, 12);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].index, 10);
        assert_eq!(view.rows[1].index, 11);
        assert_eq!(
            view.rows[1].cells[0].cell,
            Cell::Text {
                text: "user11".into()
            }
        );

        let pager = view.pager.unwrap();
        assert_eq!(pager.current_page_index, 2);
        assert_eq!(pager.max_page_index, 2);
        assert_eq!(pager.pages.len(), 3);
        assert!(pager.pages[2].active);
    }

    #[test]
    fn view_without_pager() {
        let grid = Grid::new(
            GridConfig::builder()
                .data(users(7))
                .column(ColumnDef::field("Name", "name"))
                .build(),
        );
        let view = grid.view();
        assert!(view.pager.is_none());
        assert_eq!(view.rows.len(), 7);
        assert!(view.rows.iter().all(|row| row.detail.is_none()));
    }

    #[test]
    fn view_applies_colour_classes() {
        let grid = Grid::new(
            GridConfig::builder()
                .record(Record::new().with("status", "A"))
                .record(Record::new().with("status", "I"))
                .column(ColumnDef::field("Status", "status").colour(|r: &Record| {
                    std::collections::BTreeMap::from([(
                        "redClass".to_string(),
                        r.get("status") == Some(&json!("I")),
                    )])
                }))
                .build(),
        );
        let view = grid.view();
        assert!(view.rows[0].cells[0].classes.is_empty());
        assert_eq!(view.rows[1].cells[0].classes, vec!["redClass"]);
    }

    #[test]
    fn detail_entries_per_column() {
        let grid = Grid::new(
            GridConfig::builder()
                .record(Record::new().with("name", "Alice").with("email", "a@x"))
                .column(ColumnDef::field("Name", "name"))
                .detail()
                .detail_column(ColumnDef::new().row_template("<div>User</div>"))
                .detail_column(ColumnDef::field("Email", "email"))
                .build(),
        );
        let view = grid.view();
        assert_eq!(view.columns.len(), 2);
        assert!(view.columns[0].expand_toggle);
        assert_eq!(view.rows[0].cells[0].cell, Cell::ExpandToggle);

        let detail = view.rows[0].detail.as_ref().unwrap();
        assert!(!detail.expanded);
        assert_eq!(detail.entries.len(), 2);
        assert_eq!(detail.entries[0].header, None);
        assert_eq!(
            detail.entries[0].cell.cell,
            Cell::Markup {
                html: "<div>User</div>".into()
            }
        );
        assert_eq!(detail.entries[1].header.as_deref(), Some("Email"));
        assert_eq!(detail.entries[1].cell.cell.text(), Some("a@x"));
    }

    #[test]
    fn detail_node_entries_are_column_major() {
        let record = Record::from_value(json!({
            "name": "Alice",
            "jobs": [
                {"title": "dev", "salary": "10"},
                {"title": "ops", "salary": "20"}
            ]
        }))
        .unwrap();
        let mut grid = Grid::new(
            GridConfig::builder()
                .record(record)
                .detail()
                .detail_node("jobs")
                .detail_column(ColumnDef::field("Title", "title"))
                .detail_column(ColumnDef::field("Salary", "salary").money())
                .build(),
        );
        grid.toggle_detail(0).unwrap();

        let view = grid.view();
        let detail = view.rows[0].detail.as_ref().unwrap();
        assert!(detail.expanded);
        let texts: Vec<_> = detail
            .entries
            .iter()
            .map(|e| e.cell.cell.text().unwrap_or_default().to_string())
            .collect();
        assert_eq!(texts, vec!["dev", "ops", "R 10.00", "R 20.00"]);
    }

    #[test]
    fn detail_node_not_an_array_has_no_entries() {
        let grid = Grid::new(
            GridConfig::builder()
                .record(Record::new().with("jobs", "none"))
                .detail()
                .detail_node("jobs")
                .detail_column(ColumnDef::field("Title", "title"))
                .build(),
        );
        let view = grid.view();
        assert!(view.rows[0].detail.as_ref().unwrap().entries.is_empty());
    }

    #[test]
    fn mobile_expansion_is_one_way() {
        let mut grid = paged(2);
        assert!(!grid.is_mobile_expanded(0));
        grid.expand_mobile(0).unwrap();
        grid.expand_mobile(0).unwrap();
        assert!(grid.is_mobile_expanded(0));
        assert!(grid.view().rows[0].mobile_expanded);
    }

    #[test]
    fn prepared_registry_and_later_registration() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut actions = ActionRegistry::new();
        let sink = Rc::clone(&hits);
        actions.register("open", move |_: &Record, _: &ActionEvent<'_>| {
            sink.borrow_mut().push("open")
        });

        let mut grid = paged(1).with_actions(actions);
        let sink = Rc::clone(&hits);
        grid.actions_mut()
            .register("close", move |_: &Record, _: &ActionEvent<'_>| {
                sink.borrow_mut().push("close")
            });

        assert_eq!(grid.actions_mut().names(), vec!["close", "open"]);
        assert!(grid.invoke_action("open", 0, None).unwrap());
        assert!(grid.invoke_action("close", 0, None).unwrap());
        assert_eq!(*hits.borrow(), vec!["open", "close"]);
    }

    #[test]
    fn formatter_uses_configured_symbol() {
        let grid = Grid::new(GridConfig::builder().currency_symbol("$").build());
        assert_eq!(grid.formatter().currency_symbol, "$");
        assert_eq!(Grid::new(GridConfig::default()).formatter().currency_symbol, "R");
    }

    #[test]
    fn currency_symbol_reaches_cells() {
        let grid = Grid::new(
            GridConfig::builder()
                .record(Record::new().with("salary", "5"))
                .column(ColumnDef::field("Salary", "salary").money())
                .currency_symbol("$")
                .build(),
        );
        assert_eq!(grid.view().rows[0].cells[0].cell.text(), Some("$ 5.00"));
    }
}

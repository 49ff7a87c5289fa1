//! Column configuration and normalization.
//!
//! Columns arrive as [`ColumnDef`]s, the flat and permissive authoring form.
//! [`normalize`] turns them into [`Column`]s whose [`ColumnKind`] says
//! exactly how each cell is drawn.
//!
//! ```rust
//! use littlegrid::{normalize, ColumnDef, ColumnKind};
//!
//! let columns = normalize(
//!     vec![
//!         ColumnDef::field("Name", "name"),
//!         ColumnDef::field("Action", "Load User").button().href("/loadUser/{userId}"),
//!     ],
//!     true,
//! );
//!
//! assert!(columns[0].is_expand_button());
//! assert!(matches!(columns[1].kind(), ColumnKind::Value { .. }));
//! assert!(matches!(columns[2].kind(), ColumnKind::LinkButton { .. }));
//! ```

mod def;
mod normalize;
mod types;

pub use def::{ColourRule, ColumnDef, Derive, RowField, TemplateRef};
pub use normalize::normalize;
pub use types::{Column, ColumnKind, Href, Label};

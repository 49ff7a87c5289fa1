//! Row actions: host-registered handlers invoked by name.
//!
//! Columns name an action (`"method": "removeUser"`), and the host registers
//! a handler under that name. When the renderer reports a click, the grid
//! looks the name up in its [`ActionRegistry`] and calls the handler with the
//! row's record.
//!
//! ```rust
//! use littlegrid::{ActionEvent, ActionRegistry, Record};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let removed = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&removed);
//!
//! let mut actions = ActionRegistry::new();
//! actions.register("removeUser", move |record: &Record, event: &ActionEvent<'_>| {
//!     sink.borrow_mut().push((event.row, record.get("name").cloned()));
//! });
//!
//! let record = Record::new().with("name", "Alice");
//! actions
//!     .dispatch("removeUser", &record, &ActionEvent::new("removeUser", 3))
//!     .unwrap();
//! assert_eq!(removed.borrow().len(), 1);
//!
//! assert!(actions
//!     .dispatch("missing", &record, &ActionEvent::new("missing", 0))
//!     .is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::{GridError, Result};
use crate::record::Record;

/// What triggered an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionEvent<'a> {
    /// Registered action name.
    pub action: &'a str,
    /// Absolute index of the row in the grid data.
    pub row: usize,
    /// Renderer-supplied id of the element that was activated, if any.
    pub element: Option<&'a str>,
}

impl<'a> ActionEvent<'a> {
    pub fn new(action: &'a str, row: usize) -> Self {
        ActionEvent {
            action,
            row,
            element: None,
        }
    }

    /// Attach the id of the activated element.
    pub fn with_element(mut self, element: &'a str) -> Self {
        self.element = Some(element);
        self
    }
}

/// A handler for one named action.
///
/// Handlers take `&mut self`, so they can keep state between calls.
///
/// ```rust
/// use littlegrid::{ActionEvent, ActionHandler, Record};
///
/// struct Counter {
///     clicks: usize,
/// }
///
/// impl ActionHandler for Counter {
///     fn handle(&mut self, _record: &Record, _event: &ActionEvent<'_>) {
///         self.clicks += 1;
///     }
/// }
/// ```
pub trait ActionHandler {
    fn handle(&mut self, record: &Record, event: &ActionEvent<'_>);
}

/// Adapts an `FnMut` closure into an [`ActionHandler`].
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&Record, &ActionEvent<'_>),
{
    pub fn new(f: F) -> Self {
        FnHandler { f }
    }
}

impl<F> ActionHandler for FnHandler<F>
where
    F: FnMut(&Record, &ActionEvent<'_>),
{
    fn handle(&mut self, record: &Record, event: &ActionEvent<'_>) {
        (self.f)(record, event)
    }
}

/// Name-to-handler map for row actions.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, Box<dyn ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure under `name`, replacing any earlier handler.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: FnMut(&Record, &ActionEvent<'_>) + 'static,
    {
        self.register_handler(name, FnHandler::new(f));
    }

    /// Register a handler value under `name`, replacing any earlier handler.
    pub fn register_handler<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: ActionHandler + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Returns `true` if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Call the handler registered under `name`.
    ///
    /// # Errors
    ///
    /// [`GridError::HandlerNotFound`] when nothing is registered under `name`.
    pub fn dispatch(&mut self, name: &str, record: &Record, event: &ActionEvent<'_>) -> Result<()> {
        let handler = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| GridError::HandlerNotFound(name.to_string()))?;
        handler.handle(record, event);
        Ok(())
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

//! Rewind: a persistent undo/redo history container
//!
//! Rewind follows the "pure core, imperative shell" split. The core is a
//! persistent history (two immutable stacks plus a current value) and a
//! total transition function over four actions: set, push, undo and redo.
//! Every transition produces a new snapshot and leaves the old one valid,
//! so snapshots can be compared by reference for change detection and
//! kept around for replay. The shell is a small container that stores the
//! latest snapshot and notifies subscribers when it changes.
//!
//! # Core Concepts
//!
//! - **Stack**: Persistent LIFO with structural sharing
//! - **HistoryState**: Undo history, redo history and current value
//! - **Transition**: Pure `(snapshot, action) -> snapshot` function
//! - **Container**: Reactive cell exposing `{ current, can_undo, can_redo }`
//!
//! # Example
//!
//! ```rust
//! use rewind::{HistoryContainer, Updater};
//!
//! let mut doc = HistoryContainer::new(0);
//!
//! doc.push(Updater::value(1));
//! doc.push(Updater::value(2));
//! doc.undo();
//! doc.undo();
//! assert_eq!(doc.current(), &0);
//!
//! doc.redo();
//! doc.push(Updater::value(5));
//! let view = doc.view();
//! assert_eq!(view.current, 5);
//! assert!(!view.can_redo); // The undone 2 is gone for good
//! ```

pub mod binding;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::binding::{HistoryContainer, HistoryView, ReducerContainer};
pub use crate::builder::{BuildError, HistoryBuilder};
pub use crate::core::{transition, Action, EditKind, HistoryState, Snapshot, Stack, Updater};

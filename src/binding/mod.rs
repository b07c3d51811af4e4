//! Binding layer between the pure core and a UI.
//!
//! This module is the "imperative shell" around [`crate::core`]. It keeps
//! the latest snapshot in one place, runs commands through the
//! transition, and tells subscribers when the view changed:
//!
//! - `HistoryContainer` holds a snapshot and exposes undo/redo/set/push
//! - `ReducerContainer` drives a container with caller-defined actions
//! - `HistoryView` is the derived `{ current, can_undo, can_redo }` triple
//! - `Journal` optionally records every dispatched action for replay
//!
//! Containers are single-threaded: commands take `&mut self` and run to
//! completion before returning.

mod container;
mod journal;
mod reducer;
mod view;

pub use container::{HistoryContainer, Listener, SubscriptionId};
pub use journal::{Journal, JournalEntry};
pub use reducer::{Reducer, ReducerContainer};
pub use view::HistoryView;

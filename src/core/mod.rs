//! Core history types and logic.
//!
//! This module contains the pure functional core of the container:
//! - A persistent `Stack` with structural sharing
//! - The `Action` and `Updater` vocabulary
//! - The immutable `HistoryState` snapshot
//! - The total `transition` function
//!
//! Nothing in this module mutates shared data or performs I/O. State
//! storage and change notification live in [`crate::binding`].

mod action;
mod stack;
mod state;
mod transition;

pub use action::{Action, ActionKind, EditKind, Updater};
pub use stack::{Iter, Stack};
pub use state::{HistoryState, Snapshot};
pub use transition::transition;

//! The history aggregate: undo history, redo history and current value.

use super::stack::Stack;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A shared, immutable history snapshot.
///
/// Transitions return a fresh `Arc` when something changed and the very
/// same `Arc` when nothing did, so `Arc::ptr_eq` is a valid change test.
pub type Snapshot<T> = Arc<HistoryState<T>>;

/// Immutable triple of undo history, redo history and current value.
///
/// Values are never mutated. Use [`transition`](super::transition) to
/// derive the next snapshot.
///
/// # Example
///
/// ```rust
/// use rewind::core::HistoryState;
///
/// let state = HistoryState::new("draft");
/// assert_eq!(state.current(), &"draft");
/// assert!(!state.can_undo());
/// assert!(!state.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryState<T> {
    pub(crate) undo_history: Stack<T>,
    pub(crate) redo_history: Stack<T>,
    pub(crate) current: T,
}

impl<T> HistoryState<T> {
    /// Start a history with two empty stacks.
    pub fn new(initial: T) -> Self {
        Self {
            undo_history: Stack::new(),
            redo_history: Stack::new(),
            current: initial,
        }
    }

    /// Start a history and wrap it for use with `transition`.
    pub fn snapshot(initial: T) -> Snapshot<T> {
        Arc::new(Self::new(initial))
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// Values reachable by undoing, most recent on top.
    pub fn undo_history(&self) -> &Stack<T> {
        &self.undo_history
    }

    /// Values reachable by redoing, next redo on top.
    pub fn redo_history(&self) -> &Stack<T> {
        &self.redo_history
    }

    pub fn can_undo(&self) -> bool {
        self.undo_history.can_pop()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_history.can_pop()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_history.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_history.len()
    }

    /// Reference identity of two snapshots, as opposed to `==`.
    pub fn is_same_snapshot(a: &Snapshot<T>, b: &Snapshot<T>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

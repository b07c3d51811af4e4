//! Read-only view derived from a history snapshot.

use crate::core::HistoryState;
use serde::{Deserialize, Serialize};

/// What a UI layer renders: the current value and whether undo/redo are
/// available.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryView<T> {
    pub current: T,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl<T: Clone> HistoryView<T> {
    pub fn from_state(state: &HistoryState<T>) -> Self {
        Self {
            current: state.current().clone(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
        }
    }
}

impl<T: Clone> From<&HistoryState<T>> for HistoryView<T> {
    fn from(state: &HistoryState<T>) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{transition, Action, Updater};

    #[test]
    fn view_reflects_fresh_state() {
        let view = HistoryView::from_state(&HistoryState::new(3));

        assert_eq!(
            view,
            HistoryView {
                current: 3,
                can_undo: false,
                can_redo: false,
            }
        );
    }

    #[test]
    fn view_reflects_undo_and_redo_availability() {
        let state = HistoryState::snapshot(0);
        let state = transition(&state, Action::Push(Updater::value(1)));
        let state = transition(&state, Action::Push(Updater::value(2)));
        let state = transition(&state, Action::Undo);

        let view: HistoryView<i32> = state.as_ref().into();
        assert_eq!(view.current, 1);
        assert!(view.can_undo);
        assert!(view.can_redo);
    }
}

//! The pure history transition.

use super::action::{Action, Updater};
use super::stack::Stack;
use super::state::{HistoryState, Snapshot};
use std::sync::Arc;

/// Compute the snapshot that follows `prev` under `action`.
///
/// | Action | undo history | redo history | current |
/// |---|---|---|---|
/// | `Set(u)` | unchanged | cleared | `u` applied to current |
/// | `Push(u)` | current pushed | cleared | `u` applied to current |
/// | `Undo` | popped | current pushed | old undo top |
/// | `Redo` | current pushed | popped | old redo top |
///
/// Undo with an empty undo history and Redo with an empty redo history
/// return `prev` itself, so callers can detect the no-op with
/// `Arc::ptr_eq`. Set and Push always produce a new snapshot.
///
/// The function never fails. A panic inside an updater propagates to the
/// caller and leaves `prev` untouched.
///
/// # Example
///
/// ```rust
/// use rewind::core::{transition, Action, HistoryState, Updater};
/// use std::sync::Arc;
///
/// let start = HistoryState::snapshot(0);
/// let edited = transition(&start, Action::Push(Updater::value(1)));
/// assert_eq!(edited.current(), &1);
///
/// let undone = transition(&edited, Action::Undo);
/// assert_eq!(undone.current(), &0);
///
/// // Nothing left to undo: same snapshot back
/// let again = transition(&undone, Action::Undo);
/// assert!(Arc::ptr_eq(&undone, &again));
/// ```
pub fn transition<T: Clone>(prev: &Snapshot<T>, action: Action<T>) -> Snapshot<T> {
    match action {
        Action::Set(updater) => Arc::new(set(prev, updater)),
        Action::Push(updater) => Arc::new(push(prev, updater)),
        Action::Undo => match undo(prev) {
            Some(next) => Arc::new(next),
            None => Arc::clone(prev),
        },
        Action::Redo => match redo(prev) {
            Some(next) => Arc::new(next),
            None => Arc::clone(prev),
        },
    }
}

fn set<T: Clone>(prev: &HistoryState<T>, updater: Updater<T>) -> HistoryState<T> {
    HistoryState {
        undo_history: prev.undo_history.clone(),
        redo_history: Stack::new(),
        current: updater.apply(&prev.current),
    }
}

fn push<T: Clone>(prev: &HistoryState<T>, updater: Updater<T>) -> HistoryState<T> {
    HistoryState {
        undo_history: prev.undo_history.push(prev.current.clone()),
        redo_history: Stack::new(),
        current: updater.apply(&prev.current),
    }
}

fn undo<T: Clone>(prev: &HistoryState<T>) -> Option<HistoryState<T>> {
    let target = prev.undo_history.peek_top()?;
    Some(HistoryState {
        undo_history: prev.undo_history.pop(),
        redo_history: prev.redo_history.push(prev.current.clone()),
        current: target.clone(),
    })
}

fn redo<T: Clone>(prev: &HistoryState<T>) -> Option<HistoryState<T>> {
    let target = prev.redo_history.peek_top()?;
    Some(HistoryState {
        undo_history: prev.undo_history.push(prev.current.clone()),
        redo_history: prev.redo_history.pop(),
        current: target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(start: i32, actions: Vec<Action<i32>>) -> Snapshot<i32> {
        actions
            .into_iter()
            .fold(HistoryState::snapshot(start), |state, action| {
                transition(&state, action)
            })
    }

    #[test]
    fn set_replaces_current_and_keeps_undo_history() {
        let state = run(0, vec![Action::Push(Updater::value(1))]);
        let next = transition(&state, Action::Set(Updater::value(9)));

        assert_eq!(next.current(), &9);
        assert_eq!(next.undo_history(), state.undo_history());
        assert!(next.undo_history().ptr_eq(state.undo_history()));
    }

    #[test]
    fn push_records_previous_value() {
        let state = run(0, vec![Action::Push(Updater::value(1))]);

        assert_eq!(state.current(), &1);
        assert_eq!(state.undo_history().peek_top(), Some(&0));
        assert_eq!(state.undo_depth(), 1);
    }

    #[test]
    fn undo_moves_current_to_redo_history() {
        let state = run(
            0,
            vec![
                Action::Push(Updater::value(1)),
                Action::Push(Updater::value(2)),
                Action::Undo,
            ],
        );

        assert_eq!(state.current(), &1);
        assert_eq!(state.undo_history().peek_top(), Some(&0));
        assert_eq!(state.redo_history().peek_top(), Some(&2));
    }

    #[test]
    fn redo_moves_current_to_undo_history() {
        let state = run(
            0,
            vec![Action::Push(Updater::value(1)), Action::Undo, Action::Redo],
        );

        assert_eq!(state.current(), &1);
        assert_eq!(state.undo_history().peek_top(), Some(&0));
        assert!(!state.can_redo());
    }

    #[test]
    fn undo_on_empty_history_returns_same_snapshot() {
        let state = HistoryState::snapshot(0);
        let next = transition(&state, Action::Undo);

        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn redo_on_empty_history_returns_same_snapshot() {
        let state = run(0, vec![Action::Push(Updater::value(1))]);
        let next = transition(&state, Action::Redo);

        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn set_with_same_value_still_creates_snapshot() {
        let state = HistoryState::snapshot(0);
        let next = transition(&state, Action::Set(Updater::value(0)));

        assert_eq!(state, next);
        assert!(!Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn edits_after_undo_clear_redo_history() {
        for edit in [Action::Set(Updater::value(5)), Action::Push(Updater::value(5))] {
            let state = run(
                0,
                vec![Action::Push(Updater::value(1)), Action::Undo],
            );
            assert!(state.can_redo());

            let next = transition(&state, edit);
            assert!(!next.can_redo());
            assert_eq!(next.current(), &5);
        }
    }

    #[test]
    fn transition_leaves_previous_snapshot_intact() {
        let state = run(0, vec![Action::Push(Updater::value(1))]);
        let _ = transition(&state, Action::Undo);

        assert_eq!(state.current(), &1);
        assert_eq!(state.undo_depth(), 1);
        assert_eq!(state.redo_depth(), 0);
    }

    #[test]
    fn concrete_scenario() {
        let s = HistoryState::snapshot(0);

        let s = transition(&s, Action::Push(Updater::value(1)));
        assert_eq!((s.current(), s.can_undo(), s.can_redo()), (&1, true, false));

        let s = transition(&s, Action::Push(Updater::value(2)));
        assert_eq!((s.current(), s.can_undo()), (&2, true));

        let s = transition(&s, Action::Undo);
        assert_eq!((s.current(), s.can_undo(), s.can_redo()), (&1, true, true));

        let s = transition(&s, Action::Undo);
        assert_eq!((s.current(), s.can_undo(), s.can_redo()), (&0, false, true));

        let s = transition(&s, Action::Redo);
        assert_eq!(s.current(), &1);

        let s = transition(&s, Action::Push(Updater::value(5)));
        assert_eq!(s.current(), &5);
        assert!(!s.can_redo());
        assert!(!s.undo_history().iter().any(|v| *v == 2));
    }

    #[test]
    fn functional_updater_scenario() {
        let s = HistoryState::snapshot(10);

        let s = transition(&s, Action::Set(Updater::with(|v: &i32| v + 1)));
        assert_eq!(s.current(), &11);

        let s = transition(&s, Action::Push(Updater::with(|v: &i32| v * 2)));
        assert_eq!(s.current(), &22);
        assert_eq!(s.undo_history().peek_top(), Some(&11));

        let s = transition(&s, Action::Undo);
        assert_eq!(s.current(), &11);
    }

    #[test]
    #[should_panic(expected = "updater failed")]
    fn updater_panic_propagates() {
        let state = HistoryState::snapshot(0);
        let _ = transition(
            &state,
            Action::Set(Updater::with(|_: &i32| panic!("updater failed"))),
        );
    }
}

//! Actions accepted by the history transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A new value for the current state: either given outright or computed
/// from the previous value.
///
/// The tag is explicit, so a `T` that is itself a closure type is never
/// mistaken for an update function.
///
/// # Example
///
/// ```rust
/// use rewind::core::Updater;
///
/// assert_eq!(Updater::value(5).apply(&1), 5);
/// assert_eq!(Updater::with(|v: &i32| v + 1).apply(&1), 2);
/// ```
pub enum Updater<T> {
    /// Replace the current value
    Literal(T),
    /// Derive the next value from the current one
    Function(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Updater<T> {
    pub fn value(value: T) -> Self {
        Updater::Literal(value)
    }

    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + 'static,
    {
        Updater::Function(Box::new(f))
    }

    /// Produce the next value. Panics raised by the function propagate.
    pub fn apply(self, previous: &T) -> T {
        match self {
            Updater::Literal(value) => value,
            Updater::Function(f) => f(previous),
        }
    }
}

impl<T> From<T> for Updater<T> {
    fn from(value: T) -> Self {
        Updater::Literal(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Updater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Updater::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// One step applied to a [`HistoryState`](super::HistoryState).
#[derive(Debug)]
pub enum Action<T> {
    /// Replace the current value without recording it
    Set(Updater<T>),
    /// Record the current value on the undo history, then replace it
    Push(Updater<T>),
    /// Step back to the previous recorded value
    Undo,
    /// Step forward to the most recently undone value
    Redo,
}

impl<T> Action<T> {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Set(_) => ActionKind::Set,
            Action::Push(_) => ActionKind::Push,
            Action::Undo => ActionKind::Undo,
            Action::Redo => ActionKind::Redo,
        }
    }
}

/// Payload-free tag of an [`Action`], used for logging and journaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Set,
    Push,
    Undo,
    Redo,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Set => "Set",
            Self::Push => "Push",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
        }
    }

    /// True for Set and Push, the actions that discard redo history.
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Set | Self::Push)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a new edit is recorded.
///
/// `Set` overwrites the current value in place; `Push` first saves it so
/// the edit can be undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    Set,
    Push,
}

impl EditKind {
    /// Pair this kind with an updater.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::{ActionKind, EditKind, Updater};
    ///
    /// let action = EditKind::Push.into_action(Updater::value(3));
    /// assert_eq!(action.kind(), ActionKind::Push);
    /// ```
    pub fn into_action<T>(self, updater: Updater<T>) -> Action<T> {
        match self {
            EditKind::Set => Action::Set(updater),
            EditKind::Push => Action::Push(updater),
        }
    }
}

impl From<EditKind> for ActionKind {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Set => ActionKind::Set,
            EditKind::Push => ActionKind::Push,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_ignores_previous_value() {
        let updater = Updater::value(7);
        assert_eq!(updater.apply(&100), 7);
    }

    #[test]
    fn function_receives_previous_value() {
        let updater = Updater::with(|v: &i32| v * 3);
        assert_eq!(updater.apply(&4), 12);
    }

    #[test]
    fn from_value_builds_literal() {
        let updater: Updater<&str> = "next".into();
        assert!(matches!(updater, Updater::Literal("next")));
    }

    #[test]
    fn function_valued_state_is_not_called() {
        type Callback = fn(i32) -> i32;
        fn double(v: i32) -> i32 {
            v * 2
        }
        fn negate(v: i32) -> i32 {
            -v
        }

        let updater = Updater::value(double as Callback);
        let next = updater.apply(&(negate as Callback));
        assert_eq!(next(5), 10);
    }

    #[test]
    fn action_kind_matches_variant() {
        assert_eq!(Action::Set(Updater::value(1)).kind(), ActionKind::Set);
        assert_eq!(Action::Push(Updater::value(1)).kind(), ActionKind::Push);
        assert_eq!(Action::<i32>::Undo.kind(), ActionKind::Undo);
        assert_eq!(Action::<i32>::Redo.kind(), ActionKind::Redo);
    }

    #[test]
    fn only_set_and_push_are_edits() {
        assert!(ActionKind::Set.is_edit());
        assert!(ActionKind::Push.is_edit());
        assert!(!ActionKind::Undo.is_edit());
        assert!(!ActionKind::Redo.is_edit());
    }

    #[test]
    fn edit_kind_builds_matching_action() {
        let set = EditKind::Set.into_action(Updater::value(1));
        let push = EditKind::Push.into_action(Updater::value(1));

        assert_eq!(set.kind(), ActionKind::Set);
        assert_eq!(push.kind(), ActionKind::Push);
        assert_eq!(ActionKind::from(EditKind::Push), ActionKind::Push);
    }

    #[test]
    fn debug_hides_function_body() {
        let updater: Updater<i32> = Updater::with(|v| *v);
        assert_eq!(format!("{updater:?}"), "Function(..)");
        assert_eq!(format!("{:?}", Updater::value(2)), "Literal(2)");
    }

    #[test]
    fn action_kind_serializes_correctly() {
        let json = serde_json::to_string(&ActionKind::Redo).unwrap();
        let deserialized: ActionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ActionKind::Redo);
        assert_eq!(ActionKind::Undo.to_string(), "Undo");
    }
}

//! Builder API for history containers.
//!
//! [`HistoryContainer::new`](crate::binding::HistoryContainer::new) covers
//! the common case. The builder adds the optional replay journal and is
//! the only way to get a [`ReducerContainer`] that was checked for a
//! reducer up front.

pub mod error;

pub use error::BuildError;

use crate::binding::{HistoryContainer, Reducer, ReducerContainer};
use std::fmt;
use std::sync::Arc;

/// Fluent builder for [`HistoryContainer`] and [`ReducerContainer`].
///
/// # Example
///
/// ```
/// use rewind::builder::{BuildError, HistoryBuilder};
/// use rewind::core::EditKind;
///
/// let mut doc = HistoryBuilder::new()
///     .initial(String::new())
///     .reducer(|text: &String, word: String| format!("{text}{word}"))
///     .journal(true)
///     .build_reducer()
///     .unwrap();
///
/// doc.dispatch(EditKind::Push, "hello".to_string());
/// assert_eq!(doc.view().current, "hello");
/// assert_eq!(doc.container().journal().map(|j| j.len()), Some(1));
///
/// let missing = HistoryBuilder::new().initial(0).build_reducer();
/// assert_eq!(missing.unwrap_err(), BuildError::MissingReducer);
/// ```
pub struct HistoryBuilder<T, A = ()> {
    initial: Option<T>,
    reducer: Option<Reducer<T, A>>,
    journal: bool,
}

impl<T: Clone + 'static> HistoryBuilder<T, ()> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            reducer: None,
            journal: false,
        }
    }
}

impl<T: Clone + 'static> Default for HistoryBuilder<T, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static, A: 'static> HistoryBuilder<T, A> {
    /// Set the initial value (required).
    pub fn initial(mut self, value: T) -> Self {
        self.initial = Some(value);
        self
    }

    /// Set the reducer used by `ReducerContainer::dispatch`.
    pub fn reducer<B, F>(self, reducer: F) -> HistoryBuilder<T, B>
    where
        B: 'static,
        F: Fn(&T, B) -> T + 'static,
    {
        HistoryBuilder {
            initial: self.initial,
            reducer: Some(Arc::new(reducer)),
            journal: self.journal,
        }
    }

    /// Record every dispatched action in a replay journal.
    pub fn journal(mut self, enabled: bool) -> Self {
        self.journal = enabled;
        self
    }

    /// Build a plain container. A configured reducer is ignored.
    pub fn build(self) -> Result<HistoryContainer<T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(HistoryContainer::with_journal(initial, self.journal))
    }

    /// Build a reducer-driven container.
    /// Returns an error if the initial value or the reducer is missing.
    pub fn build_reducer(self) -> Result<ReducerContainer<T, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        let inner = HistoryContainer::with_journal(initial, self.journal);
        Ok(ReducerContainer::from_parts(inner, reducer))
    }
}

impl<T: fmt::Debug, A> fmt::Debug for HistoryBuilder<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryBuilder")
            .field("initial", &self.initial)
            .field("reducer", &self.reducer.is_some())
            .field("journal", &self.journal)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EditKind, Updater};

    #[test]
    fn builder_validates_required_fields() {
        let result = HistoryBuilder::<i32>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn build_reducer_requires_initial_value() {
        let result = HistoryBuilder::<i32>::new()
            .reducer(|n: &i32, by: i32| n + by)
            .build_reducer();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn build_reducer_requires_reducer() {
        let result = HistoryBuilder::new().initial(0).build_reducer();

        assert!(matches!(result, Err(BuildError::MissingReducer)));
    }

    #[test]
    fn fluent_api_builds_container() {
        let mut container = HistoryBuilder::new().initial(1).build().unwrap();

        container.push(Updater::value(2));
        assert_eq!(container.current(), &2);
        assert!(container.journal().is_none());
    }

    #[test]
    fn journal_option_enables_recording() {
        let mut container = HistoryBuilder::new()
            .initial(1)
            .journal(true)
            .build()
            .unwrap();

        container.push(Updater::value(2));
        container.undo();

        assert_eq!(container.journal().map(|j| j.len()), Some(2));
    }

    #[test]
    fn reducer_container_dispatches() {
        let mut container = HistoryBuilder::new()
            .initial(1)
            .reducer(|n: &i32, by: i32| n + by)
            .build_reducer()
            .unwrap();

        container.dispatch(EditKind::Push, 4);
        assert_eq!(container.view().current, 5);

        container.undo();
        assert_eq!(container.view().current, 1);
    }

    #[test]
    fn build_error_messages_name_the_fix() {
        assert!(BuildError::MissingInitialState
            .to_string()
            .contains(".initial(value)"));
        assert!(BuildError::MissingReducer.to_string().contains(".reducer(f)"));
    }
}

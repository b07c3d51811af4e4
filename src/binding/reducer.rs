//! Reducer adapter over [`HistoryContainer`].

use super::container::{HistoryContainer, SubscriptionId};
use super::view::HistoryView;
use crate::core::{EditKind, Snapshot, Updater};
use std::fmt;
use std::sync::Arc;

/// Caller-supplied update function `(state, action) -> state`.
pub type Reducer<T, A> = Arc<dyn Fn(&T, A) -> T>;

/// A history container driven by domain actions instead of raw values.
///
/// `dispatch(kind, action)` wraps the reducer into an updater function,
/// so `dispatch(EditKind::Push, a)` behaves exactly like
/// `push(Updater::with(|prev| reducer(prev, a)))`. The reducer can be
/// swapped at any time without touching history.
///
/// # Example
///
/// ```rust
/// use rewind::binding::ReducerContainer;
/// use rewind::core::EditKind;
///
/// enum Counter {
///     Add(i32),
///     Reset,
/// }
///
/// let mut counter = ReducerContainer::new(0, |n: &i32, action: Counter| match action {
///     Counter::Add(by) => n + by,
///     Counter::Reset => 0,
/// });
///
/// counter.dispatch(EditKind::Push, Counter::Add(5));
/// counter.dispatch(EditKind::Push, Counter::Reset);
/// assert_eq!(counter.view().current, 0);
///
/// counter.undo();
/// assert_eq!(counter.view().current, 5);
/// ```
pub struct ReducerContainer<T, A> {
    inner: HistoryContainer<T>,
    reducer: Reducer<T, A>,
}

impl<T, A> ReducerContainer<T, A>
where
    T: Clone + 'static,
    A: 'static,
{
    pub fn new<F>(initial: T, reducer: F) -> Self
    where
        F: Fn(&T, A) -> T + 'static,
    {
        Self::from_parts(HistoryContainer::new(initial), Arc::new(reducer))
    }

    pub(crate) fn from_parts(inner: HistoryContainer<T>, reducer: Reducer<T, A>) -> Self {
        Self { inner, reducer }
    }

    /// Reduce `action` against the current value and record it as `kind`.
    pub fn dispatch(&mut self, kind: EditKind, action: A) -> bool {
        let reducer = Arc::clone(&self.reducer);
        self.inner
            .set_state(kind, Updater::with(move |prev: &T| reducer(prev, action)))
    }

    /// Replace the reducer. History and subscribers are kept.
    pub fn set_reducer<F>(&mut self, reducer: F)
    where
        F: Fn(&T, A) -> T + 'static,
    {
        self.reducer = Arc::new(reducer);
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    pub fn view(&self) -> HistoryView<T> {
        self.inner.view()
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.inner.snapshot()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&HistoryView<T>) + 'static,
    {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// The wrapped container, for commands that bypass the reducer.
    pub fn container(&self) -> &HistoryContainer<T> {
        &self.inner
    }

    pub fn container_mut(&mut self) -> &mut HistoryContainer<T> {
        &mut self.inner
    }
}

impl<T: fmt::Debug, A> fmt::Debug for ReducerContainer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReducerContainer")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

//! History container: the reactive cell a UI layer binds to.

use super::journal::Journal;
use super::view::HistoryView;
use crate::core::{transition, Action, EditKind, HistoryState, Snapshot, Updater};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Callback invoked with the new view whenever the snapshot changes.
pub type Listener<T> = Box<dyn FnMut(&HistoryView<T>)>;

/// Handle returned by [`HistoryContainer::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the latest history snapshot for one logical document.
///
/// Every command runs the pure [`transition`] on the current snapshot.
/// If a new snapshot comes back it replaces the old one and subscribers
/// are told to re-render; undo/redo at the history boundary return the
/// same snapshot and notify nobody.
///
/// # Example
///
/// ```rust
/// use rewind::binding::HistoryContainer;
/// use rewind::core::Updater;
///
/// let mut doc = HistoryContainer::new(0);
///
/// doc.push(Updater::value(1));
/// doc.push(Updater::with(|v: &i32| v * 10));
/// assert_eq!(doc.current(), &10);
///
/// doc.undo();
/// let view = doc.view();
/// assert_eq!(view.current, 1);
/// assert!(view.can_undo);
/// assert!(view.can_redo);
/// ```
pub struct HistoryContainer<T> {
    id: Uuid,
    state: Snapshot<T>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_subscription: u64,
    journal: Option<Journal<T>>,
}

impl<T: Clone> HistoryContainer<T> {
    /// Create a container holding `initial` with empty histories.
    pub fn new(initial: T) -> Self {
        Self::with_journal(initial, false)
    }

    pub(crate) fn with_journal(initial: T, journal: bool) -> Self {
        let id = Uuid::new_v4();
        debug!(container = %id, journal, "history container created");
        Self {
            id,
            state: HistoryState::snapshot(initial),
            listeners: Vec::new(),
            next_subscription: 0,
            journal: journal.then(Journal::new),
        }
    }

    /// Identifier of the document this container tracks.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Public view of the latest snapshot.
    pub fn view(&self) -> HistoryView<T> {
        HistoryView::from_state(&self.state)
    }

    /// The latest snapshot itself, for inspection or replay.
    pub fn snapshot(&self) -> Snapshot<T> {
        Arc::clone(&self.state)
    }

    pub fn current(&self) -> &T {
        self.state.current()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// The replay journal, if it was enabled at construction.
    pub fn journal(&self) -> Option<&Journal<T>> {
        self.journal.as_ref()
    }

    /// Step back one recorded value. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        self.dispatch(Action::Undo)
    }

    /// Step forward one undone value. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        self.dispatch(Action::Redo)
    }

    /// Apply an edit of the given kind.
    pub fn set_state(&mut self, kind: EditKind, updater: Updater<T>) -> bool {
        self.dispatch(kind.into_action(updater))
    }

    /// Replace the current value without recording an undo step.
    pub fn set(&mut self, updater: Updater<T>) -> bool {
        self.dispatch(Action::Set(updater))
    }

    /// Replace the current value, recording the old one for undo.
    pub fn push(&mut self, updater: Updater<T>) -> bool {
        self.dispatch(Action::Push(updater))
    }

    /// Run one action through the transition.
    ///
    /// Returns whether the snapshot changed. Subscribers are notified only
    /// when it did.
    pub fn dispatch(&mut self, action: Action<T>) -> bool {
        let kind = action.kind();
        let next = transition(&self.state, action);
        let changed = !Arc::ptr_eq(&next, &self.state);

        if let Some(journal) = &self.journal {
            self.journal = Some(journal.record(kind, changed, &next));
        }

        if !changed {
            trace!(container = %self.id, action = %kind, "no history to move through");
            return false;
        }

        self.state = next;
        debug!(
            container = %self.id,
            action = %kind,
            undo_depth = self.state.undo_depth(),
            redo_depth = self.state.redo_depth(),
            "history updated"
        );
        self.notify();
        true
    }

    /// Register a callback that runs after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&HistoryView<T>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let view = self.view();
        for (_, listener) in &mut self.listeners {
            listener(&view);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for HistoryContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryContainer")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("journal", &self.journal.as_ref().map(Journal::len))
            .finish()
    }
}

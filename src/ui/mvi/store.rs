//! State holder publishing every transition.

use std::sync::Arc;

use tokio::sync::watch;

use super::contract::Reducer;

/// Holds the current state of one screen.
///
/// Every [`dispatch`](Store::dispatch) runs the reducer and replaces the
/// state; subscribers see each replacement. Clones share the same state.
/// Concurrent actions are last-write-wins.
pub struct Store<R: Reducer> {
    tx: Arc<watch::Sender<R::State>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every state replacement.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }

    pub fn dispatch(&self, intent: R::Intent) {
        self.tx.send_modify(|state| {
            let current = std::mem::take(state);
            *state = R::reduce(current, intent);
        });
    }
}

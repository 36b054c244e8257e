//! The three roles every screen fills: state, intent, reducer.

/// A screen's whole render input.
///
/// Replaced wholesale on every transition. `Default` is the mount state.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Something that happened: a user action starting, or the result it got back.
pub trait Intent: Send + 'static {}

/// Pure transition function for one screen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Next state from the current one. No I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

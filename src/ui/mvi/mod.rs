//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! action ──→ Intent ──→ Reducer ──→ State ──→ View
//!   ↑                                          │
//!   └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: the single record a screen renders from
//! - **Intent**: the start or outcome of an action
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Store**: holds the current state and publishes every replacement
//!
//! [`ScreenState`] and [`FormState`] are the two reusable state machines:
//! one for screens that load data, one for screens that submit a form.

mod contract;
mod form;
mod screen;
mod store;

pub use contract::{Intent, Reducer, UiState};
pub use form::{FieldErrors, FormIntent, FormReducer, FormState, FormStore};
pub use screen::{OnStart, Phase, ScreenData, ScreenIntent, ScreenReducer, ScreenState, ScreenStore};
pub use store::Store;

//! Submit / field-error state machine shared by form screens.

use std::collections::BTreeMap;
use std::future::Future;
use std::marker::PhantomData;

use crate::api::{ApiError, ApiResult, Field};

use super::contract::{Intent, Reducer, UiState};
use super::store::Store;

/// Error message per form field. [`Field::General`] is the screen-level slot.
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    pub is_loading: bool,
    /// Set once the submit succeeded; cleared when the view has navigated.
    pub is_success: bool,
    pub errors: FieldErrors,
    pub result: Option<T>,
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            is_success: false,
            errors: FieldErrors::new(),
            result: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> UiState for FormState<T> {}

impl<T> FormState<T> {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn general_error(&self) -> Option<&str> {
        self.error(Field::General)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent<T> {
    Submitted,
    Invalid(FieldErrors),
    Failed { field: Field, message: String },
    Succeeded(T),
    NavigationHandled,
}

impl<T: Send + 'static> Intent for FormIntent<T> {}

pub struct FormReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + Sync + 'static> Reducer for FormReducer<T> {
    type State = FormState<T>;
    type Intent = FormIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Submitted => FormState {
                is_loading: true,
                is_success: false,
                errors: FieldErrors::new(),
                result: state.result,
            },
            FormIntent::Invalid(errors) => FormState {
                is_loading: false,
                is_success: false,
                errors,
                result: state.result,
            },
            FormIntent::Failed { field, message } => FormState {
                is_loading: false,
                is_success: false,
                errors: FieldErrors::from([(field, message)]),
                result: state.result,
            },
            FormIntent::Succeeded(result) => FormState {
                is_loading: false,
                is_success: true,
                errors: FieldErrors::new(),
                result: Some(result),
            },
            FormIntent::NavigationHandled => FormState {
                is_success: false,
                ..state
            },
        }
    }
}

pub type FormStore<T> = Store<FormReducer<T>>;

impl<T: Clone + PartialEq + Send + Sync + 'static> Store<FormReducer<T>> {
    /// Validate-then-submit.
    ///
    /// Non-empty `invalid` short-circuits to the error state and `call` is
    /// never polled. Otherwise loading is published, `call` awaited, and a
    /// failure routed to the field `route` picks for it.
    pub async fn submit<Fut>(
        &self,
        invalid: FieldErrors,
        call: Fut,
        route: fn(&ApiError) -> Field,
    ) -> bool
    where
        Fut: Future<Output = ApiResult<T>>,
    {
        if !invalid.is_empty() {
            self.dispatch(FormIntent::Invalid(invalid));
            return false;
        }

        self.dispatch(FormIntent::Submitted);
        match call.await {
            Ok(result) => {
                self.dispatch(FormIntent::Succeeded(result));
                true
            }
            Err(err) => {
                self.dispatch(FormIntent::Failed {
                    field: route(&err),
                    message: err.to_string(),
                });
                false
            }
        }
    }

    /// Hand the success result to the view exactly once.
    pub fn take_success(&self) -> Option<T> {
        let state = self.state();
        if !state.is_success {
            return None;
        }
        self.dispatch(FormIntent::NavigationHandled);
        state.result
    }
}

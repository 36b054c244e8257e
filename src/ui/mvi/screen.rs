//! Loading / data / error state machine shared by data screens.

use std::future::Future;
use std::marker::PhantomData;

use crate::api::{ApiError, ApiResult};

use super::contract::{Intent, Reducer, UiState};
use super::store::Store;

/// Bound for the payload a data screen holds.
pub trait ScreenData: Clone + PartialEq + Default + Send + Sync + 'static {}

impl<T: Clone + PartialEq + Default + Send + Sync + 'static> ScreenData for T {}

/// `{ is_loading, data, error }` record of a data screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState<T> {
    pub is_loading: bool,
    pub data: T,
    pub error: Option<String>,
}

impl<T: ScreenData> UiState for ScreenState<T> {}

/// Which of the three mutually exclusive phases a screen is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

impl<T> ScreenState<T> {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Ready
        }
    }
}

/// What happens to `data` when an action starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnStart {
    /// Keep showing the current data while loading.
    Keep,
    /// Drop back to `T::default()`.
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent<T> {
    Started(OnStart),
    Succeeded(T),
    Failed(String),
}

impl<T: Send + 'static> Intent for ScreenIntent<T> {}

pub struct ScreenReducer<T>(PhantomData<fn() -> T>);

impl<T: ScreenData> Reducer for ScreenReducer<T> {
    type State = ScreenState<T>;
    type Intent = ScreenIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::Started(on_start) => ScreenState {
                is_loading: true,
                data: match on_start {
                    OnStart::Keep => state.data,
                    OnStart::Reset => T::default(),
                },
                error: None,
            },
            ScreenIntent::Succeeded(data) => ScreenState {
                is_loading: false,
                data,
                error: None,
            },
            ScreenIntent::Failed(message) => ScreenState {
                is_loading: false,
                data: state.data,
                error: Some(message),
            },
        }
    }
}

pub type ScreenStore<T> = Store<ScreenReducer<T>>;

impl<T: ScreenData> Store<ScreenReducer<T>> {
    /// Run one action through the canonical sequence.
    ///
    /// Loading is published before `call` is polled; on success `derive`
    /// builds the new data from the current data and the result; on failure
    /// the data is left as it was and the error message is published. The
    /// result is handed back so callers can chain on it.
    pub async fn run<V, Fut, D>(&self, on_start: OnStart, call: Fut, derive: D) -> ApiResult<V>
    where
        Fut: Future<Output = ApiResult<V>>,
        D: FnOnce(T, &V) -> T,
    {
        self.dispatch(ScreenIntent::Started(on_start));
        match call.await {
            Ok(value) => {
                let data = derive(self.state().data, &value);
                self.dispatch(ScreenIntent::Succeeded(data));
                Ok(value)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Run an action whose result replaces the data outright.
    pub async fn load<Fut>(&self, on_start: OnStart, call: Fut) -> ApiResult<T>
    where
        Fut: Future<Output = ApiResult<T>>,
    {
        self.run(on_start, call, |_, value| value.clone()).await
    }

    /// Publish an error without touching the network, e.g. after local
    /// validation rejected the input.
    pub fn fail(&self, err: &ApiError) {
        self.dispatch(ScreenIntent::Failed(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Field;

    type Numbers = ScreenStore<Vec<u32>>;

    #[test]
    fn started_clears_error_and_keeps_or_resets_data() {
        let failed = ScreenState {
            is_loading: false,
            data: vec![1, 2],
            error: Some("boom".to_string()),
        };

        let kept = ScreenReducer::<Vec<u32>>::reduce(failed.clone(), ScreenIntent::Started(OnStart::Keep));
        assert_eq!(kept.phase(), Phase::Loading);
        assert_eq!(kept.data, vec![1, 2]);
        assert!(kept.error.is_none());

        let reset = ScreenReducer::<Vec<u32>>::reduce(failed, ScreenIntent::Started(OnStart::Reset));
        assert!(reset.data.is_empty());
        assert!(reset.error.is_none());
    }

    #[test]
    fn failure_keeps_data_and_stops_loading() {
        let loading = ScreenState {
            is_loading: true,
            data: vec![9],
            error: None,
        };
        let state = ScreenReducer::<Vec<u32>>::reduce(loading, ScreenIntent::Failed("x".into()));
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.data, vec![9]);
    }

    #[test]
    fn never_loading_and_failed_together() {
        let state = ScreenReducer::<Vec<u32>>::reduce(
            ScreenReducer::<Vec<u32>>::reduce(ScreenState::default(), ScreenIntent::Failed("x".into())),
            ScreenIntent::Started(OnStart::Keep),
        );
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn loading_is_published_before_call_resolves() {
        let store = Numbers::new();
        let observer = store.clone();

        let result = store
            .load(OnStart::Keep, async move {
                let seen = observer.state();
                assert!(seen.is_loading);
                assert!(seen.error.is_none());
                Ok(vec![4, 5])
            })
            .await;

        assert_eq!(result, Ok(vec![4, 5]));
        assert_eq!(store.state().phase(), Phase::Ready);
        assert_eq!(store.state().data, vec![4, 5]);
    }

    #[tokio::test]
    async fn run_derives_from_current_data() {
        let store = Numbers::with_state(ScreenState {
            is_loading: false,
            data: vec![1],
            error: None,
        });

        store
            .run(OnStart::Keep, async { Ok(2u32) }, |mut data, v| {
                data.push(*v);
                data
            })
            .await
            .unwrap();

        assert_eq!(store.state().data, vec![1, 2]);
    }

    #[tokio::test]
    async fn failed_call_publishes_message() {
        let store = Numbers::new();
        let result = store
            .load(OnStart::Keep, async { Err(ApiError::Unauthenticated) })
            .await;

        assert_eq!(result, Err(ApiError::Unauthenticated));
        assert_eq!(store.state().error.as_deref(), Some("No autenticado"));
        assert!(!store.state().is_loading);
    }

    #[test]
    fn fail_short_circuits_without_loading() {
        let store = Numbers::new();
        store.fail(&ApiError::validation(Field::Content, "vacío"));
        let state = store.state();
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("vacío"));
    }
}

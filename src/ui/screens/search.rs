use crate::api::ApiResult;
use crate::models::{SearchResults, SearchScope};
use crate::repository::SearchRepository;
use crate::ui::mvi::{OnStart, ScreenIntent, ScreenState, ScreenStore};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchData {
    pub query: String,
    pub scope: SearchScope,
    pub results: SearchResults,
}

pub type SearchState = ScreenState<SearchData>;

#[derive(Clone)]
pub struct SearchViewModel {
    search: SearchRepository,
    store: ScreenStore<SearchData>,
}

impl SearchViewModel {
    pub fn new(search: SearchRepository) -> Self {
        Self {
            search,
            store: ScreenStore::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.store.state()
    }

    /// Search `scope` for `query`. A blank query clears the results
    /// without a request.
    pub async fn search(&self, query: &str, scope: SearchScope) -> ApiResult<()> {
        let query = query.trim();
        if query.is_empty() {
            self.store.dispatch(ScreenIntent::Succeeded(SearchData {
                scope,
                ..SearchData::default()
            }));
            return Ok(());
        }

        self.store
            .run(
                OnStart::Keep,
                self.search.search(scope, query),
                |_, results| SearchData {
                    query: query.to_string(),
                    scope,
                    results: results.clone(),
                },
            )
            .await
            .map(|_| ())
    }
}

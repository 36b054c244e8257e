use crate::api::{ApiClient, ApiRequest, ApiResult};
use crate::models::{Post, SearchResults, SearchScope, Tag, User};

#[derive(Clone)]
pub struct SearchRepository {
    client: ApiClient,
}

impl SearchRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn request(scope: SearchScope, query: &str) -> ApiRequest {
        ApiRequest::get(scope.path())
            .authenticated()
            .query("q", query.trim())
    }

    pub async fn search_all(&self, query: &str) -> ApiResult<SearchResults> {
        self.client
            .send(Self::request(SearchScope::All, query))
            .await
    }

    pub async fn search_users(&self, query: &str) -> ApiResult<Vec<User>> {
        self.client
            .send(Self::request(SearchScope::Users, query))
            .await
    }

    pub async fn search_posts(&self, query: &str) -> ApiResult<Vec<Post>> {
        self.client
            .send(Self::request(SearchScope::Posts, query))
            .await
    }

    pub async fn search_tags(&self, query: &str) -> ApiResult<Vec<Tag>> {
        self.client
            .send(Self::request(SearchScope::Tags, query))
            .await
    }

    /// Run a search in `scope`, folding scoped results into [`SearchResults`].
    pub async fn search(&self, scope: SearchScope, query: &str) -> ApiResult<SearchResults> {
        match scope {
            SearchScope::All => self.search_all(query).await,
            SearchScope::Users => Ok(SearchResults {
                users: self.search_users(query).await?,
                ..SearchResults::default()
            }),
            SearchScope::Posts => Ok(SearchResults {
                posts: self.search_posts(query).await?,
                ..SearchResults::default()
            }),
            SearchScope::Tags => Ok(SearchResults {
                tags: self.search_tags(query).await?,
                ..SearchResults::default()
            }),
        }
    }
}

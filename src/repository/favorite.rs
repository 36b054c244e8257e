use crate::api::{ApiClient, ApiRequest, ApiResult};
use crate::models::{FavoriteStatus, Post};

#[derive(Clone)]
pub struct FavoriteRepository {
    client: ApiClient,
}

impl FavoriteRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn toggle_favorite(&self, post_id: &str) -> ApiResult<FavoriteStatus> {
        let request = ApiRequest::post("post")
            .segment(post_id)
            .segment("favorite")
            .authenticated();
        self.client.send(request).await
    }

    pub async fn list_favorites(&self) -> ApiResult<Vec<Post>> {
        self.client
            .send(ApiRequest::get("post/favorites").authenticated())
            .await
    }
}

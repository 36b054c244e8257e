use crate::api::{ApiClient, ApiRequest, ApiResult};
use crate::models::{Post, User};

/// Profile reads.
#[derive(Clone)]
pub struct UserRepository {
    client: ApiClient,
}

impl UserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_user(&self, user_id: &str) -> ApiResult<User> {
        self.client
            .send(ApiRequest::get("user").segment(user_id).authenticated())
            .await
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.client
            .send(ApiRequest::get("user/me").authenticated())
            .await
    }

    pub async fn user_posts(&self, user_id: &str) -> ApiResult<Vec<Post>> {
        self.client
            .send(
                ApiRequest::get("user")
                    .segment(user_id)
                    .segment("posts")
                    .authenticated(),
            )
            .await
    }
}

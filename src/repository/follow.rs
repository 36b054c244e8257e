use crate::api::{ApiClient, ApiRequest, ApiResult};
use crate::models::FollowStatus;

#[derive(Clone)]
pub struct FollowRepository {
    client: ApiClient,
}

impl FollowRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Follow `user_id`, or unfollow if already following.
    pub async fn toggle_follow(&self, user_id: &str) -> ApiResult<FollowStatus> {
        let request = ApiRequest::post("social/follow").segment(user_id).authenticated();
        self.client.send(request).await
    }
}

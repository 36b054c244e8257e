use crate::api::{ApiClient, ApiRequest, ApiResult, ImageAttachment, MultipartBody};
use crate::models::{Comment, LikeStatus, NewComment, Post, PostListing, PostPage, PostUpdate};

/// Posts, likes and comments.
#[derive(Clone)]
pub struct PostRepository {
    client: ApiClient,
    page_size: u32,
}

impl PostRepository {
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            client,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page of the feed (1-based).
    pub async fn list_posts(&self, page: u32) -> ApiResult<PostPage> {
        let request = ApiRequest::get("post")
            .authenticated()
            .query("page", page)
            .query("limit", self.page_size);
        let listing: PostListing = self.client.send(request).await?;
        Ok(listing.into_page(page, self.page_size))
    }

    /// Publish a post as a multipart form: caption plus one part per image.
    pub async fn create_post(&self, caption: &str, images: &[ImageAttachment]) -> ApiResult<Post> {
        let request = ApiRequest::post("post")
            .authenticated()
            .multipart(MultipartBody::for_post(caption, images));
        self.client.send(request).await
    }

    pub async fn update_post(&self, post_id: &str, content: &str) -> ApiResult<Post> {
        let request = ApiRequest::put("post").segment(post_id)
            .authenticated()
            .json(&PostUpdate {
                content: content.to_string(),
            })?;
        self.client.send(request).await
    }

    pub async fn delete_post(&self, post_id: &str) -> ApiResult<()> {
        let request = ApiRequest::delete("post").segment(post_id).authenticated();
        self.client.send(request).await
    }

    pub async fn toggle_like(&self, post_id: &str) -> ApiResult<LikeStatus> {
        let request = ApiRequest::post("post")
            .segment(post_id)
            .segment("like")
            .authenticated();
        self.client.send(request).await
    }

    pub async fn create_comment(&self, post_id: &str, content: &str) -> ApiResult<Comment> {
        let request = ApiRequest::post("post")
            .segment(post_id)
            .segment("comment")
            .authenticated()
            .json(&NewComment {
                content: content.trim().to_string(),
            })?;
        self.client.send(request).await
    }

    pub async fn get_comments(&self, post_id: &str) -> ApiResult<Vec<Comment>> {
        let request = ApiRequest::get("post")
            .segment(post_id)
            .segment("comment")
            .authenticated();
        self.client.send(request).await
    }
}

use serde::{Deserialize, Serialize};

use super::user::{user_or_id, User};

/// A post in the feed.
///
/// `author` may arrive as a populated user or as a bare id; the latter
/// decodes into [`User::placeholder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "user_or_id", alias = "user")]
    pub author: User,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default, alias = "isLiked")]
    pub liked: bool,
    #[serde(default, alias = "isFavorite")]
    pub favorited: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of the feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: u32,
    pub has_more: bool,
}

/// Paged feed reply. `page` is often omitted by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedPosts {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub has_more: bool,
}

/// The feed endpoint answers either with a paged object or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostListing {
    Paged(PagedPosts),
    Bare(Vec<Post>),
}

impl PostListing {
    /// Normalize into the page that was asked for. A bare array is a full
    /// page when it holds `page_size` items, which is the only signal that
    /// more may follow.
    pub fn into_page(self, page: u32, page_size: u32) -> PostPage {
        match self {
            PostListing::Paged(p) => PostPage {
                posts: p.posts,
                page: p.page.unwrap_or(page),
                has_more: p.has_more,
            },
            PostListing::Bare(posts) => PostPage {
                has_more: posts.len() as u32 >= page_size,
                posts,
                page,
            },
        }
    }
}

/// Body of `PUT post/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostUpdate {
    pub content: String,
}

/// Server confirmation of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    #[serde(alias = "isLiked")]
    pub liked: bool,
    #[serde(default)]
    pub likes_count: Option<u32>,
}

/// Server confirmation of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    #[serde(alias = "isFavorite")]
    pub favorited: bool,
}

impl Post {
    /// The server count wins; without one the local count follows the flag.
    pub fn apply_like(&mut self, status: LikeStatus) {
        let was_liked = self.liked;
        self.liked = status.liked;
        self.likes_count = match status.likes_count {
            Some(count) => count,
            None if status.liked && !was_liked => self.likes_count.saturating_add(1),
            None if !status.liked && was_liked => self.likes_count.saturating_sub(1),
            None => self.likes_count,
        };
    }

    pub fn apply_favorite(&mut self, status: FavoriteStatus) {
        self.favorited = status.favorited;
    }
}

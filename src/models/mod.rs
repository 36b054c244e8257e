//! Domain entities decoded from the backend's JSON.

mod auth;
mod comment;
mod message;
mod notification;
mod post;
mod search;
mod tag;
mod user;

pub use auth::{
    AuthPayload, ChangePasswordRequest, FollowStatus, ForgotPasswordRequest, LoginRequest,
    RegisterRequest,
};
pub use comment::{Comment, NewComment};
pub use message::{Chat, Message};
pub use notification::{Notification, NotificationKind};
pub use post::{FavoriteStatus, LikeStatus, PagedPosts, Post, PostListing, PostPage, PostUpdate};
pub use search::{SearchResults, SearchScope};
pub use tag::Tag;
pub use user::{user_or_id, User, NO_BIO};

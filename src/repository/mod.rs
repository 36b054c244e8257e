//! Repositories: one per backend resource.
//!
//! Every method performs a single request through [`ApiClient`] and hands
//! back an [`ApiResult`](crate::api::ApiResult). None of them panic and none
//! of them touch screen state.

mod auth;
mod favorite;
mod follow;
mod placeholder;
mod post;
mod search;
mod user;

pub use auth::AuthRepository;
pub use favorite::FavoriteRepository;
pub use follow::FollowRepository;
pub use placeholder::PlaceholderRepository;
pub use post::PostRepository;
pub use search::SearchRepository;
pub use user::UserRepository;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// Every repository, sharing one client and one session.
#[derive(Clone)]
pub struct Repositories {
    pub auth: AuthRepository,
    pub posts: PostRepository,
    pub follow: FollowRepository,
    pub favorites: FavoriteRepository,
    pub search: SearchRepository,
    pub users: UserRepository,
    pub placeholder: PlaceholderRepository,
}

impl Repositories {
    pub fn new(client: ApiClient, config: &ApiConfig) -> Self {
        Self {
            auth: AuthRepository::new(client.clone()),
            posts: PostRepository::new(client.clone(), config.page_size),
            follow: FollowRepository::new(client.clone()),
            favorites: FavoriteRepository::new(client.clone()),
            search: SearchRepository::new(client.clone()),
            users: UserRepository::new(client),
            placeholder: PlaceholderRepository::new(),
        }
    }
}

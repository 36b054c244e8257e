use crate::api::ApiResult;
use crate::models::{FavoriteStatus, LikeStatus, Post, PostPage};
use crate::repository::{FavoriteRepository, PostRepository};
use crate::ui::mvi::{OnStart, ScreenState, ScreenStore};

/// Posts loaded so far plus where the next page starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feed {
    pub posts: Vec<Post>,
    /// Last page fetched; 0 before the first load.
    pub page: u32,
    pub has_more: bool,
}

impl Feed {
    fn first(page: &PostPage) -> Self {
        Self {
            posts: page.posts.clone(),
            page: page.page,
            has_more: page.has_more,
        }
    }

    fn append(mut self, page: &PostPage) -> Self {
        self.posts.extend(page.posts.iter().cloned());
        self.page = page.page;
        self.has_more = page.has_more;
        self
    }

    fn update(mut self, post_id: &str, f: impl FnOnce(&mut Post)) -> Self {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            f(post);
        }
        self
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }
}

pub type HomeState = ScreenState<Feed>;

/// Home feed.
#[derive(Clone)]
pub struct HomeViewModel {
    posts: PostRepository,
    favorites: FavoriteRepository,
    store: ScreenStore<Feed>,
}

impl HomeViewModel {
    pub fn new(posts: PostRepository, favorites: FavoriteRepository) -> Self {
        Self {
            posts,
            favorites,
            store: ScreenStore::new(),
        }
    }

    pub fn store(&self) -> &ScreenStore<Feed> {
        &self.store
    }

    pub fn state(&self) -> HomeState {
        self.store.state()
    }

    /// Load the first page, replacing whatever was shown.
    pub async fn load_posts(&self) -> ApiResult<()> {
        self.store
            .run(OnStart::Keep, self.posts.list_posts(1), |_, page| {
                Feed::first(page)
            })
            .await
            .map(|_| ())
    }

    pub async fn refresh(&self) -> ApiResult<()> {
        self.load_posts().await
    }

    /// Append the next page. Does nothing when the feed is exhausted or a
    /// load is already running.
    pub async fn load_more(&self) -> ApiResult<()> {
        let state = self.store.state();
        if state.is_loading || !state.data.has_more {
            return Ok(());
        }
        let next = state.data.page + 1;
        self.store
            .run(OnStart::Keep, self.posts.list_posts(next), Feed::append)
            .await
            .map(|_| ())
    }

    pub async fn toggle_like(&self, post_id: &str) -> ApiResult<LikeStatus> {
        self.store
            .run(
                OnStart::Keep,
                self.posts.toggle_like(post_id),
                |feed, status| feed.update(post_id, |p| p.apply_like(*status)),
            )
            .await
    }

    pub async fn toggle_favorite(&self, post_id: &str) -> ApiResult<FavoriteStatus> {
        self.store
            .run(
                OnStart::Keep,
                self.favorites.toggle_favorite(post_id),
                |feed, status| feed.update(post_id, |p| p.apply_favorite(*status)),
            )
            .await
    }

    pub async fn delete_post(&self, post_id: &str) -> ApiResult<()> {
        self.store
            .run(OnStart::Keep, self.posts.delete_post(post_id), |mut feed, _| {
                feed.posts.retain(|p| p.id != post_id);
                feed
            })
            .await
    }
}

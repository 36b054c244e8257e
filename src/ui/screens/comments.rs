use crate::api::{ApiError, ApiResult, Field};
use crate::models::Comment;
use crate::repository::PostRepository;
use crate::ui::mvi::{OnStart, ScreenState, ScreenStore};
use crate::validation;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Thread {
    pub post_id: String,
    pub comments: Vec<Comment>,
}

pub type CommentsState = ScreenState<Thread>;

pub const NO_POST: &str = "No hay ninguna publicación abierta";

/// Comment thread of one post.
#[derive(Clone)]
pub struct CommentsViewModel {
    posts: PostRepository,
    store: ScreenStore<Thread>,
}

impl CommentsViewModel {
    pub fn new(posts: PostRepository) -> Self {
        Self {
            posts,
            store: ScreenStore::new(),
        }
    }

    pub fn state(&self) -> CommentsState {
        self.store.state()
    }

    pub async fn load(&self, post_id: &str) -> ApiResult<()> {
        self.store
            .run(
                OnStart::Reset,
                self.posts.get_comments(post_id),
                |_, comments| Thread {
                    post_id: post_id.to_string(),
                    comments: comments.clone(),
                },
            )
            .await
            .map(|_| ())
    }

    /// Comment on the loaded post.
    pub async fn send(&self, text: &str) -> ApiResult<Comment> {
        let post_id = self.store.state().data.post_id;
        let rejected = if post_id.is_empty() {
            Some(NO_POST)
        } else if text.trim().is_empty() {
            Some(validation::EMPTY_COMMENT)
        } else {
            None
        };
        if let Some(message) = rejected {
            let err = ApiError::validation(Field::Content, message);
            self.store.fail(&err);
            return Err(err);
        }

        self.store
            .run(
                OnStart::Keep,
                self.posts.create_comment(&post_id, text),
                |mut thread, comment| {
                    thread.comments.push(comment.clone());
                    thread
                },
            )
            .await
    }
}

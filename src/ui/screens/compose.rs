use crate::api::{ApiError, Field, ImageAttachment};
use crate::models::Post;
use crate::repository::PostRepository;
use crate::ui::mvi::{FieldErrors, FormState, FormStore};
use crate::validation;

pub type ComposeState = FormState<Post>;

/// New-post form.
#[derive(Clone)]
pub struct ComposeViewModel {
    posts: PostRepository,
    store: FormStore<Post>,
}

impl ComposeViewModel {
    pub fn new(posts: PostRepository) -> Self {
        Self {
            posts,
            store: FormStore::new(),
        }
    }

    pub fn state(&self) -> ComposeState {
        self.store.state()
    }

    /// Publish a caption with zero or more images. At least one of the two
    /// must be present.
    pub async fn publish(&self, caption: &str, images: &[ImageAttachment]) -> bool {
        let mut invalid = FieldErrors::new();
        if caption.trim().is_empty() && images.is_empty() {
            invalid.insert(Field::Content, validation::EMPTY_POST.to_string());
        }
        self.store
            .submit(invalid, self.posts.create_post(caption.trim(), images), classify)
            .await
    }

    /// The created post, handed out once.
    pub fn take_published(&self) -> Option<Post> {
        self.store.take_success()
    }
}

pub fn classify(err: &ApiError) -> Field {
    match err {
        ApiError::Validation { field, .. } => *field,
        ApiError::Unauthenticated
        | ApiError::Unauthorized { .. }
        | ApiError::NotFound { .. }
        | ApiError::Server { .. }
        | ApiError::Connection { .. }
        | ApiError::Decode { .. } => Field::General,
    }
}

use crate::api::{ApiError, Field};
use crate::repository::AuthRepository;
use crate::ui::mvi::{FormState, FormStore};
use crate::validation::{self, Checks};

pub type ForgotPasswordState = FormState<()>;

#[derive(Clone)]
pub struct ForgotPasswordViewModel {
    auth: AuthRepository,
    store: FormStore<()>,
}

impl ForgotPasswordViewModel {
    pub fn new(auth: AuthRepository) -> Self {
        Self {
            auth,
            store: FormStore::new(),
        }
    }

    pub fn state(&self) -> ForgotPasswordState {
        self.store.state()
    }

    /// Whether a reset email has been requested successfully.
    pub fn email_sent(&self) -> bool {
        self.store.state().result.is_some()
    }

    pub async fn submit(&self, email: &str) -> bool {
        let invalid = Checks::new()
            .check(Field::Email, validation::email(email))
            .finish();
        self.store
            .submit(invalid, self.auth.forgot_password(email), classify)
            .await
    }
}

pub fn classify(err: &ApiError) -> Field {
    match err {
        ApiError::Validation { field, .. } => *field,
        ApiError::NotFound { .. } => Field::Email,
        ApiError::Unauthenticated
        | ApiError::Unauthorized { .. }
        | ApiError::Server { .. }
        | ApiError::Connection { .. }
        | ApiError::Decode { .. } => Field::General,
    }
}

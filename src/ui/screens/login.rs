use crate::api::{ApiError, Field};
use crate::models::User;
use crate::repository::AuthRepository;
use crate::ui::mvi::{FormState, FormStore};
use crate::validation::{self, Checks};

pub type LoginState = FormState<User>;

#[derive(Clone)]
pub struct LoginViewModel {
    auth: AuthRepository,
    store: FormStore<User>,
}

impl LoginViewModel {
    pub fn new(auth: AuthRepository) -> Self {
        Self {
            auth,
            store: FormStore::new(),
        }
    }

    pub fn store(&self) -> &FormStore<User> {
        &self.store
    }

    pub fn state(&self) -> LoginState {
        self.store.state()
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        let invalid = Checks::new()
            .check(Field::Email, validation::email(email))
            .check(Field::Password, validation::password(password))
            .finish();
        self.store
            .submit(invalid, self.auth.login(email, password), classify)
            .await
    }

    /// The signed-in user, handed out once after a successful login.
    pub fn navigation_handled(&self) -> Option<User> {
        self.store.take_success()
    }
}

/// Which slot a login failure is shown in.
pub fn classify(err: &ApiError) -> Field {
    match err {
        ApiError::Validation { field, .. } => *field,
        ApiError::Unauthorized { .. } => Field::Password,
        ApiError::NotFound { .. } => Field::Email,
        ApiError::Unauthenticated
        | ApiError::Server { .. }
        | ApiError::Connection { .. }
        | ApiError::Decode { .. } => Field::General,
    }
}

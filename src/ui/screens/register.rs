use crate::api::{ApiError, Field};
use crate::models::User;
use crate::repository::AuthRepository;
use crate::ui::mvi::{FormState, FormStore};
use crate::validation::{self, Checks};

pub type RegisterState = FormState<User>;

#[derive(Clone)]
pub struct RegisterViewModel {
    auth: AuthRepository,
    store: FormStore<User>,
}

impl RegisterViewModel {
    pub fn new(auth: AuthRepository) -> Self {
        Self {
            auth,
            store: FormStore::new(),
        }
    }

    pub fn state(&self) -> RegisterState {
        self.store.state()
    }

    pub async fn register(&self, username: &str, email: &str, password: &str, confirm: &str) -> bool {
        let invalid = Checks::new()
            .require(Field::Username, username, validation::USERNAME_REQUIRED)
            .check(Field::Email, validation::email(email))
            .check(Field::Password, validation::password(password))
            .matching(
                Field::ConfirmPassword,
                password,
                confirm,
                validation::PASSWORDS_DIFFER,
            )
            .finish();
        self.store
            .submit(invalid, self.auth.register(username, email, password), classify)
            .await
    }

    pub fn navigation_handled(&self) -> Option<User> {
        self.store.take_success()
    }
}

pub fn classify(err: &ApiError) -> Field {
    match err {
        ApiError::Validation { field, .. } => *field,
        // Conflict: the email is already registered.
        ApiError::Server { status: 409, .. } => Field::Email,
        ApiError::Unauthenticated
        | ApiError::Unauthorized { .. }
        | ApiError::NotFound { .. }
        | ApiError::Server { .. }
        | ApiError::Connection { .. }
        | ApiError::Decode { .. } => Field::General,
    }
}

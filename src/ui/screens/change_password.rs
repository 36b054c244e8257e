use crate::api::{ApiError, Field};
use crate::repository::AuthRepository;
use crate::ui::mvi::{FormState, FormStore};
use crate::validation::{self, Checks};

pub type ChangePasswordState = FormState<()>;

#[derive(Clone)]
pub struct ChangePasswordViewModel {
    auth: AuthRepository,
    store: FormStore<()>,
}

impl ChangePasswordViewModel {
    pub fn new(auth: AuthRepository) -> Self {
        Self {
            auth,
            store: FormStore::new(),
        }
    }

    pub fn state(&self) -> ChangePasswordState {
        self.store.state()
    }

    pub async fn submit(&self, current: &str, new: &str, confirm: &str) -> bool {
        let invalid = Checks::new()
            .require(Field::Password, current, validation::PASSWORD_REQUIRED)
            .check(Field::NewPassword, validation::password(new))
            .matching(
                Field::ConfirmPassword,
                new,
                confirm,
                validation::NEW_PASSWORDS_DIFFER,
            )
            .finish();
        self.store
            .submit(invalid, self.auth.change_password(current, new), classify)
            .await
    }

    pub fn navigation_handled(&self) -> bool {
        self.store.take_success().is_some()
    }
}

pub fn classify(err: &ApiError) -> Field {
    match err {
        ApiError::Validation { field, .. } => *field,
        // The current password was wrong.
        ApiError::Unauthorized { .. } => Field::Password,
        ApiError::Unauthenticated
        | ApiError::NotFound { .. }
        | ApiError::Server { .. }
        | ApiError::Connection { .. }
        | ApiError::Decode { .. } => Field::General,
    }
}

//! Local input checks run before any request is made.

use crate::api::Field;
use crate::ui::mvi::FieldErrors;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const EMAIL_REQUIRED: &str = "El correo es obligatorio";
pub const EMAIL_INVALID: &str = "Correo electrónico no válido";
pub const PASSWORD_REQUIRED: &str = "La contraseña es obligatoria";
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";
pub const PASSWORDS_DIFFER: &str = "Las contraseñas no coinciden";
pub const NEW_PASSWORDS_DIFFER: &str = "Las nuevas contraseñas no coinciden";
pub const USERNAME_REQUIRED: &str = "El nombre de usuario es obligatorio";
pub const EMPTY_POST: &str = "Escribe algo o añade una imagen";
pub const EMPTY_COMMENT: &str = "El comentario no puede estar vacío";
pub const EMPTY_MESSAGE: &str = "El mensaje no puede estar vacío";

pub fn email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !value.contains('@') {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

pub fn password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Collects field errors; an empty result means the input may be submitted.
#[derive(Debug, Default)]
pub struct Checks {
    errors: FieldErrors,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(mut self, field: Field, error: Option<&str>) -> Self {
        if let Some(message) = error {
            self.errors.entry(field).or_insert_with(|| message.to_string());
        }
        self
    }

    pub fn require(self, field: Field, value: &str, message: &str) -> Self {
        let error = value.trim().is_empty().then_some(message);
        self.check(field, error)
    }

    pub fn matching(self, field: Field, a: &str, b: &str, message: &str) -> Self {
        let error = (a != b).then_some(message);
        self.check(field, error)
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

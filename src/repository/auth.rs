use crate::api::{ApiClient, ApiRequest, ApiResult};
use crate::models::{
    AuthPayload, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    User,
};
use crate::session::{SecureString, Session};

/// Sign-in, sign-up and password operations.
#[derive(Clone)]
pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session. The session is stored on success.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let request = ApiRequest::post("auth/login").json(&LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        let payload: AuthPayload = self.client.send(request).await?;
        Ok(self.start_session(payload))
    }

    /// Create an account and sign straight into it.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<User> {
        let request = ApiRequest::post("auth/signup").json(&RegisterRequest {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        let payload: AuthPayload = self.client.send(request).await?;
        Ok(self.start_session(payload))
    }

    pub async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        let request = ApiRequest::post("auth/forgot-password").json(&ForgotPasswordRequest {
            email: email.trim().to_string(),
        })?;
        self.client.send(request).await
    }

    pub async fn change_password(&self, current: &str, new: &str) -> ApiResult<()> {
        let request = ApiRequest::post("auth/change-password")
            .authenticated()
            .json(&ChangePasswordRequest {
                current_password: current.to_string(),
                new_password: new.to_string(),
            })?;
        self.client.send(request).await
    }

    /// Drop the session locally. There is no server-side logout.
    pub fn logout(&self) {
        if let Err(e) = self.client.session().sign_out() {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
    }

    /// Id of the signed-in user, if any.
    pub fn current_user_id(&self) -> Option<String> {
        self.client.session().user_id()
    }

    fn start_session(&self, payload: AuthPayload) -> User {
        self.client.session().sign_in(Session {
            token: SecureString::new(payload.token),
            user: (&payload.user).into(),
        });
        payload.user
    }
}

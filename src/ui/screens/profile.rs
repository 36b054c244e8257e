use crate::api::{ApiError, ApiResult, Field};
use crate::models::{FollowStatus, Post, User};
use crate::repository::{AuthRepository, FollowRepository, UserRepository};
use crate::ui::mvi::{OnStart, ScreenIntent, ScreenState, ScreenStore};

/// Whose profile to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileTarget {
    Me,
    User(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub user: Option<User>,
    pub posts: Vec<Post>,
    /// The profile belongs to the signed-in user.
    pub is_me: bool,
}

impl Profile {
    fn apply_follow(mut self, status: FollowStatus) -> Self {
        if let Some(user) = self.user.as_mut() {
            let was_following = user.is_following;
            user.is_following = status.following;
            user.followers_count = match status.followers_count {
                Some(count) => count,
                None if status.following && !was_following => user.followers_count + 1,
                None if !status.following && was_following => {
                    user.followers_count.saturating_sub(1)
                }
                None => user.followers_count,
            };
        }
        self
    }
}

pub type ProfileState = ScreenState<Profile>;

pub const NO_PROFILE: &str = "No hay ningún perfil cargado";

#[derive(Clone)]
pub struct ProfileViewModel {
    auth: AuthRepository,
    users: UserRepository,
    follow: FollowRepository,
    store: ScreenStore<Profile>,
}

impl ProfileViewModel {
    pub fn new(auth: AuthRepository, users: UserRepository, follow: FollowRepository) -> Self {
        Self {
            auth,
            users,
            follow,
            store: ScreenStore::new(),
        }
    }

    pub fn store(&self) -> &ScreenStore<Profile> {
        &self.store
    }

    pub fn state(&self) -> ProfileState {
        self.store.state()
    }

    /// Fetch the user and then their posts.
    pub async fn load(&self, target: ProfileTarget) -> ApiResult<()> {
        let fetch = async {
            let user = match &target {
                ProfileTarget::Me => self.users.me().await?,
                ProfileTarget::User(id) => self.users.get_user(id).await?,
            };
            let posts = self.users.user_posts(&user.id).await?;
            let is_me = match &target {
                ProfileTarget::Me => true,
                ProfileTarget::User(id) => {
                    self.auth.current_user_id().as_deref() == Some(id.as_str())
                }
            };
            Ok::<_, ApiError>(Profile {
                user: Some(user),
                posts,
                is_me,
            })
        };
        self.store.load(OnStart::Reset, fetch).await.map(|_| ())
    }

    /// Follow or unfollow the loaded user once the server confirms.
    pub async fn toggle_follow(&self) -> ApiResult<FollowStatus> {
        let Some(user_id) = self.store.state().data.user.map(|u| u.id) else {
            let err = ApiError::validation(Field::General, NO_PROFILE);
            self.store.fail(&err);
            return Err(err);
        };
        self.store
            .run(
                OnStart::Keep,
                self.follow.toggle_follow(&user_id),
                |profile, status| profile.apply_follow(*status),
            )
            .await
    }

    /// Drop the session and clear the screen.
    pub fn logout(&self) {
        self.auth.logout();
        self.store.dispatch(ScreenIntent::Succeeded(Profile::default()));
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use crate::session::SessionUser;

/// Text shown in place of an empty biography.
pub const NO_BIO: &str = "no bio";

/// A user profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
    #[serde(default)]
    pub posts_count: u32,
    #[serde(default)]
    pub is_following: bool,
}

impl User {
    /// Stand-in for a user the server only referenced by id.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.username.is_empty()
    }

    pub fn bio_or_placeholder(&self) -> &str {
        match self.bio.as_deref().map(str::trim) {
            Some(bio) if !bio.is_empty() => bio,
            _ => NO_BIO,
        }
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if !self.username.is_empty() => &self.username,
            _ => &self.id,
        }
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        SessionUser {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserRef {
    Full(User),
    Id(String),
}

/// Decode a field holding either a full user object or a bare user id.
pub fn user_or_id<'de, D>(deserializer: D) -> Result<User, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match UserRef::deserialize(deserializer)? {
        UserRef::Full(user) => user,
        UserRef::Id(id) => User::placeholder(id),
    })
}

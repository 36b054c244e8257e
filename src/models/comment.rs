use serde::{Deserialize, Serialize};

use super::user::{user_or_id, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "user_or_id", alias = "user")]
    pub author: User,
    #[serde(alias = "text")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST post/{id}/comment`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub content: String,
}

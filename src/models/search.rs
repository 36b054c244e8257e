use serde::{Deserialize, Serialize};

use super::post::Post;
use super::tag::Tag;
use super::user::User;

/// Which collection a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Users,
    Posts,
    Tags,
}

impl SearchScope {
    /// Path of the search endpoint for this scope.
    pub fn path(&self) -> &'static str {
        match self {
            SearchScope::All => "search",
            SearchScope::Users => "search/users",
            SearchScope::Posts => "search/posts",
            SearchScope::Tags => "search/tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResults {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.posts.is_empty() && self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len() + self.posts.len() + self.tags.len()
    }
}

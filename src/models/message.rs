use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub text: String,
    #[serde(default)]
    pub sent_by_me: bool,
    #[serde(default)]
    pub sent_at: Option<String>,
}

/// A conversation with one other user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub participant: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

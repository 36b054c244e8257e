use crate::api::{ApiError, ApiResult, Field};
use crate::models::{Chat, Message};
use crate::repository::PlaceholderRepository;
use crate::ui::mvi::{OnStart, ScreenState, ScreenStore};
use crate::validation;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inbox {
    pub chats: Vec<Chat>,
    pub open: Option<Chat>,
}

pub type MessagesState = ScreenState<Inbox>;

pub const NO_CHAT_OPEN: &str = "Selecciona una conversación";

#[derive(Clone)]
pub struct MessagesViewModel {
    source: PlaceholderRepository,
    store: ScreenStore<Inbox>,
}

impl MessagesViewModel {
    pub fn new(source: PlaceholderRepository) -> Self {
        Self {
            source,
            store: ScreenStore::new(),
        }
    }

    pub fn state(&self) -> MessagesState {
        self.store.state()
    }

    pub async fn load_chats(&self) -> ApiResult<()> {
        self.store
            .run(OnStart::Keep, self.source.chats(), |inbox, chats| Inbox {
                chats: chats.clone(),
                ..inbox
            })
            .await
            .map(|_| ())
    }

    pub async fn open_chat(&self, chat_id: &str) -> ApiResult<()> {
        self.store
            .run(OnStart::Keep, self.source.open_chat(chat_id), |mut inbox, chat| {
                if let Some(listed) = inbox.chats.iter_mut().find(|c| c.id == chat.id) {
                    *listed = chat.clone();
                }
                inbox.open = Some(chat.clone());
                inbox
            })
            .await
            .map(|_| ())
    }

    /// Send `text` to the open chat.
    pub async fn send(&self, text: &str) -> ApiResult<Message> {
        let Some(chat_id) = self.store.state().data.open.map(|c| c.id) else {
            return self.reject(NO_CHAT_OPEN);
        };
        if text.trim().is_empty() {
            return self.reject(validation::EMPTY_MESSAGE);
        }

        self.store
            .run(
                OnStart::Keep,
                self.source.send_message(&chat_id, text),
                |mut inbox, message| {
                    for chat in inbox.open.iter_mut().chain(inbox.chats.iter_mut()) {
                        if chat.id == chat_id {
                            chat.messages.push(message.clone());
                        }
                    }
                    inbox
                },
            )
            .await
    }

    fn reject(&self, message: &str) -> ApiResult<Message> {
        let err = ApiError::validation(Field::Content, message);
        self.store.fail(&err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_requires_an_open_chat() {
        let vm = MessagesViewModel::new(PlaceholderRepository::new());
        vm.load_chats().await.unwrap();
        assert!(vm.send("hola").await.is_err());
        assert_eq!(vm.state().error.as_deref(), Some(NO_CHAT_OPEN));
    }

    #[tokio::test]
    async fn sent_message_shows_in_open_chat_and_list() {
        let vm = MessagesViewModel::new(PlaceholderRepository::new());
        vm.load_chats().await.unwrap();
        vm.open_chat("c1").await.unwrap();
        assert_eq!(vm.state().data.chats[0].unread, 0);

        let sent = vm.send("¿qué tal?").await.unwrap();
        let inbox = vm.state().data;
        assert_eq!(inbox.open.unwrap().last_message(), Some(&sent));
        assert_eq!(inbox.chats[0].last_message(), Some(&sent));
    }

    #[tokio::test]
    async fn blank_text_is_rejected_locally() {
        let vm = MessagesViewModel::new(PlaceholderRepository::new());
        vm.open_chat("c2").await.unwrap();
        assert!(vm.send("  ").await.is_err());
        assert_eq!(vm.state().error.as_deref(), Some(validation::EMPTY_MESSAGE));
    }
}

use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ApiError, ApiResult, Field};
use crate::models::{Chat, Message, Notification, NotificationKind};

/// Local source for notifications and chats.
///
/// The backend exposes no endpoints for either, so both are served from an
/// in-memory fixture. Clones share the same data, which lets read flags and
/// sent messages survive across screens for the life of the process.
#[derive(Clone)]
pub struct PlaceholderRepository {
    inner: Arc<Mutex<Fixture>>,
}

struct Fixture {
    notifications: Vec<Notification>,
    chats: Vec<Chat>,
    next_message_id: u64,
}

impl Default for PlaceholderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderRepository {
    pub fn new() -> Self {
        Self::with_data(sample_notifications(), sample_chats())
    }

    pub fn with_data(notifications: Vec<Notification>, chats: Vec<Chat>) -> Self {
        let next_message_id = chats.iter().map(|c| c.messages.len() as u64).sum::<u64>() + 1;
        Self {
            inner: Arc::new(Mutex::new(Fixture {
                notifications,
                chats,
                next_message_id,
            })),
        }
    }

    pub async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        Ok(self.inner.lock().notifications.clone())
    }

    pub async fn mark_read(&self, notification_id: &str) -> ApiResult<Vec<Notification>> {
        let mut fixture = self.inner.lock();
        let notification = fixture
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| ApiError::NotFound {
                message: "Notificación no encontrada".to_string(),
            })?;
        notification.read = true;
        Ok(fixture.notifications.clone())
    }

    pub async fn mark_all_read(&self) -> ApiResult<Vec<Notification>> {
        let mut fixture = self.inner.lock();
        for n in fixture.notifications.iter_mut() {
            n.read = true;
        }
        Ok(fixture.notifications.clone())
    }

    pub async fn chats(&self) -> ApiResult<Vec<Chat>> {
        Ok(self.inner.lock().chats.clone())
    }

    /// Open a chat, clearing its unread counter.
    pub async fn open_chat(&self, chat_id: &str) -> ApiResult<Chat> {
        let mut fixture = self.inner.lock();
        let chat = find_chat(&mut fixture.chats, chat_id)?;
        chat.unread = 0;
        Ok(chat.clone())
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> ApiResult<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::validation(
                Field::Content,
                crate::validation::EMPTY_MESSAGE,
            ));
        }

        let mut fixture = self.inner.lock();
        let id = format!("m{}", fixture.next_message_id);
        fixture.next_message_id += 1;

        let chat = find_chat(&mut fixture.chats, chat_id)?;
        let message = Message {
            id,
            sender: "me".to_string(),
            text: text.to_string(),
            sent_by_me: true,
            sent_at: None,
        };
        chat.messages.push(message.clone());
        Ok(message)
    }
}

fn find_chat<'a>(chats: &'a mut [Chat], chat_id: &str) -> ApiResult<&'a mut Chat> {
    chats
        .iter_mut()
        .find(|c| c.id == chat_id)
        .ok_or_else(|| ApiError::NotFound {
            message: "Conversación no encontrada".to_string(),
        })
}

fn sample_notifications() -> Vec<Notification> {
    let entry = |id: &str, kind, actor: &str, message: &str| Notification {
        id: id.to_string(),
        kind,
        actor: actor.to_string(),
        message: message.to_string(),
        read: false,
        created_at: None,
    };
    vec![
        entry("n1", NotificationKind::Like, "lucia", "le gustó tu publicación"),
        entry("n2", NotificationKind::Follow, "marcos", "empezó a seguirte"),
        entry("n3", NotificationKind::Comment, "sofia", "comentó tu publicación"),
        entry("n4", NotificationKind::Mention, "diego", "te mencionó en un comentario"),
    ]
}

fn sample_chats() -> Vec<Chat> {
    let incoming = |id: &str, sender: &str, text: &str| Message {
        id: id.to_string(),
        sender: sender.to_string(),
        text: text.to_string(),
        sent_by_me: false,
        sent_at: None,
    };
    vec![
        Chat {
            id: "c1".to_string(),
            participant: "lucia".to_string(),
            avatar: None,
            unread: 2,
            messages: vec![
                incoming("m1", "lucia", "¡Hola!"),
                incoming("m2", "lucia", "¿Viste la foto nueva?"),
            ],
        },
        Chat {
            id: "c2".to_string(),
            participant: "marcos".to_string(),
            avatar: None,
            unread: 0,
            messages: vec![incoming("m3", "marcos", "Nos vemos mañana")],
        },
    ]
}

use crate::api::ApiResult;
use crate::models::Notification;
use crate::repository::PlaceholderRepository;
use crate::ui::mvi::{OnStart, ScreenState, ScreenStore};

pub type NotificationsState = ScreenState<Vec<Notification>>;

#[derive(Clone)]
pub struct NotificationsViewModel {
    source: PlaceholderRepository,
    store: ScreenStore<Vec<Notification>>,
}

impl NotificationsViewModel {
    pub fn new(source: PlaceholderRepository) -> Self {
        Self {
            source,
            store: ScreenStore::new(),
        }
    }

    pub fn state(&self) -> NotificationsState {
        self.store.state()
    }

    pub fn unread_count(&self) -> usize {
        self.store.state().data.iter().filter(|n| !n.read).count()
    }

    pub async fn load(&self) -> ApiResult<()> {
        self.store
            .load(OnStart::Keep, self.source.notifications())
            .await
            .map(|_| ())
    }

    pub async fn mark_read(&self, notification_id: &str) -> ApiResult<()> {
        self.store
            .load(OnStart::Keep, self.source.mark_read(notification_id))
            .await
            .map(|_| ())
    }

    pub async fn mark_all_read(&self) -> ApiResult<()> {
        self.store
            .load(OnStart::Keep, self.source.mark_all_read())
            .await
            .map(|_| ())
    }
}

//! One view-model per screen.
//!
//! Each view-model owns a store, calls its repositories, and exposes the
//! resulting state. Data screens run on [`ScreenState`](super::mvi::ScreenState),
//! form screens on [`FormState`](super::mvi::FormState).

mod change_password;
mod comments;
mod compose;
mod forgot_password;
mod home;
mod login;
mod messages;
mod notifications;
mod profile;
mod register;
mod search;

pub use change_password::{ChangePasswordState, ChangePasswordViewModel};
pub use comments::{CommentsState, CommentsViewModel, Thread, NO_POST};
pub use compose::{ComposeState, ComposeViewModel};
pub use forgot_password::{ForgotPasswordState, ForgotPasswordViewModel};
pub use home::{Feed, HomeState, HomeViewModel};
pub use login::{LoginState, LoginViewModel};
pub use messages::{Inbox, MessagesState, MessagesViewModel, NO_CHAT_OPEN};
pub use notifications::{NotificationsState, NotificationsViewModel};
pub use profile::{Profile, ProfileState, ProfileTarget, ProfileViewModel, NO_PROFILE};
pub use register::{RegisterState, RegisterViewModel};
pub use search::{SearchData, SearchState, SearchViewModel};

/// Failure-to-field routing per form screen.
pub mod classify {
    pub use super::change_password::classify as change_password;
    pub use super::compose::classify as compose;
    pub use super::forgot_password::classify as forgot_password;
    pub use super::login::classify as login;
    pub use super::register::classify as register;
}

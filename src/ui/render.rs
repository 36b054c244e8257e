//! Plain-text views of screen state.
//!
//! Every function returns the lines to print; nothing here does I/O.

use crate::api::Field;
use crate::models::{Chat, Comment, Notification, NotificationKind, Post, User};
use crate::ui::mvi::{FormState, Phase, ScreenState};
use crate::ui::screens::{Feed, Inbox, Profile, SearchData, Thread};

pub const LOADING: &str = "Cargando…";
pub const RETRY_HINT: &str = "Vuelve a intentarlo.";
pub const EMPTY_FEED: &str = "No hay publicaciones todavía.";
pub const NO_RESULTS: &str = "Sin resultados.";

/// Wrap a screen body with its loading or error line.
///
/// A failure with nothing to show yet is an initial-load failure and gets a
/// retry hint; a failure on top of loaded data keeps the data visible.
pub fn screen<T>(state: &ScreenState<T>, body: impl Fn(&T) -> Vec<String>) -> Vec<String> {
    let mut lines = Vec::new();
    match state.phase() {
        Phase::Loading => lines.push(LOADING.to_string()),
        Phase::Failed => {
            let message = state.error.as_deref().unwrap_or_default();
            lines.push(format!("Error: {}", message));
        }
        Phase::Ready => {}
    }
    let content = body(&state.data);
    if state.phase() == Phase::Failed && content.is_empty() {
        lines.push(RETRY_HINT.to_string());
    }
    lines.extend(content);
    lines
}

/// Inline field errors of a form, general slot last.
pub fn form_errors<T>(state: &FormState<T>) -> Vec<String> {
    let mut lines: Vec<String> = state
        .errors
        .iter()
        .filter(|(field, _)| **field != Field::General)
        .map(|(field, message)| format!("{}: {}", field_label(*field), message))
        .collect();
    if let Some(general) = state.general_error() {
        lines.push(general.to_string());
    }
    lines
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Username => "Usuario",
        Field::Email => "Correo",
        Field::Password => "Contraseña",
        Field::NewPassword => "Nueva contraseña",
        Field::ConfirmPassword => "Confirmación",
        Field::Content => "Contenido",
        Field::General => "Error",
    }
}

pub fn post(post: &Post) -> Vec<String> {
    let mut lines = vec![format!("@{} · {}", post.author.display_name(), post.id)];
    if !post.content.is_empty() {
        lines.push(format!("  {}", post.content));
    }
    if !post.images.is_empty() {
        lines.push(format!("  [{} imagen(es)]", post.images.len()));
    }
    if !post.tags.is_empty() {
        let tags: Vec<_> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        lines.push(format!("  {}", tags.join(" ")));
    }
    lines.push(format!(
        "  {} {}  · {} comentarios{}",
        if post.liked { "♥" } else { "♡" },
        post.likes_count,
        post.comments_count,
        if post.favorited { "  · ★" } else { "" },
    ));
    lines
}

pub fn feed(feed: &Feed) -> Vec<String> {
    if feed.posts.is_empty() {
        return vec![EMPTY_FEED.to_string()];
    }
    let mut lines: Vec<String> = feed.posts.iter().flat_map(post).collect();
    if feed.has_more {
        lines.push(format!("(página {}, hay más)", feed.page));
    }
    lines
}

pub fn user(user: &User) -> Vec<String> {
    vec![
        format!("{} (@{})", user.display_name(), user.username),
        format!("  {}", user.bio_or_placeholder()),
        format!(
            "  {} publicaciones · {} seguidores · {} siguiendo",
            user.posts_count, user.followers_count, user.following_count
        ),
    ]
}

pub fn profile(profile: &Profile) -> Vec<String> {
    let Some(u) = &profile.user else {
        return Vec::new();
    };
    let mut lines = user(u);
    if !profile.is_me {
        lines.push(if u.is_following {
            "  [Siguiendo]".to_string()
        } else {
            "  [Seguir]".to_string()
        });
    }
    lines.extend(profile.posts.iter().flat_map(post));
    lines
}

pub fn search(data: &SearchData) -> Vec<String> {
    if data.query.is_empty() {
        return Vec::new();
    }
    if data.results.is_empty() {
        return vec![NO_RESULTS.to_string()];
    }
    let mut lines = Vec::new();
    lines.extend(
        data.results
            .users
            .iter()
            .map(|u| format!("@{} · {}", u.username, u.display_name())),
    );
    lines.extend(data.results.posts.iter().flat_map(post));
    lines.extend(
        data.results
            .tags
            .iter()
            .map(|t| format!("#{} · {} publicaciones", t.name, t.posts_count)),
    );
    lines
}

pub fn notification(n: &Notification) -> String {
    let icon = match n.kind {
        NotificationKind::Like => "♥",
        NotificationKind::Comment => "💬",
        NotificationKind::Follow => "+",
        NotificationKind::Mention => "@",
    };
    let marker = if n.read { " " } else { "•" };
    format!("{} {} [{}] {} {}", marker, icon, n.id, n.actor, n.message)
}

pub fn notifications(list: &[Notification]) -> Vec<String> {
    list.iter().map(notification).collect()
}

fn chat_summary(chat: &Chat) -> String {
    let last = chat.last_message().map(|m| m.text.as_str()).unwrap_or_default();
    let unread = if chat.unread > 0 {
        format!(" ({})", chat.unread)
    } else {
        String::new()
    };
    format!("[{}] {}{}: {}", chat.id, chat.participant, unread, last)
}

pub fn inbox(inbox: &Inbox) -> Vec<String> {
    match &inbox.open {
        Some(chat) => {
            let mut lines = vec![format!("Conversación con {}", chat.participant)];
            lines.extend(chat.messages.iter().map(|m| {
                let who = if m.sent_by_me { "yo" } else { m.sender.as_str() };
                format!("  {}: {}", who, m.text)
            }));
            lines
        }
        None => inbox.chats.iter().map(chat_summary).collect(),
    }
}

pub fn comment(c: &Comment) -> String {
    format!("@{}: {}", c.author.display_name(), c.content)
}

pub fn thread(thread: &Thread) -> Vec<String> {
    thread.comments.iter().map(comment).collect()
}

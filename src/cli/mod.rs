//! Command-line front end: one command per screen action.

mod args;

pub use args::{Cli, Command, ScopeArg};

use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiClient, ApiResult, ImageAttachment};
use crate::config::{ConfigError, ConfigStore};
use crate::repository::Repositories;
use crate::session::{SessionContext, SessionStorage, StorageError};
use crate::ui::mvi::{FormState, ScreenState};
use crate::ui::render;
use crate::ui::screens::{
    ChangePasswordViewModel, CommentsViewModel, ComposeViewModel, ForgotPasswordViewModel,
    HomeViewModel, LoginViewModel, MessagesViewModel, NotificationsViewModel, ProfileTarget,
    ProfileViewModel, RegisterViewModel, SearchViewModel,
};

/// Install the stderr log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("No se pudo leer la imagen {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The action failed; the lines are the rendered screen.
    #[error("{}", lines.join("\n"))]
    Failed { lines: Vec<String> },
}

/// Wired client, session and repositories for one invocation.
pub struct App {
    config: ConfigStore,
    session: SessionContext,
    repos: Repositories,
}

impl App {
    pub fn new(config: ConfigStore) -> Result<Self, CliError> {
        let snapshot = config.get();
        let storage = SessionStorage::new(snapshot.session.resolved_dir());
        let session = SessionContext::new(storage);
        if session.restore()? {
            tracing::debug!("Restored stored session");
        }

        let client = ApiClient::new(&snapshot.api, session.clone())?;
        tracing::debug!(base_url = %client.base_url(), "Client ready");
        let repos = Repositories::new(client, &snapshot.api);
        Ok(Self {
            config,
            session,
            repos,
        })
    }

    /// Build from already-constructed parts.
    pub fn with_parts(config: ConfigStore, session: SessionContext, repos: Repositories) -> Self {
        Self {
            config,
            session,
            repos,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Run one command and return the lines to print.
    pub async fn execute(&self, command: Command) -> Result<Vec<String>, CliError> {
        let repos = &self.repos;
        match command {
            Command::Login { email, password } => {
                let vm = LoginViewModel::new(repos.auth.clone());
                let ok = vm.login(&email, &password).await;
                form_outcome(ok, &vm.state())?;
                let user = vm.navigation_handled();
                Ok(vec![format!(
                    "Sesión iniciada como @{}",
                    user.map(|u| u.username).unwrap_or_default()
                )])
            }
            Command::Register {
                username,
                email,
                password,
                confirm,
            } => {
                let vm = RegisterViewModel::new(repos.auth.clone());
                let ok = vm.register(&username, &email, &password, &confirm).await;
                form_outcome(ok, &vm.state())?;
                let user = vm.navigation_handled();
                Ok(vec![format!(
                    "Cuenta creada. Bienvenido, @{}",
                    user.map(|u| u.username).unwrap_or_default()
                )])
            }
            Command::ForgotPassword { email } => {
                let vm = ForgotPasswordViewModel::new(repos.auth.clone());
                let ok = vm.submit(&email).await;
                form_outcome(ok, &vm.state())?;
                Ok(vec![format!(
                    "Te enviamos un correo a {} para restablecer la contraseña.",
                    email.trim()
                )])
            }
            Command::ChangePassword {
                current,
                new,
                confirm,
            } => {
                let vm = ChangePasswordViewModel::new(repos.auth.clone());
                let ok = vm.submit(&current, &new, &confirm).await;
                form_outcome(ok, &vm.state())?;
                vm.navigation_handled();
                Ok(vec!["Contraseña actualizada.".to_string()])
            }
            Command::Logout => {
                repos.auth.logout();
                Ok(vec!["Sesión cerrada.".to_string()])
            }
            Command::Feed { pages } => {
                let vm = self.home();
                let mut result = vm.load_posts().await;
                for _ in 1..pages {
                    if result.is_err() || !vm.state().data.has_more {
                        break;
                    }
                    result = vm.load_more().await;
                }
                screen_outcome(result, &vm.state(), render::feed)
            }
            Command::Like { post_id } => {
                let vm = self.home();
                let result = vm.toggle_like(&post_id).await;
                let status = screen_result(result, &vm.state())?;
                let verdict = if status.liked { "Te gusta" } else { "Ya no te gusta" };
                Ok(vec![match status.likes_count {
                    Some(count) => format!("{} · {} me gusta", verdict, count),
                    None => verdict.to_string(),
                }])
            }
            Command::Favorite { post_id } => {
                let vm = self.home();
                let result = vm.toggle_favorite(&post_id).await;
                let status = screen_result(result, &vm.state())?;
                Ok(vec![if status.favorited {
                    "Guardado en favoritos.".to_string()
                } else {
                    "Quitado de favoritos.".to_string()
                }])
            }
            Command::Edit { post_id, content } => {
                let post = repos
                    .posts
                    .update_post(&post_id, &content)
                    .await
                    .map_err(|e| CliError::Failed {
                        lines: vec![format!("Error: {}", e)],
                    })?;
                Ok(render::post(&post))
            }
            Command::Delete { post_id } => {
                let vm = self.home();
                let result = vm.delete_post(&post_id).await;
                screen_result(result, &vm.state())?;
                Ok(vec!["Publicación eliminada.".to_string()])
            }
            Command::Post { caption, images } => {
                let attachments = images
                    .into_iter()
                    .map(|path| {
                        ImageAttachment::from_path(&path)
                            .map_err(|source| CliError::Image { path, source })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let vm = ComposeViewModel::new(repos.posts.clone());
                let ok = vm.publish(&caption, &attachments).await;
                form_outcome(ok, &vm.state())?;
                Ok(vm
                    .take_published()
                    .map(|post| render::post(&post))
                    .unwrap_or_default())
            }
            Command::Comments { post_id } => {
                let vm = CommentsViewModel::new(repos.posts.clone());
                let result = vm.load(&post_id).await;
                screen_outcome(result, &vm.state(), render::thread)
            }
            Command::Comment { post_id, text } => {
                let vm = CommentsViewModel::new(repos.posts.clone());
                let result = match vm.load(&post_id).await {
                    Ok(()) => vm.send(&text).await.map(|_| ()),
                    Err(e) => Err(e),
                };
                screen_outcome(result, &vm.state(), render::thread)
            }
            Command::Profile { user } => {
                let vm = self.profile();
                let target = user.map_or(ProfileTarget::Me, ProfileTarget::User);
                let result = vm.load(target).await;
                screen_outcome(result, &vm.state(), render::profile)
            }
            Command::Follow { user } => {
                let vm = self.profile();
                let result = match vm.load(ProfileTarget::User(user)).await {
                    Ok(()) => vm.toggle_follow().await.map(|_| ()),
                    Err(e) => Err(e),
                };
                screen_outcome(result, &vm.state(), render::profile)
            }
            Command::Search { query, scope } => {
                let vm = SearchViewModel::new(repos.search.clone());
                let result = vm.search(&query, scope.into()).await;
                screen_outcome(result, &vm.state(), render::search)
            }
            Command::Notifications { read, all } => {
                let vm = NotificationsViewModel::new(repos.placeholder.clone());
                let mut result = vm.load().await;
                if result.is_ok() {
                    if let Some(id) = read {
                        result = vm.mark_read(&id).await;
                    } else if all {
                        result = vm.mark_all_read().await;
                    }
                }
                screen_outcome(result, &vm.state(), |list| render::notifications(list))
            }
            Command::Messages { chat, send } => {
                let vm = MessagesViewModel::new(repos.placeholder.clone());
                let mut result = vm.load_chats().await;
                if let (true, Some(chat_id)) = (result.is_ok(), chat) {
                    result = vm.open_chat(&chat_id).await;
                    if let (true, Some(text)) = (result.is_ok(), send) {
                        result = vm.send(&text).await.map(|_| ());
                    }
                }
                screen_outcome(result, &vm.state(), render::inbox)
            }
        }
    }

    fn home(&self) -> HomeViewModel {
        HomeViewModel::new(self.repos.posts.clone(), self.repos.favorites.clone())
    }

    fn profile(&self) -> ProfileViewModel {
        ProfileViewModel::new(
            self.repos.auth.clone(),
            self.repos.users.clone(),
            self.repos.follow.clone(),
        )
    }
}

fn form_outcome<T>(ok: bool, state: &FormState<T>) -> Result<(), CliError> {
    if ok {
        Ok(())
    } else {
        Err(CliError::Failed {
            lines: render::form_errors(state),
        })
    }
}

fn screen_outcome<T>(
    result: ApiResult<()>,
    state: &ScreenState<T>,
    body: impl Fn(&T) -> Vec<String>,
) -> Result<Vec<String>, CliError> {
    let lines = render::screen(state, body);
    match result {
        Ok(()) => Ok(lines),
        Err(_) => Err(CliError::Failed { lines }),
    }
}

fn screen_result<T, V>(result: ApiResult<V>, state: &ScreenState<T>) -> Result<V, CliError> {
    result.map_err(|_| CliError::Failed {
        lines: render::screen(state, |_| Vec::new()),
    })
}

/// Parse-free entry point used by `main`.
pub async fn run(cli: Cli) -> Result<Vec<String>, CliError> {
    let config = ConfigStore::open(cli.config)?.with_environment(cli.environment);
    tracing::debug!(path = %config.path().display(), "Loaded configuration");
    let app = App::new(config)?;
    app.execute(cli.command).await
}

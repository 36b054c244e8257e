use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Environment;
use crate::models::SearchScope;

#[derive(Debug, Parser)]
#[command(name = "ripple", about = "Command-line client for the Ripple social network", version)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Backend environment (dev or prod).
    #[arg(long = "env", value_name = "ENV", value_parser = parse_environment, global = true)]
    pub environment: Option<Environment>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password.
    Login { email: String, password: String },
    /// Create an account and sign in.
    Register {
        username: String,
        email: String,
        password: String,
        confirm: String,
    },
    /// Request a password reset email.
    ForgotPassword { email: String },
    /// Change the password of the signed-in user.
    ChangePassword {
        current: String,
        new: String,
        confirm: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the home feed.
    Feed {
        /// Number of pages to load.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Like or unlike a post.
    Like { post_id: String },
    /// Add or remove a post from favorites.
    Favorite { post_id: String },
    /// Replace the text of one of your posts.
    Edit { post_id: String, content: String },
    /// Delete one of your posts.
    Delete { post_id: String },
    /// Publish a post.
    Post {
        #[arg(long, default_value = "")]
        caption: String,
        /// Image to attach; repeat for several.
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,
    },
    /// Show the comments of a post.
    Comments { post_id: String },
    /// Comment on a post.
    Comment { post_id: String, text: String },
    /// Show a profile; your own when USER is omitted.
    Profile { user: Option<String> },
    /// Follow or unfollow a user.
    Follow { user: String },
    /// Search users, posts and tags.
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,
    },
    /// List notifications.
    Notifications {
        /// Mark one notification as read.
        #[arg(long, value_name = "ID", conflicts_with = "all")]
        read: Option<String>,
        /// Mark every notification as read.
        #[arg(long)]
        all: bool,
    },
    /// List conversations, or open one.
    Messages {
        chat: Option<String>,
        /// Send a message to the opened conversation.
        #[arg(long, requires = "chat")]
        send: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    All,
    Users,
    Posts,
    Tags,
}

impl From<ScopeArg> for SearchScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::All => SearchScope::All,
            ScopeArg::Users => SearchScope::Users,
            ScopeArg::Posts => SearchScope::Posts,
            ScopeArg::Tags => SearchScope::Tags,
        }
    }
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    Environment::parse(value).ok_or_else(|| format!("unknown environment '{}'", value))
}

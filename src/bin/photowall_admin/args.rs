//! Command-line surface for `photowall-admin`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use photowall::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "photowall-admin",
    version,
    about = "Photowall admin API client",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigOverrides,

    /// Session cookie as `name=value` (read from env to keep it out of shell history)
    #[arg(long = "session", hide = true, env = "PHOTOWALL_SESSION", global = true)]
    pub session_env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post management (list/get/create/status/display-time/delete)
    Posts(PostsArgs),
    /// Image upload and attachment
    Images(ImagesArgs),
    /// Session check, login and logout
    Session(SessionArgs),
    /// Load an admin page (`/admin` or `/admin/edit/<slug>`) through the auth gate
    Page { route: String },
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List posts (admin view, or the public listing with --published)
    List {
        #[arg(long, default_value_t = false)]
        published: bool,
    },
    /// Get a post by slug
    Get { slug: String },
    /// Create a post from a title and print its slug
    Create {
        #[arg(long)]
        title: String,
        /// Initial display time, any supported date format
        #[arg(long)]
        display_time: Option<String>,
        /// Print the editor route instead of the bare slug
        #[arg(long, default_value_t = false)]
        open: bool,
    },
    /// Set a post's status (sent verbatim, e.g. draft or published)
    Status { slug: String, status: String },
    /// Set a post's display time
    DisplayTime { slug: String, display_time: String },
    /// Delete a post
    Delete { slug: String },
}

#[derive(Parser, Debug)]
pub struct ImagesArgs {
    #[command(subcommand)]
    pub action: ImagesCmd,
}

#[derive(Subcommand, Debug)]
pub enum ImagesCmd {
    /// Upload image files and print the assigned URLs
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Attach uploaded image URLs to a post, in order
    Attach {
        slug: String,
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[derive(Parser, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub action: SessionCmd,
}

#[derive(Subcommand, Debug)]
pub enum SessionCmd {
    /// Check whether the current session is accepted
    Me,
    /// Log in and print the session cookie
    Login {
        #[arg(long)]
        username: String,
        /// Path to a file containing the password (takes precedence over env)
        #[arg(long, env = "PHOTOWALL_PASSWORD_FILE")]
        password_file: Option<PathBuf>,
        /// Password from env (CLI flag hidden to avoid shell history leaks)
        #[arg(long = "password", hide = true, env = "PHOTOWALL_PASSWORD")]
        password_env: Option<String>,
    },
    /// End the current session
    Logout,
}

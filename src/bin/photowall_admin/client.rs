#![deny(clippy::all, clippy::pedantic)]

use thiserror::Error;

use photowall::application::context::AdminContext;
use photowall::application::error::AdminError;
use photowall::config::{LoadError, Settings};
use photowall::infra::error::InfraError;
use photowall::infra::http::ClientError;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] InfraError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error("password is required (use --password-file or PHOTOWALL_PASSWORD)")]
    MissingPassword,
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn build_ctx_from_cli(cli: &Cli, settings: &Settings) -> Result<AdminContext, CliError> {
    let ctx = AdminContext::new(&settings.api)?;
    let cookie = cli
        .session_env
        .as_deref()
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty());
    if let Some(cookie) = cookie {
        ctx.client.add_session_cookie(cookie)?;
    }
    Ok(ctx)
}

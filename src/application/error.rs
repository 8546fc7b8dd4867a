use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::{display_time::DisplayTimeError, slug::SlugError};
use crate::infra::http::ClientError;

/// Failure of an admin operation.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to {operation}: status {status}{}", body_suffix(.body))]
    Fetch {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("upload failed: status {status}")]
    Upload { status: StatusCode, body: String },
    /// 401/403 from the backend; page gates turn this into a login redirect.
    #[error("not authorized to {operation}: status {status}{}", body_suffix(.body))]
    Unauthorized {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("failed to decode response to {operation}: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
    #[error("invalid display time: {0}")]
    DisplayTime(#[from] DisplayTimeError),
    #[error("invalid slug: {0}")]
    Slug(#[from] SlugError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read `{}`: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AdminError {
    pub fn decode(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            operation,
            message: message.into(),
        }
    }

    /// HTTP status of a completed request that was rejected, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AdminError::Fetch { status, .. }
            | AdminError::Upload { status, .. }
            | AdminError::Unauthorized { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status().is_some_and(is_auth_status)
    }

    /// The request never produced a response (DNS, connect, reset, ...).
    pub fn is_transport(&self) -> bool {
        matches!(self, AdminError::Client(ClientError::Transport(_)))
    }
}

pub(crate) fn is_auth_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

fn body_suffix(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

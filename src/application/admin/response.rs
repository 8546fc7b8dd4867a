use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::application::error::{AdminError, is_auth_status};
use crate::infra::http::ClientError;

/// Pass successful responses through; turn anything else into an error that
/// names `operation`.
pub(crate) async fn ensure_success(
    response: Response,
    operation: &'static str,
) -> Result<Response, AdminError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if is_auth_status(status) {
        return Err(AdminError::Unauthorized {
            operation,
            status,
            body,
        });
    }
    Err(AdminError::Fetch {
        operation,
        status,
        body,
    })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    operation: &'static str,
) -> Result<T, AdminError> {
    let bytes = response.bytes().await.map_err(ClientError::from)?;
    serde_json::from_slice(&bytes).map_err(|err| AdminError::decode(operation, err.to_string()))
}

pub(crate) async fn read_text(
    response: Response,
    operation: &'static str,
) -> Result<String, AdminError> {
    let text = response.text().await.map_err(ClientError::from)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AdminError::decode(operation, "empty response body"));
    }
    Ok(trimmed.to_string())
}

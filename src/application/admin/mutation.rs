use std::sync::Arc;

use tracing::{error, info};

use crate::application::error::AdminError;
use crate::application::revalidate::Revalidator;
use crate::infra::http::{ApiClient, RequestOptions};

use super::response::ensure_success;

/// A prepared mutating request.
#[derive(Debug)]
pub struct MutationRequest {
    pub path: String,
    pub options: RequestOptions,
}

impl MutationRequest {
    pub fn new(path: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }
}

/// Runs mutations and raises the revalidation signal once per success.
#[derive(Clone)]
pub struct MutationRunner {
    client: ApiClient,
    revalidator: Arc<dyn Revalidator>,
}

impl MutationRunner {
    pub fn new(client: ApiClient, revalidator: Arc<dyn Revalidator>) -> Self {
        Self {
            client,
            revalidator,
        }
    }

    pub async fn run<F>(&self, operation: &'static str, prepare: F) -> Result<(), AdminError>
    where
        F: FnOnce() -> Result<MutationRequest, AdminError>,
    {
        match self.send(operation, prepare).await {
            Ok(()) => {
                self.revalidator.revalidate_all().await;
                info!(operation, "mutation applied");
                Ok(())
            }
            Err(err) => {
                error!(operation, error = %err, "mutation failed");
                Err(err)
            }
        }
    }

    async fn send<F>(&self, operation: &'static str, prepare: F) -> Result<(), AdminError>
    where
        F: FnOnce() -> Result<MutationRequest, AdminError>,
    {
        let MutationRequest { path, options } = prepare()?;
        let response = self.client.fetch(&path, options).await?;
        ensure_success(response, operation).await?;
        Ok(())
    }
}

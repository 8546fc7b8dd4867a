use std::sync::Arc;

use crate::application::admin::{AdminImageService, AdminPostService, MutationRunner};
use crate::application::gate::AdminGate;
use crate::application::notify::ToastLog;
use crate::application::revalidate::RevalidationHub;
use crate::application::session::SessionService;
use crate::config::ApiSettings;
use crate::infra::http::{ApiClient, ClientError};

/// Everything a presentation layer needs, wired around one shared client.
#[derive(Clone)]
pub struct AdminContext {
    pub client: ApiClient,
    pub revalidation: Arc<RevalidationHub>,
    pub toasts: Arc<ToastLog>,
    pub posts: AdminPostService,
    pub images: AdminImageService,
    pub session: SessionService,
    pub gate: AdminGate,
}

impl AdminContext {
    pub fn new(settings: &ApiSettings) -> Result<Self, ClientError> {
        let client = ApiClient::new(settings)?;
        Ok(Self::with_client(client, &settings.login_path))
    }

    pub fn with_client(client: ApiClient, login_path: &str) -> Self {
        let revalidation = Arc::new(RevalidationHub::new());
        let toasts = Arc::new(ToastLog::new());

        let posts = AdminPostService::new(client.clone(), revalidation.clone(), toasts.clone());
        let images = AdminImageService::new(
            client.clone(),
            MutationRunner::new(client.clone(), revalidation.clone()),
        );
        let session = SessionService::new(client.clone());
        let gate = AdminGate::new(session.clone(), posts.clone(), login_path);

        Self {
            client,
            revalidation,
            toasts,
            posts,
            images,
            session,
            gate,
        }
    }
}

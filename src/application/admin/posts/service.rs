use std::sync::Arc;

use crate::application::admin::MutationRunner;
use crate::application::error::AdminError;
use crate::application::notify::Notifier;
use crate::application::revalidate::Revalidator;
use crate::domain::slug;
use crate::infra::http::ApiClient;

#[derive(Clone)]
pub struct AdminPostService {
    pub(crate) client: ApiClient,
    pub(crate) mutations: MutationRunner,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl AdminPostService {
    pub fn new(
        client: ApiClient,
        revalidator: Arc<dyn Revalidator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            mutations: MutationRunner::new(client.clone(), revalidator),
            client,
            notifier,
        }
    }
}

/// `/admin/posts/{slug}{suffix}`
pub(crate) fn post_path(slug: &str, suffix: &str) -> Result<String, AdminError> {
    let segment = slug::path_segment(slug)?;
    Ok(format!("/admin/posts/{segment}{suffix}"))
}

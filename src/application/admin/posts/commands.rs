use tracing::{error, info};

use crate::application::admin::MutationRequest;
use crate::application::admin::response::{ensure_success, read_text};
use crate::application::error::AdminError;
use crate::application::gate::AdminRoute;
use crate::application::notify::Toast;
use crate::domain::display_time;
use crate::domain::types::PostStatus;
use crate::infra::http::RequestOptions;
use photowall_api_types::{CreatePostRequest, UpdateDisplayTimeRequest, UpdateStatusRequest};

use super::CREATE_POST_FAILED;
use super::service::{AdminPostService, post_path};

const CREATE_POST: &str = "create post";

impl AdminPostService {
    /// Create a post with only a title and return the slug the backend assigned.
    ///
    /// Every failure raises exactly one error toast before it is returned.
    pub async fn create_post(&self, title: &str) -> Result<String, AdminError> {
        self.create_post_at(title, None).await
    }

    /// Like [`Self::create_post`], with an initial display time.
    pub async fn create_post_at(
        &self,
        title: &str,
        display_time: Option<&str>,
    ) -> Result<String, AdminError> {
        match self.send_create_post(title, display_time).await {
            Ok(slug) => {
                info!(slug = %slug, "post created");
                Ok(slug)
            }
            Err(err) => {
                error!(operation = CREATE_POST, error = %err, "mutation failed");
                self.notifier.notify(Toast::error(CREATE_POST_FAILED));
                Err(err)
            }
        }
    }

    /// Create a post and hand back the editor route for it.
    pub async fn create_post_and_edit(&self, title: &str) -> Result<AdminRoute, AdminError> {
        let slug = self.create_post(title).await?;
        Ok(AdminRoute::Editor { slug })
    }

    async fn send_create_post(
        &self,
        title: &str,
        display_time: Option<&str>,
    ) -> Result<String, AdminError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AdminError::InvalidInput("title must not be empty".into()));
        }
        let display_time = display_time.map(display_time::normalize).transpose()?;

        let request = CreatePostRequest {
            title: title.to_string(),
            display_time,
        };
        let options = RequestOptions::post().json(&request)?;
        let response = self.client.fetch("/admin/add-post", options).await?;
        let response = ensure_success(response, CREATE_POST).await?;
        read_text(response, CREATE_POST).await
    }

    /// Any status string is forwarded; the backend decides what is valid.
    pub async fn update_status(
        &self,
        slug: &str,
        status: impl Into<PostStatus>,
    ) -> Result<(), AdminError> {
        let status = status.into();
        self.mutations
            .run("update status", || {
                let path = post_path(slug, "/status")?;
                let options = RequestOptions::put().json(&UpdateStatusRequest { status })?;
                Ok(MutationRequest::new(path, options))
            })
            .await
    }

    /// Normalize `display_time` to the canonical UTC form and send it.
    pub async fn update_display_time(
        &self,
        slug: &str,
        display_time: &str,
    ) -> Result<(), AdminError> {
        self.mutations
            .run("update display time", || {
                let path = post_path(slug, "/display-time")?;
                let request = UpdateDisplayTimeRequest {
                    display_time: display_time::normalize(display_time)?,
                };
                let options = RequestOptions::put().json(&request)?;
                Ok(MutationRequest::new(path, options))
            })
            .await
    }

    pub async fn delete_post(&self, slug: &str) -> Result<(), AdminError> {
        self.mutations
            .run("delete post", || {
                let path = post_path(slug, "")?;
                Ok(MutationRequest::new(path, RequestOptions::delete()))
            })
            .await
    }
}

use tracing::debug;

use crate::application::admin::response::{decode_json, ensure_success};
use crate::application::error::AdminError;
use crate::domain::types::{Post, PublicPost};
use crate::infra::http::RequestOptions;

use super::service::{AdminPostService, post_path};

impl AdminPostService {
    /// Public listing; needs no session.
    pub async fn list_published_posts(&self) -> Result<Vec<PublicPost>, AdminError> {
        const OPERATION: &str = "fetch published posts";

        let response = self.client.fetch("/posts", RequestOptions::get()).await?;
        let response = ensure_success(response, OPERATION).await?;
        let posts: Vec<PublicPost> = decode_json(response, OPERATION).await?;
        debug!(count = posts.len(), "fetched published posts");
        Ok(posts)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, AdminError> {
        const OPERATION: &str = "fetch posts";

        let response = self
            .client
            .fetch("/admin/posts", RequestOptions::get())
            .await?;
        let response = ensure_success(response, OPERATION).await?;
        let posts: Vec<Post> = decode_json(response, OPERATION).await?;
        debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }

    pub async fn get_post(&self, slug: &str) -> Result<Post, AdminError> {
        const OPERATION: &str = "fetch post";

        let path = post_path(slug, "")?;
        let response = self.client.fetch(&path, RequestOptions::get()).await?;
        let response = ensure_success(response, OPERATION).await?;
        decode_json(response, OPERATION).await
    }
}

//! Image upload and attachment.
//!
//! Uploading and attaching are separate steps so images can be uploaded
//! before the post they belong to is saved.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::{debug, error};

use crate::application::admin::response::decode_json;
use crate::application::admin::{MutationRequest, MutationRunner};
use crate::application::error::AdminError;
use crate::domain::slug;
use crate::infra::http::{ApiClient, RequestOptions};
use photowall_api_types::{AttachImagesRequest, UploadImagesResponse};

const UPLOAD_FIELD: &str = "images";
const UPLOAD_IMAGES: &str = "upload images";

/// One file destined for the upload form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Content type is guessed from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first()
            .map(|mime| mime.essence_str().to_string());
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, AdminError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| AdminError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                AdminError::InvalidInput(format!("{} has no file name", path.display()))
            })?;
        Ok(Self::new(file_name, bytes))
    }

    fn into_part(self) -> Result<Part, AdminError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.content_type {
            Some(content_type) => part.mime_str(&content_type).map_err(|_| {
                AdminError::InvalidInput(format!("invalid content type `{content_type}`"))
            }),
            None => Ok(part),
        }
    }
}

#[derive(Clone)]
pub struct AdminImageService {
    client: ApiClient,
    mutations: MutationRunner,
}

impl AdminImageService {
    pub fn new(client: ApiClient, mutations: MutationRunner) -> Self {
        Self { client, mutations }
    }

    /// Upload every file in one multipart request and return the URLs the
    /// backend assigned, in response order.
    pub async fn upload_images(&self, files: Vec<ImageUpload>) -> Result<Vec<String>, AdminError> {
        let result = self.send_upload(files).await;
        if let Err(err) = &result {
            error!(operation = UPLOAD_IMAGES, error = %err, "upload failed");
        }
        result
    }

    async fn send_upload(&self, files: Vec<ImageUpload>) -> Result<Vec<String>, AdminError> {
        if files.is_empty() {
            return Err(AdminError::InvalidInput("no images to upload".into()));
        }

        let count = files.len();
        let mut form = Form::new();
        for file in files {
            form = form.part(UPLOAD_FIELD, file.into_part()?);
        }

        let response = self
            .client
            .fetch("/admin/upload-images", RequestOptions::post().multipart(form))
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdminError::Upload { status, body });
        }

        let decoded: UploadImagesResponse = decode_json(response, UPLOAD_IMAGES).await?;
        debug!(sent = count, received = decoded.image_urls.len(), "images uploaded");
        Ok(decoded.image_urls)
    }

    /// Associate already uploaded image URLs with a post, keeping their order.
    pub async fn attach_images(&self, slug: &str, image_urls: &[String]) -> Result<(), AdminError> {
        self.mutations
            .run("attach images", || {
                let post_slug = slug::path_segment(slug)?.to_string();
                let request = AttachImagesRequest {
                    post_slug,
                    image_urls: image_urls.to_vec(),
                };
                let options = RequestOptions::post().json(&request)?;
                Ok(MutationRequest::new("/admin/attach-images", options))
            })
            .await
    }
}

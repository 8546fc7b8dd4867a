//! Request and response shapes exchanged with the Photowall blog API.
//!
//! Field names follow the backend's JSON exactly; timestamps travel as RFC 3339.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Publication state of a post.
///
/// The backend validates transitions; unknown values are carried verbatim so
/// the client never rejects a status the server accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    Draft,
    Published,
    Other(String),
}

impl PostStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Other(value) => value.as_str(),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PostStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => PostStatus::Draft,
            "published" => PostStatus::Published,
            _ => PostStatus::Other(value),
        }
    }
}

impl From<&str> for PostStatus {
    fn from(value: &str) -> Self {
        PostStatus::from(value.to_string())
    }
}

impl From<PostStatus> for String {
    fn from(value: PostStatus) -> Self {
        match value {
            PostStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PostStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PostStatus::from(s))
    }
}

/// A post as returned by the admin endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub status: PostStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub display_time: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    /// Attached image references in display order.
    #[serde(default, alias = "photos")]
    pub images: Vec<String>,
}

/// A published post as returned by the public listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPost {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub display_time: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: PostStatus,
}

/// Display-time update; the value must already be in canonical form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDisplayTimeRequest {
    pub display_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachImagesRequest {
    pub post_slug: String,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImagesResponse {
    pub image_urls: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

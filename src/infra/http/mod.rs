//! HTTP adapters for the backend API.

pub mod client;

pub use client::{ApiClient, ClientError, RequestBody, RequestOptions};

mod commands;
mod queries;
mod service;

pub use service::*;

pub(crate) const CREATE_POST_FAILED: &str = "Failed to create post";

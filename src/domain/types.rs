//! Post shapes shared with the API types crate.

pub use photowall_api_types::{Post, PostStatus, PublicPost};

//! Resource operations against the admin API.

pub mod images;
pub mod posts;
pub(crate) mod response;

mod mutation;

pub use images::{AdminImageService, ImageUpload};
pub use mutation::{MutationRequest, MutationRunner};
pub use posts::AdminPostService;

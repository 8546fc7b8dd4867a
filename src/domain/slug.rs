//! Slug checks applied before a slug is embedded in a request path.
//!
//! Slugs are generated by the backend and otherwise opaque to the client. The
//! only local rule is that a slug must occupy exactly one path segment.

use thiserror::Error;

// `\` splits http paths like `/`, and `%` could carry an encoded separator.
const RESERVED: &[char] = &['/', '\\', '?', '#', '%'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("slug `{slug}` contains reserved character `{found}`")]
    Reserved { slug: String, found: char },
    #[error("slug `{0}` is a dot segment")]
    DotSegment(String),
}

/// Return the slug unchanged if it can be used as a single path segment.
pub fn path_segment(slug: &str) -> Result<&str, SlugError> {
    if slug.trim().is_empty() {
        return Err(SlugError::Empty);
    }
    if slug == "." || slug == ".." {
        return Err(SlugError::DotSegment(slug.to_string()));
    }
    if let Some(found) = slug.chars().find(|c| RESERVED.contains(c)) {
        return Err(SlugError::Reserved {
            slug: slug.to_string(),
            found,
        });
    }
    Ok(slug)
}
